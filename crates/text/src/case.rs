use std::sync::LazyLock;

use regex::{Captures, Regex};

// Any character followed by a capitalized word: `aWord`, `PWord`.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid regex"));
// Lowercase letter or digit followed by an uppercase letter.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid regex"));
static SNAKE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("_([a-z])").expect("valid regex"));

/// Converts camelCase or PascalCase to snake_case.
///
/// Acronym runs stay together: `getHTTPResponse` becomes `get_http_response`.
pub fn to_snake_case(input: &str) -> String {
    let snake = WORD_BOUNDARY.replace_all(input, "${1}_${2}");
    let snake = CASE_BOUNDARY.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}

/// Converts snake_case to camelCase. Only an underscore followed by an ASCII
/// lowercase letter is folded; other underscores are kept.
pub fn snake_to_camel(input: &str) -> String {
    SNAKE_SEGMENT
        .replace_all(input, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

pub fn snake_to_pascal(input: &str) -> String {
    let camel = snake_to_camel(input);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
