use std::sync::LazyLock;

use regex::Regex;

static WINDOWS_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]:[\\/](?:[A-Za-z0-9_.-]+[\\/]*)+").expect("valid regex")
});

/// First drive-letter path (`C:\dir\file.txt` or `D:/dir`) found in `line`.
pub fn find_windows_path(line: &str) -> Option<&str> {
    WINDOWS_PATH.find(line).map(|m| m.as_str())
}
