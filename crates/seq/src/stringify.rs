use std::fmt::{Display, Write};

use crate::DEFAULT_DELIMITER;

/// Renders each element through `Display` and joins them with `delimiter`.
///
/// Floats print in their shortest round-trip form without an exponent
/// (`0.1`, `1`, `1e21` as `1000000000000000000000`).
pub fn to_delimited_string<T: Display>(data: &[T], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, x) in data.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        let _ = write!(out, "{x}");
    }
    out
}

#[inline]
pub fn to_csv_string<T: Display>(data: &[T]) -> String {
    to_delimited_string(data, DEFAULT_DELIMITER)
}
