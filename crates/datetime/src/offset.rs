use chrono::{DateTime, FixedOffset, Utc};

#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("invalid UTC offset {spec:?}: expected UTC, Z or ±HH:MM")]
    InvalidOffset {
        spec: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

/// Parses `UTC`, `Z` or a signed `±HH:MM` / `±HHMM` offset.
pub fn parse_offset(spec: &str) -> Result<FixedOffset, DateTimeError> {
    let trimmed = spec.trim();
    let invalid = |source| DateTimeError::InvalidOffset {
        spec: spec.to_string(),
        source,
    };

    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| invalid(None));
    }

    if !is_offset_shape(trimmed) {
        tracing::debug!(spec, "rejected utc offset");
        return Err(invalid(None));
    }

    trimmed.parse::<FixedOffset>().map_err(|err| {
        tracing::debug!(spec, error = %err, "rejected utc offset");
        invalid(Some(err))
    })
}

/// `±HH:MM` or `±HHMM` with nothing before or after.
fn is_offset_shape(s: &str) -> bool {
    let digits = match s.as_bytes() {
        [b'+' | b'-', rest @ ..] => rest,
        _ => return false,
    };
    match digits {
        [h1, h2, b':', m1, m2] | [h1, h2, m1, m2] => {
            [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Current instant viewed at the given offset.
pub fn now_at_offset(spec: &str) -> Result<DateTime<FixedOffset>, DateTimeError> {
    let offset = parse_offset(spec)?;
    Ok(Utc::now().with_timezone(&offset))
}
