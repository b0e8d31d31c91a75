use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Timelike};

/// `yyyymmdd`.
pub fn date_stamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    t.format("%Y%m%d").to_string()
}

/// `HH:MM:SS:CC`, where `CC` is hundredths of a second.
pub fn time_stamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    // A leap second reports 1_000_000_000.. nanoseconds.
    let centis = (t.nanosecond() / 10_000_000).min(99);
    format!("{}:{centis:02}", t.format("%H:%M:%S"))
}

pub fn today_stamp() -> String {
    date_stamp(&Local::now())
}

pub fn clock_stamp() -> String {
    time_stamp(&Local::now())
}
