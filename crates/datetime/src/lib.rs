//! Date and time helpers over `chrono`.
//!
//! Functions that read the clock have a pure counterpart taking the instant
//! explicitly; the pure form is the one to test against.

mod calendar;
mod offset;
mod stamp;

pub use calendar::{count_weekday_between, diff_in_days, is_between, is_leap_year};
pub use offset::{DateTimeError, now_at_offset, parse_offset};
pub use stamp::{clock_stamp, date_stamp, time_stamp, today_stamp};
