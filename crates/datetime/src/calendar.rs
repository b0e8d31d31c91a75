use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Weekday};

/// Whether `t` falls strictly between `a` and `b`.
pub fn is_between<Tz: TimeZone>(t: &DateTime<Tz>, a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a < t && t < b
}

/// Whole days from `start` to `end`, truncated toward zero. Negative when
/// `end` precedes `start`.
pub fn diff_in_days<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> i64 {
    end.clone().signed_duration_since(start.clone()).num_days()
}

/// Number of `day`s met when stepping one calendar day at a time from `start`
/// while still before `end`. `start` itself is counted.
///
/// Each step keeps `start`'s local wall-clock time. A repeated local time
/// resolves to its earlier instant; a skipped one moves forward past the gap.
pub fn count_weekday_between<Tz: TimeZone>(
    day: Weekday,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> usize {
    let tz = start.timezone();
    let wall_time = start.naive_local().time();
    let mut date = start.naive_local().date();
    let mut cursor = start.clone();

    let mut count = 0;
    while cursor < *end {
        if date.weekday() == day {
            count += 1;
        }
        let Some(next_date) = date.succ_opt() else {
            break;
        };
        let Some(next) = resolve_local(&tz, next_date.and_time(wall_time)) else {
            break;
        };
        date = next_date;
        cursor = next;
    }
    count
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let mut probe = local;
    for _ in 0..GAP_STEPS {
        if let Some(resolved) = tz.from_local_datetime(&probe).earliest() {
            return Some(resolved);
        }
        probe = probe.checked_add_signed(Duration::minutes(GAP_STEP_MINUTES))?;
    }
    None
}

// Local-time gaps are searched in 15 minute steps for up to a day.
const GAP_STEP_MINUTES: i64 = 15;
const GAP_STEPS: usize = 96;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
