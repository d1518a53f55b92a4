use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

/// Formats tried by [`parse_datetime`] when the caller supplies none
pub const DEFAULT_DATE_FORMATS: [&str; 13] = [
    "%Y%m%dT%H%M%SZ",
    "%Y%m%dT%H%MZ",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
    "%Y%m%d%H%M%S",
    "%Y%m%d%H%M",
    "%Y%m%d",
    "%Y-%m-%dT%H-%M-%S",
    "%Y-%m-%d-%H-%M-%S",
    "%Y-%m-%d-%H-%M",
    "%Y-%m-%d",
    "%m-%d-%Y",
    "%d/%m/%Y",
];

/// Human-readable distance between `then` and `now`, e.g. "5 minutes ago".
///
/// Only the magnitude of the difference is used.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - then).num_seconds().abs();

    if delta < MINUTE {
        return if delta == 1 {
            "one second ago".to_string()
        } else {
            format!("{delta} seconds ago")
        };
    }
    if delta < 2 * MINUTE {
        return "a minute ago".to_string();
    }
    if delta < 45 * MINUTE {
        return format!("{} minutes ago", delta / MINUTE);
    }
    if delta < 90 * MINUTE {
        return "an hour ago".to_string();
    }
    if delta < DAY {
        return format!("{} hours ago", delta / HOUR);
    }
    if delta < 2 * DAY {
        return "yesterday".to_string();
    }
    if delta < 30 * DAY {
        return format!("{} days ago", delta / DAY);
    }

    let days = delta / DAY;
    if delta < 12 * MONTH {
        let months = days / 30;
        if months <= 1 {
            "one month ago".to_string()
        } else {
            format!("{months} months ago")
        }
    } else {
        let years = days / 365;
        if years <= 1 {
            "one year ago".to_string()
        } else {
            format!("{years} years ago")
        }
    }
}

pub fn time_ago_from_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}

/// English ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, 11th, 22nd
pub fn nth_suffix<D: Datelike>(date: &D) -> &'static str {
    let day = date.day();
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Try each format in order; date-only formats resolve to midnight.
///
/// An empty `formats` slice falls back to [`DEFAULT_DATE_FORMATS`].
pub fn parse_datetime(text: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    let formats = if formats.is_empty() { &DEFAULT_DATE_FORMATS[..] } else { formats };

    formats.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(text, format).ok().or_else(|| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
    })
}

/// Whole years between `birth` and `today`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn age(birth: NaiveDate) -> i32 {
    age_on(birth, Utc::now().date_naive())
}

/// Milliseconds since the Unix epoch
pub fn unix_millis(value: DateTime<Utc>) -> i64 {
    value.timestamp_millis()
}
