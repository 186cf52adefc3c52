//! Coarse "how long ago" phrasing for publish dates
//!
//! Produces a bare duration with a single unit ("3 days", "1 year"). The
//! qualifier a distance-in-words phrase would normally carry ("about",
//! "over", "almost", "less than") is dropped, and the caller appends "ago".

use chrono::{DateTime, Datelike, Timelike, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Format the distance between `published` and `now` using its largest unit
pub fn relative_age(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later) = if published <= now {
        (published, now)
    } else {
        (now, published)
    };

    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            "a minute".into()
        } else {
            count(1, "minute")
        };
    }
    if minutes < 45 {
        return count(minutes, "minute");
    }
    if minutes < 90 {
        return count(1, "hour");
    }
    if minutes < MINUTES_IN_DAY {
        return count(round_div(minutes, 60), "hour");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return count(1, "day");
    }
    if minutes < MINUTES_IN_MONTH {
        return count(round_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return count(round_div(minutes, MINUTES_IN_MONTH), "month");
    }

    let months = whole_months_between(earlier, later);
    if months < 12 {
        return count(round_div(minutes, MINUTES_IN_MONTH), "month");
    }

    let years = months / 12;
    if months % 12 < 9 {
        count(years, "year")
    } else {
        // "almost N+1 years"
        count(years + 1, "year")
    }
}

/// Full calendar months between two instants
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    let later_key = (later.day(), later.num_seconds_from_midnight());
    let earlier_key = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_key < earlier_key {
        months -= 1;
    }

    months.max(0)
}

/// Integer division rounding half up
fn round_div(value: i64, divisor: i64) -> i64 {
    (value * 2 + divisor) / (divisor * 2)
}

fn count(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
