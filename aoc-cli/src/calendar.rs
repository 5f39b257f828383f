//! Puzzle release rules, evaluated in US Eastern time
//!
//! Puzzles unlock at midnight Eastern on December 1st through 25th. Every
//! instant these rules look at falls in December or at the New Year, when the
//! US East Coast is always on standard time, so Eastern is modelled as a fixed
//! UTC-5 offset.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

pub const FIRST_PUZZLE_YEAR: u16 = 2015;
pub const FIRST_PUZZLE_DAY: u8 = 1;
pub const LAST_PUZZLE_DAY: u8 = 25;

const EASTERN_STANDARD_OFFSET_SECS: i32 = 5 * 3600;

/// US Eastern standard time (UTC-5)
pub fn eastern() -> FixedOffset {
    FixedOffset::west_opt(EASTERN_STANDARD_OFFSET_SECS).expect("UTC-5 is a valid offset")
}

/// Current time on the US East Coast
pub fn eastern_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&eastern())
}

/// Instant a puzzle unlocks: midnight Eastern, December `day`, `year`
pub fn unlock_time(year: u16, day: u8) -> Option<DateTime<FixedOffset>> {
    eastern()
        .with_ymd_and_hms(i32::from(year), 12, u32::from(day), 0, 0, 0)
        .single()
}

/// Whether the puzzle for `year`/`day` has been released as of `now`
pub fn is_retrievable_at(year: u16, day: u8, now: DateTime<FixedOffset>) -> bool {
    let now = now.with_timezone(&eastern());

    if year < FIRST_PUZZLE_YEAR || i32::from(year) > now.year() {
        return false;
    }
    if !(FIRST_PUZZLE_DAY..=LAST_PUZZLE_DAY).contains(&day) {
        return false;
    }

    unlock_time(year, day).is_some_and(|unlock| now >= unlock)
}

/// Whether the puzzle for `year`/`day` has been released
pub fn is_retrievable(year: u16, day: u8) -> bool {
    is_retrievable_at(year, day, eastern_now())
}

/// The most recent event year: this year during December, last year otherwise
pub fn default_year(now: DateTime<FixedOffset>) -> u16 {
    let now = now.with_timezone(&eastern());
    let year = if now.month() == 12 {
        now.year()
    } else {
        now.year() - 1
    };
    u16::try_from(year).unwrap_or(FIRST_PUZZLE_YEAR)
}

/// Today's puzzle during the event, the last puzzle otherwise
pub fn default_day(now: DateTime<FixedOffset>) -> u8 {
    let now = now.with_timezone(&eastern());
    match u8::try_from(now.day()) {
        Ok(day) if now.month() == 12 && day <= LAST_PUZZLE_DAY => day,
        _ => LAST_PUZZLE_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn utc(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_unlock_is_midnight_eastern() {
        let unlock = unlock_time(2023, 1).unwrap();
        assert_eq!(unlock, utc("2023-12-01T05:00:00Z"));
    }

    #[test]
    fn test_unlock_boundary() {
        assert!(!is_retrievable_at(2023, 1, utc("2023-12-01T04:59:59Z")));
        assert!(is_retrievable_at(2023, 1, utc("2023-12-01T05:00:00Z")));
    }

    #[test]
    fn test_future_year_rejected_until_new_year_eastern() {
        // 2024-01-01 03:00 UTC is still New Year's Eve in New York
        assert!(!is_retrievable_at(2024, 1, utc("2024-01-01T03:00:00Z")));
        assert!(is_retrievable_at(2023, 25, utc("2024-01-01T03:00:00Z")));
    }

    #[test]
    fn test_default_year() {
        assert_eq!(default_year(utc("2024-11-30T12:00:00Z")), 2023);
        assert_eq!(default_year(utc("2024-12-05T12:00:00Z")), 2024);
        assert_eq!(default_year(utc("2025-01-01T03:00:00Z")), 2024);
        assert_eq!(default_year(utc("2025-01-01T06:00:00Z")), 2024);
    }

    #[test]
    fn test_default_day() {
        assert_eq!(default_day(utc("2024-12-03T12:00:00Z")), 3);
        assert_eq!(default_day(utc("2024-12-26T12:00:00Z")), 25);
        assert_eq!(default_day(utc("2024-07-14T12:00:00Z")), 25);
        // 04:00 UTC on the 4th is still the 3rd in New York
        assert_eq!(default_day(utc("2024-12-04T04:00:00Z")), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_year_before_first_event_rejected(
            year in 0u16..FIRST_PUZZLE_YEAR,
            day in 1u8..=25u8,
        ) {
            prop_assert!(!is_retrievable(year, day));
        }

        #[test]
        fn prop_day_outside_event_rejected(
            year in FIRST_PUZZLE_YEAR..2024u16,
            day in prop::sample::select(vec![0u8, 26, 27, 31, 100, 255]),
        ) {
            prop_assert!(!is_retrievable(year, day));
        }

        #[test]
        fn prop_released_exactly_at_unlock(
            year in FIRST_PUZZLE_YEAR..2100u16,
            day in 1u8..=25u8,
            before_secs in 1i64..(90 * 24 * 3600),
            after_secs in 0i64..(5 * 24 * 3600),
        ) {
            let unlock = unlock_time(year, day).unwrap();
            prop_assert!(!is_retrievable_at(year, day, unlock - Duration::seconds(before_secs)));
            prop_assert!(is_retrievable_at(year, day, unlock + Duration::seconds(after_secs)));
        }
    }
}
