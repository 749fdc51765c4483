use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// `YYYY-MM-DD HH:MM:SS` in the given offset.
pub fn to_local_display(dt: DateTime<Utc>, offset: FixedOffset) -> String {
    dt.with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// ISO-8601 with microseconds and explicit offset, e.g. `2026-10-14T09:30:00.000000-05:00`.
pub fn to_local_iso8601(dt: DateTime<Utc>, offset: FixedOffset) -> String {
    dt.with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn within_last_day(dt: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - Duration::days(1) <= dt && dt <= now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bogota() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    #[test]
    fn local_display_shifts_into_offset() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 14, 3, 4, 5).unwrap();
        assert_eq!(to_local_display(dt, bogota()), "2026-10-13 22:04:05");
    }

    #[test]
    fn local_iso8601_keeps_offset_and_micros() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 14, 15, 0, 0).unwrap()
            + Duration::microseconds(250);
        let formatted = to_local_iso8601(dt, bogota());
        assert_eq!(formatted, "2026-10-14T10:00:00.000250-05:00");
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }

    #[test]
    fn last_day_window_is_inclusive_and_rejects_future() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        assert!(within_last_day(now, now));
        assert!(within_last_day(now - Duration::days(1), now));
        assert!(!within_last_day(now - Duration::days(1) - Duration::seconds(1), now));
        assert!(!within_last_day(now + Duration::seconds(1), now));
    }
}
