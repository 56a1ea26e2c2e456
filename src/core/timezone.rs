use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::domain::model::BirthMoment;
use crate::utils::error::{ChartError, Result};

/// Converts a naive local date and time plus an IANA timezone identifier into
/// an absolute UTC instant, honoring that zone's historical offset and DST
/// rules for the given calendar date.
///
/// Ambiguous local times (the repeated hour when clocks fall back) resolve to
/// the earlier instant. Nonexistent local times (the skipped hour when clocks
/// spring forward) are rejected as a format error.
pub fn normalize(local_date: &str, local_time: &str, tz_id: &str) -> Result<BirthMoment> {
    let date = NaiveDate::parse_from_str(local_date, "%Y-%m-%d")
        .map_err(|_| ChartError::InvalidDateTimeFormat)?;
    let time = NaiveTime::parse_from_str(local_time, "%H:%M")
        .map_err(|_| ChartError::InvalidDateTimeFormat)?;

    let tz = Tz::from_str(tz_id).map_err(|_| ChartError::UnknownTimezone {
        value: tz_id.to_string(),
    })?;

    let local = tz
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or(ChartError::InvalidDateTimeFormat)?;

    Ok(BirthMoment::new(local.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn utc_input_passes_through() {
        let moment = normalize("2000-01-01", "12:00", "UTC").unwrap();
        assert_eq!(moment.utc.to_rfc3339(), "2000-01-01T12:00:00+00:00");
    }

    #[test]
    fn normalization_is_deterministic() {
        let first = normalize("1990-06-15", "08:30", "Asia/Kathmandu").unwrap();
        let second = normalize("1990-06-15", "08:30", "Asia/Kathmandu").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dst_offset_is_honored_per_date() {
        // New York is UTC-4 in July, UTC-5 in January.
        let summer = normalize("2021-07-04", "12:00", "America/New_York").unwrap();
        assert_eq!(summer.utc.hour(), 16);

        let winter = normalize("2021-01-04", "12:00", "America/New_York").unwrap();
        assert_eq!(winter.utc.hour(), 17);
    }

    #[test]
    fn ambiguous_local_time_resolves_to_earlier_instant() {
        // 01:30 on 2021-11-07 happens twice in New York; the first pass is
        // still EDT (UTC-4).
        let moment = normalize("2021-11-07", "01:30", "America/New_York").unwrap();
        assert_eq!(moment.utc.hour(), 5);
        assert_eq!(moment.utc.minute(), 30);
    }

    #[test]
    fn nonexistent_local_time_is_rejected() {
        // 02:30 on 2021-03-14 was skipped in New York.
        assert!(matches!(
            normalize("2021-03-14", "02:30", "America/New_York"),
            Err(ChartError::InvalidDateTimeFormat)
        ));
    }

    #[test]
    fn unknown_timezone_never_panics() {
        assert!(matches!(
            normalize("2000-01-01", "12:00", "Mars/Olympus"),
            Err(ChartError::UnknownTimezone { value }) if value == "Mars/Olympus"
        ));
    }

    #[test]
    fn malformed_date_and_time_are_rejected() {
        assert!(matches!(
            normalize("01/01/2000", "12:00", "UTC"),
            Err(ChartError::InvalidDateTimeFormat)
        ));
        assert!(matches!(
            normalize("2000-01-01", "12:00:30", "UTC"),
            Err(ChartError::InvalidDateTimeFormat)
        ));
        assert!(matches!(
            normalize("2000-02-30", "12:00", "UTC"),
            Err(ChartError::InvalidDateTimeFormat)
        ));
    }
}
