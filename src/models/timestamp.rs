use chrono::{DateTime, Local, NaiveDateTime, Timelike};

use crate::error::AppError;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts Unix epoch seconds into the naive wall-clock time of the process's
/// local timezone. Stored rows use this representation, so it has to stay
/// local rather than UTC.
pub fn from_epoch_seconds(epoch_seconds: i64) -> Result<NaiveDateTime, AppError> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .ok_or_else(|| {
            AppError::Validation(format!("Timestamp {} is out of range", epoch_seconds))
        })
}

/// Renders a date-time as `YYYY-MM-DD HH:MM:SS`, adding microseconds only
/// when the value carries a sub-second part.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    let micros = dt.nanosecond() / 1_000;
    if micros == 0 {
        dt.format(DATETIME_FORMAT).to_string()
    } else {
        format!("{}.{:06}", dt.format(DATETIME_FORMAT), micros)
    }
}

pub fn format_optional_datetime(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_datetime).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn epoch_conversion_uses_local_wall_clock() {
        let epoch = 1_700_000_000;
        let expected = Local.timestamp_opt(epoch, 0).unwrap().naive_local();

        assert_eq!(from_epoch_seconds(epoch).unwrap(), expected);
    }

    #[test]
    fn out_of_range_epoch_is_a_validation_error() {
        let result = from_epoch_seconds(i64::MAX);

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn whole_seconds_render_without_fraction() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();

        assert_eq!(format_datetime(&dt), "2024-03-09 07:05:01");
    }

    #[test]
    fn fractional_seconds_render_as_microseconds() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(7, 5, 1, 250)
            .unwrap();

        assert_eq!(format_datetime(&dt), "2024-03-09 07:05:01.000250");
    }

    #[test]
    fn missing_datetime_renders_empty() {
        assert_eq!(format_optional_datetime(None), "");
    }
}
