//! Custom field validators used by `validator` derives on request payloads.

use chrono::{DateTime, Utc};
use std::borrow::Cow;
use validator::ValidationError;

/// Rejects any date-time that is not strictly later than now.
pub fn validate_future_date(date_time: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date_time > Utc::now() {
        return Ok(());
    }

    Err(ValidationError::new("future_date")
        .with_message(Cow::Borrowed("Event date must be in the future")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_accepts_future_dates() {
        assert!(validate_future_date(&(Utc::now() + Duration::hours(24))).is_ok());
    }

    #[test]
    fn test_accepts_near_future() {
        assert!(validate_future_date(&(Utc::now() + Duration::seconds(5))).is_ok());
    }

    #[test]
    fn test_rejects_past_dates() {
        let err = validate_future_date(&(Utc::now() - Duration::hours(24))).unwrap_err();
        assert_eq!(err.code, "future_date");
    }

    #[test]
    fn test_rejects_current_time() {
        // by the time the check runs, "now" is already in the past
        assert!(validate_future_date(&Utc::now()).is_err());
    }

    #[test]
    fn test_rejects_epoch() {
        assert!(validate_future_date(&DateTime::from_timestamp(0, 0).unwrap()).is_err());
    }
}
