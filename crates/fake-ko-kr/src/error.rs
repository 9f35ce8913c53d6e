//! Error types for the fake-ko-kr crate.
//!
//! Generation itself cannot fail for well-formed arguments. The variants here
//! cover the arguments that can be malformed: gender strings, birthdays and
//! national identification numbers handed back for parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the locale providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A gender argument was neither `"M"` nor `"F"`.
    #[error("invalid gender '{value}': expected \"M\" or \"F\"")]
    InvalidGender {
        /// The rejected gender value.
        value: String,
    },

    /// The supplied birthday lies after the current date.
    #[error("birthday {birthday} is after today ({today})")]
    BirthdayInFuture {
        /// Birthday supplied by the caller.
        birthday: NaiveDate,
        /// Date the clock reported as today.
        today: NaiveDate,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("date arithmetic on {date} left the supported calendar range")]
    DateOutOfRange {
        /// Date the offset was applied to.
        date: NaiveDate,
    },

    /// A national identification number did not match `YYMMDD-SNNNNNC`.
    #[error("malformed national ID '{value}': {reason}")]
    MalformedNationalId {
        /// The rejected input.
        value: String,
        /// Which part of the layout was violated.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn invalid_gender_formats_correctly() {
        let err = ProviderError::InvalidGender {
            value: "X".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid gender 'X': expected \"M\" or \"F\"");
    }

    #[test]
    fn birthday_in_future_formats_correctly() {
        let err = ProviderError::BirthdayInFuture {
            birthday: date(2030, 1, 2),
            today: date(2026, 10, 18),
        };
        assert_eq!(
            err.to_string(),
            "birthday 2030-01-02 is after today (2026-10-18)"
        );
    }

    #[test]
    fn date_out_of_range_formats_correctly() {
        let err = ProviderError::DateOutOfRange {
            date: date(2024, 3, 1),
        };
        assert_eq!(
            err.to_string(),
            "date arithmetic on 2024-03-01 left the supported calendar range"
        );
    }

    #[test]
    fn malformed_national_id_formats_correctly() {
        let err = ProviderError::MalformedNationalId {
            value: "240101".to_owned(),
            reason: "expected 14 characters",
        };
        assert_eq!(
            err.to_string(),
            "malformed national ID '240101': expected 14 characters"
        );
    }
}
