//! Passport numbers, validity dates and full passport records.
//!
//! Validity follows the Ministry of Foreign Affairs passport rules: holders
//! under 21 receive five-year passports, holders of 21 and over ten-year
//! ones. Issue dates are drawn so that the passport is still valid today.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use mockable::Clock;
use rand::Rng;
use serde::Serialize;
use tracing::trace;

use crate::clock::today;
use crate::error::ProviderError;
use crate::gender::PassportGender;
use crate::names::passport_owner;
use crate::template::{bothify, pick};

/// Passport number templates: `M12345678` for e-passports issued before
/// 2021-12-21, `M123A4567` for the next-generation passport.
pub const PASSPORT_NUMBER_TEMPLATES: [&str; 2] = ["?########", "?###?####"];

const ASCII_UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// `DD Mon YYYY`, e.g. `05 Mar 2024`.
pub const PASSPORT_DATE_FORMAT: &str = "%d %b %Y";

const DAYS_PER_YEAR: i64 = 365;
const SHORT_VALIDITY_YEARS: u32 = 5;
const LONG_VALIDITY_YEARS: u32 = 10;
const MAX_HOLDER_AGE_YEARS: u32 = 115;

/// Birth, issue and expiry dates of a passport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassportDates {
    birth: NaiveDate,
    issue: NaiveDate,
    expiry: NaiveDate,
    validity_years: u32,
}

impl PassportDates {
    /// Returns the holder's date of birth.
    #[must_use]
    pub const fn birth(&self) -> NaiveDate {
        self.birth
    }

    /// Returns the issue date.
    #[must_use]
    pub const fn issue(&self) -> NaiveDate {
        self.issue
    }

    /// Returns the expiry date.
    #[must_use]
    pub const fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Returns the validity period, 5 or 10 years.
    #[must_use]
    pub const fn validity_years(&self) -> u32 {
        self.validity_years
    }

    /// Formats the three dates as `DD Mon YYYY`.
    #[must_use]
    pub fn into_strings(self) -> (String, String, String) {
        (
            format_passport_date(self.birth),
            format_passport_date(self.issue),
            format_passport_date(self.expiry),
        )
    }
}

/// Formats a date as printed in a passport, e.g. `05 Mar 2024`.
#[must_use]
pub fn format_passport_date(date: NaiveDate) -> String {
    date.format(PASSPORT_DATE_FORMAT).to_string()
}

/// Draws issue and expiry dates for a holder born on `birthday`.
///
/// The holder's age in whole years (`days / 365`) selects the window the
/// issue date is drawn from:
///
/// | age    | issue window                              | validity |
/// |--------|-------------------------------------------|----------|
/// | < 5    | birthday to today                         | 5 years  |
/// | 5-15   | last 5 years                              | 5 years  |
/// | 16-20  | last 5 years, up to the 16th birthday     | 5 years  |
/// | 21-25  | last 5 years                              | 10 years |
/// | >= 26  | last 10 years                             | 10 years |
///
/// An issue date on 29 February moves to the 28th so the expiry date exists
/// in non-leap years; when that would precede the birthday it moves to
/// 1 March instead.
///
/// # Errors
///
/// Returns [`ProviderError::BirthdayInFuture`] when `birthday` is after
/// `today` and [`ProviderError::DateOutOfRange`] when the window or expiry
/// date cannot be represented.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fake_ko_kr::passport_dates;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(9);
/// let birthday = NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date");
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
///
/// let dates = passport_dates(&mut rng, birthday, today).expect("dates");
/// assert_eq!(dates.validity_years(), 10);
/// assert!(dates.issue() <= today);
/// ```
pub fn passport_dates<R: Rng + ?Sized>(
    rng: &mut R,
    birthday: NaiveDate,
    today: NaiveDate,
) -> Result<PassportDates, ProviderError> {
    if birthday > today {
        return Err(ProviderError::BirthdayInFuture { birthday, today });
    }

    let age = (today - birthday).num_days().div_euclid(DAYS_PER_YEAR);
    let window = IssueWindow::for_age(age, birthday, today)?;
    trace!(
        age,
        validity_years = window.validity_years,
        "selected passport issue window"
    );

    let drawn = date_between(rng, window.start, window.end)?;
    let latest = window.start.max(window.end);
    let issue = step_off_leap_day(drawn, birthday, latest)?;
    let expiry = issue
        .checked_add_months(Months::new(window.validity_years * 12))
        .ok_or(ProviderError::DateOutOfRange { date: issue })?;

    Ok(PassportDates {
        birth: birthday,
        issue,
        expiry,
        validity_years: window.validity_years,
    })
}

struct IssueWindow {
    start: NaiveDate,
    end: NaiveDate,
    validity_years: u32,
}

impl IssueWindow {
    fn for_age(age: i64, birthday: NaiveDate, today: NaiveDate) -> Result<Self, ProviderError> {
        let last = |years: u32| offset_days(today, 1 - i64::from(years) * DAYS_PER_YEAR);
        let (start, end, validity_years) = match age {
            ..5 => (birthday, today, SHORT_VALIDITY_YEARS),
            5..16 => (last(SHORT_VALIDITY_YEARS)?, today, SHORT_VALIDITY_YEARS),
            // The passport must have been issued before the 16th birthday.
            16..21 => (
                last(SHORT_VALIDITY_YEARS)?,
                offset_days(birthday, 16 * DAYS_PER_YEAR - 1)?,
                SHORT_VALIDITY_YEARS,
            ),
            21..26 => (last(SHORT_VALIDITY_YEARS)?, today, LONG_VALIDITY_YEARS),
            _ => (last(LONG_VALIDITY_YEARS)?, today, LONG_VALIDITY_YEARS),
        };
        Ok(Self {
            start,
            end,
            validity_years,
        })
    }
}

/// Moves a 29 February issue date to the 28th, or to 1 March when the 28th
/// precedes the birth. The leap day is kept when neither neighbour lies in
/// `birthday..=latest`.
fn step_off_leap_day(
    date: NaiveDate,
    birthday: NaiveDate,
    latest: NaiveDate,
) -> Result<NaiveDate, ProviderError> {
    if date.month() != 2 || date.day() != 29 {
        return Ok(date);
    }
    let before = offset_days(date, -1)?;
    if before >= birthday {
        return Ok(before);
    }
    let after = offset_days(date, 1)?;
    Ok(if after <= latest { after } else { date })
}

fn offset_days(date: NaiveDate, days: i64) -> Result<NaiveDate, ProviderError> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or(ProviderError::DateOutOfRange { date })
}

/// Draws a date uniformly between two bounds, inclusive, in either order.
fn date_between<R: Rng + ?Sized>(
    rng: &mut R,
    a: NaiveDate,
    b: NaiveDate,
) -> Result<NaiveDate, ProviderError> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let span = (high - low).num_days();
    offset_days(low, rng.random_range(0..=span))
}

/// Draws a passport marker: 49.3% `M`, 49.3% `F`, 1.4% `X`.
///
/// Reseeding is the caller's concern; see
/// [`KoKrFaker::passport_gender`](crate::KoKrFaker::passport_gender).
pub fn passport_gender<R: Rng + ?Sized>(rng: &mut R) -> PassportGender {
    PassportGender::sample(rng)
}

/// Generates a passport number such as `M12345678` or `M123A4567`.
pub fn passport_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = pick(rng, &PASSPORT_NUMBER_TEMPLATES);
    bothify(rng, template, &ASCII_UPPERCASE)
}

/// Draws a date of birth for a holder aged 0 to 115.
///
/// # Errors
///
/// Returns [`ProviderError::DateOutOfRange`] when `today` is too close to the
/// start of the supported calendar.
pub fn passport_dob<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Result<NaiveDate, ProviderError> {
    let earliest = today
        .checked_sub_months(Months::new((MAX_HOLDER_AGE_YEARS + 1) * 12))
        .ok_or(ProviderError::DateOutOfRange { date: today })?;
    date_between(rng, offset_days(earliest, 1)?, today)
}

/// A complete synthetic passport.
///
/// [`Display`](fmt::Display) renders the seven fields one per line in the
/// order given name, surname, gender, birth, issue, expiry, number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRecord {
    /// Given name.
    pub given_name: String,
    /// Surname.
    pub surname: String,
    /// Gender marker.
    pub gender: PassportGender,
    /// Date of birth, `DD Mon YYYY`.
    pub birth_date: String,
    /// Issue date, `DD Mon YYYY`.
    pub issue_date: String,
    /// Expiry date, `DD Mon YYYY`.
    pub expiry_date: String,
    /// Passport number.
    pub number: String,
}

impl fmt::Display for PassportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.given_name)?;
        writeln!(f, "{}", self.surname)?;
        writeln!(f, "{}", self.gender)?;
        writeln!(f, "{}", self.birth_date)?;
        writeln!(f, "{}", self.issue_date)?;
        writeln!(f, "{}", self.expiry_date)?;
        writeln!(f, "{}", self.number)
    }
}

/// Generates a full passport record.
///
/// Draws, in order: date of birth, issue and expiry dates, gender marker,
/// an owner name matching the marker, and the passport number.
///
/// # Errors
///
/// Propagates [`ProviderError::DateOutOfRange`] from the date draws.
pub fn passport_full<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &dyn Clock,
) -> Result<PassportRecord, ProviderError> {
    let today = today(clock);
    let birthday = passport_dob(rng, today)?;
    let (birth_date, issue_date, expiry_date) =
        passport_dates(rng, birthday, today)?.into_strings();
    let gender = passport_gender(rng);
    let (given_name, surname) = passport_owner(rng, gender);
    let number = passport_number(rng);

    Ok(PassportRecord {
        given_name,
        surname,
        gender,
        birth_date,
        issue_date,
        expiry_date,
        number,
    })
}
