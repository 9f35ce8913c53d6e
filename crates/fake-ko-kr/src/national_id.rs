//! Resident and foreign registration numbers.
//!
//! Both number families share the `YYMMDD-SNNNNNC` layout:
//!
//! - `YYMMDD`: date of birth, see [`BirthPrefix`]
//! - `S`: category digit encoding residency, sex and century of birth
//! - `NNNNN`: serial number (regional codes were dropped in 2020-10)
//! - `C`: verification digit, drawn at random rather than computed
//!
//! The category digits are disjoint across the four (residency, sex) buckets,
//! so a parsed [`NationalId`] always identifies its bucket.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::gender::Sex;
use crate::template::pick;

/// Whether a number belongs to a citizen or a registered foreigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Residency {
    /// Resident registration number (RRN).
    Citizen,
    /// Foreign registration or domestic residence report number (FRN/DRRN).
    Foreigner,
}

impl Residency {
    /// Maps the `foreigner` flag: `None` admits both, `Some(true)` foreigners
    /// only and `Some(false)` citizens only.
    #[must_use]
    pub const fn from_foreigner_flag(foreigner: Option<bool>) -> Option<Self> {
        match foreigner {
            None => None,
            Some(true) => Some(Self::Foreigner),
            Some(false) => Some(Self::Citizen),
        }
    }
}

/// The category digit that opens the second half of a registration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdCategory {
    digit: char,
    residency: Residency,
    sex: Sex,
    century: u16,
}

impl IdCategory {
    const fn new(digit: char, residency: Residency, sex: Sex, century: u16) -> Self {
        Self {
            digit,
            residency,
            sex,
            century,
        }
    }

    /// Looks up the category for a digit.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        CATEGORIES.iter().copied().find(|c| c.digit == digit)
    }

    /// Returns the category digit.
    #[must_use]
    pub const fn digit(self) -> char {
        self.digit
    }

    /// Returns whether the holder is a citizen or a foreigner.
    #[must_use]
    pub const fn residency(self) -> Residency {
        self.residency
    }

    /// Returns the holder's sex.
    #[must_use]
    pub const fn sex(self) -> Sex {
        self.sex
    }

    /// Returns the first year of the holder's century of birth (1800, 1900
    /// or 2000).
    #[must_use]
    pub const fn century(self) -> u16 {
        self.century
    }

    const fn admits(self, residency: Option<Residency>, sex: Option<Sex>) -> bool {
        let residency_ok = match residency {
            None => true,
            Some(Residency::Citizen) => matches!(self.residency, Residency::Citizen),
            Some(Residency::Foreigner) => matches!(self.residency, Residency::Foreigner),
        };
        let sex_ok = match sex {
            None => true,
            Some(Sex::Male) => matches!(self.sex, Sex::Male),
            Some(Sex::Female) => matches!(self.sex, Sex::Female),
        };
        residency_ok && sex_ok
    }
}

/// Every category digit in use. `X` markers have no category.
const CATEGORIES: [IdCategory; 10] = [
    IdCategory::new('9', Residency::Citizen, Sex::Male, 1800),
    IdCategory::new('1', Residency::Citizen, Sex::Male, 1900),
    IdCategory::new('3', Residency::Citizen, Sex::Male, 2000),
    IdCategory::new('0', Residency::Citizen, Sex::Female, 1800),
    IdCategory::new('2', Residency::Citizen, Sex::Female, 1900),
    IdCategory::new('4', Residency::Citizen, Sex::Female, 2000),
    IdCategory::new('5', Residency::Foreigner, Sex::Male, 1900),
    IdCategory::new('7', Residency::Foreigner, Sex::Male, 2000),
    IdCategory::new('6', Residency::Foreigner, Sex::Female, 1900),
    IdCategory::new('8', Residency::Foreigner, Sex::Female, 2000),
];

/// Category digits admitted by the residency and sex filters.
///
/// `None` leaves a dimension unconstrained. The result is never empty.
#[must_use]
pub fn category_choices(residency: Option<Residency>, sex: Option<Sex>) -> Vec<IdCategory> {
    CATEGORIES
        .iter()
        .copied()
        .filter(|c| c.admits(residency, sex))
        .collect()
}

/// Two-digit year, month and day opening a registration number.
///
/// Values are not checked against the calendar: `000231` is a legal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthPrefix {
    year: u8,
    month: u8,
    day: u8,
}

impl BirthPrefix {
    /// Builds a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MalformedNationalId`] when the year exceeds
    /// 99, the month lies outside 1-12 or the day outside 1-31.
    pub fn new(year: u8, month: u8, day: u8) -> Result<Self, ProviderError> {
        let reason = if year > 99 {
            Some("year must be 00-99")
        } else if !(1..=12).contains(&month) {
            Some("month must be 01-12")
        } else if !(1..=31).contains(&day) {
            Some("day must be 01-31")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ProviderError::MalformedNationalId {
                value: format!("{year:02}{month:02}{day:02}"),
                reason,
            }),
            None => Ok(Self { year, month, day }),
        }
    }

    /// Returns the two-digit year.
    #[must_use]
    pub const fn year(self) -> u8 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for BirthPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Largest serial number that fits the five-digit field.
const SERIAL_MAX: u32 = 99_999;

/// A registration number split into its fields.
///
/// # Example
///
/// ```
/// use fake_ko_kr::{NationalId, Residency, Sex};
///
/// let id: NationalId = "240101-1123456".parse().expect("well-formed");
///
/// assert_eq!(id.category().residency(), Residency::Citizen);
/// assert_eq!(id.category().sex(), Sex::Male);
/// assert_eq!(id.serial(), 12345);
/// assert_eq!(id.to_string(), "240101-1123456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NationalId {
    birth_prefix: BirthPrefix,
    category: IdCategory,
    serial: u32,
    check_digit: u8,
}

impl NationalId {
    /// Assembles a number from its fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MalformedNationalId`] when the serial exceeds
    /// five digits or the check digit exceeds 9.
    pub fn new(
        birth_prefix: BirthPrefix,
        category: IdCategory,
        serial: u32,
        check_digit: u8,
    ) -> Result<Self, ProviderError> {
        if serial > SERIAL_MAX || check_digit > 9 {
            return Err(ProviderError::MalformedNationalId {
                value: format!("{birth_prefix}-{}{serial:05}{check_digit}", category.digit),
                reason: "serial must be 5 digits and check digit a single digit",
            });
        }
        Ok(Self {
            birth_prefix,
            category,
            serial,
            check_digit,
        })
    }

    /// Returns the `YYMMDD` prefix.
    #[must_use]
    pub const fn birth_prefix(&self) -> BirthPrefix {
        self.birth_prefix
    }

    /// Returns the category digit.
    #[must_use]
    pub const fn category(&self) -> IdCategory {
        self.category
    }

    /// Returns the five-digit serial.
    #[must_use]
    pub const fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the verification digit.
    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Returns the four-digit birth year implied by the category's century.
    #[must_use]
    pub fn birth_year(&self) -> u16 {
        self.category.century + u16::from(self.birth_prefix.year)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}{:05}{}",
            self.birth_prefix, self.category.digit, self.serial, self.check_digit
        )
    }
}

impl FromStr for NationalId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ProviderError::MalformedNationalId {
            value: s.to_owned(),
            reason,
        };

        let (front, back) = s
            .split_once('-')
            .ok_or_else(|| malformed("missing '-' separator"))?;

        let &[y1, y2, m1, m2, d1, d2] = front.as_bytes() else {
            return Err(malformed("prefix must be 6 digits"));
        };
        let &[category_byte, s1, s2, s3, s4, s5, check_byte] = back.as_bytes() else {
            return Err(malformed("suffix must be 7 digits"));
        };

        let pair = |hi, lo| Some(digit(hi)? * 10 + digit(lo)?);
        let (Some(year), Some(month), Some(day)) = (pair(y1, y2), pair(m1, m2), pair(d1, d2))
        else {
            return Err(malformed("prefix must be 6 digits"));
        };
        let birth_prefix = BirthPrefix::new(year, month, day).map_err(|err| match err {
            ProviderError::MalformedNationalId { reason, .. } => malformed(reason),
            other => other,
        })?;

        let category = IdCategory::from_digit(char::from(category_byte))
            .ok_or_else(|| malformed("unknown category digit"))?;

        let serial = [s1, s2, s3, s4, s5]
            .into_iter()
            .try_fold(0_u32, |acc, b| Some(acc * 10 + u32::from(digit(b)?)))
            .ok_or_else(|| malformed("serial must be 5 digits"))?;
        let check_digit = digit(check_byte).ok_or_else(|| malformed("check digit must be a digit"))?;

        Ok(Self {
            birth_prefix,
            category,
            serial,
            check_digit,
        })
    }
}

fn digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

/// Draws a `YYMMDD` birth prefix with year 00-99, month 01-12 and day 01-31.
///
/// Calendar validity is not enforced.
pub fn generate_ymd<R: Rng + ?Sized>(rng: &mut R) -> BirthPrefix {
    BirthPrefix {
        year: rng.random_range(0..=99),
        month: rng.random_range(1..=12),
        day: rng.random_range(1..=31),
    }
}

/// Draws a number whose category matches the residency and sex filters.
pub fn generate_national_id<R: Rng + ?Sized>(
    rng: &mut R,
    residency: Option<Residency>,
    sex: Option<Sex>,
) -> NationalId {
    let birth_prefix = generate_ymd(rng);
    let category = pick(rng, &category_choices(residency, sex));
    let serial = rng.random_range(0..=SERIAL_MAX);
    let check_digit = rng.random_range(0..=9);
    NationalId {
        birth_prefix,
        category,
        serial,
        check_digit,
    }
}

/// Generates a resident registration number (RRN).
///
/// `sex` of `None` admits both sexes.
pub fn rrn<R: Rng + ?Sized>(rng: &mut R, sex: Option<Sex>) -> String {
    generate_national_id(rng, Some(Residency::Citizen), sex).to_string()
}

/// Generates a foreign registration number (FRN, including DRRN).
///
/// `sex` of `None` admits both sexes.
pub fn frn<R: Rng + ?Sized>(rng: &mut R, sex: Option<Sex>) -> String {
    generate_national_id(rng, Some(Residency::Foreigner), sex).to_string()
}

/// Generates a registration number of either family.
///
/// `foreigner` of `None` mixes citizens and foreigners, `Some(true)` yields
/// only foreign numbers and `Some(false)` only resident numbers.
pub fn ssn<R: Rng + ?Sized>(rng: &mut R, sex: Option<Sex>, foreigner: Option<bool>) -> String {
    generate_national_id(rng, Residency::from_foreigner_flag(foreigner), sex).to_string()
}
