//! Shape checks for generated identifiers.
//!
//! These predicates accept exactly the layouts the providers emit, so tests
//! and callers can confirm a value without re-deriving the templates.
//!
//! # Layouts
//!
//! - License plate: `NN?NNNN` or `NNN?NNNN`, `?` from [`PLATE_SYLLABLES`]
//! - Driver's licence: `AA-BB-CCCCCC-DE` with `AA` in 11 to 28
//! - Passport number: `LNNNNNNNN` or `LNNNLNNNN`, `L` an ASCII capital
//! - Registration number: `YYMMDD-SNNNNNC`, see [`NationalId`]

use crate::automotive::PLATE_SYLLABLES;
use crate::national_id::NationalId;

const PLATE_SUFFIX_DIGITS: usize = 4;
const LICENCE_GROUP_WIDTHS: [usize; 4] = [2, 2, 6, 2];
const LICENCE_REGIONS: std::ops::RangeInclusive<u8> = 11..=28;

/// Validates a private-vehicle license plate.
///
/// # Examples
///
/// ```
/// use fake_ko_kr::is_valid_license_plate;
///
/// assert!(is_valid_license_plate("12가3456"));
/// assert!(is_valid_license_plate("123호4567"));
/// assert!(!is_valid_license_plate("12A3456"));   // Latin letter
/// assert!(!is_valid_license_plate("1가3456"));    // One-digit prefix
/// ```
#[must_use]
pub fn is_valid_license_plate(plate: &str) -> bool {
    let Some((position, syllable)) = plate.char_indices().find(|(_, c)| !c.is_ascii_digit())
    else {
        return false;
    };
    let (prefix, rest) = plate.split_at(position);
    let suffix = rest.trim_start_matches(syllable);
    matches!(prefix.len(), 2 | 3)
        && PLATE_SYLLABLES.contains(&syllable)
        && rest.chars().count() == PLATE_SUFFIX_DIGITS + 1
        && suffix.len() == PLATE_SUFFIX_DIGITS
        && all_ascii_digits(suffix)
}

/// Validates a driver's licence number.
///
/// # Examples
///
/// ```
/// use fake_ko_kr::is_valid_drivers_license;
///
/// assert!(is_valid_drivers_license("11-24-012345-67"));
/// assert!(!is_valid_drivers_license("29-24-012345-67")); // Unknown region
/// assert!(!is_valid_drivers_license("11-24-12345-67"));  // Short serial
/// ```
#[must_use]
pub fn is_valid_drivers_license(number: &str) -> bool {
    let groups: Vec<&str> = number.split('-').collect();
    if groups.len() != LICENCE_GROUP_WIDTHS.len() {
        return false;
    }
    let shaped = groups
        .iter()
        .zip(LICENCE_GROUP_WIDTHS)
        .all(|(group, width)| group.len() == width && all_ascii_digits(group));
    shaped
        && groups
            .first()
            .and_then(|region| region.parse::<u8>().ok())
            .is_some_and(|region| LICENCE_REGIONS.contains(&region))
}

/// Validates a passport number.
///
/// # Examples
///
/// ```
/// use fake_ko_kr::is_valid_passport_number;
///
/// assert!(is_valid_passport_number("M12345678"));
/// assert!(is_valid_passport_number("M123A4567"));
/// assert!(!is_valid_passport_number("m12345678")); // Lowercase letter
/// assert!(!is_valid_passport_number("M1234567"));  // Too short
/// ```
#[must_use]
pub fn is_valid_passport_number(number: &str) -> bool {
    let &[first, d1, d2, d3, middle, d4, d5, d6, d7] = number.as_bytes() else {
        return false;
    };
    first.is_ascii_uppercase()
        && (middle.is_ascii_digit() || middle.is_ascii_uppercase())
        && [d1, d2, d3, d4, d5, d6, d7].iter().all(u8::is_ascii_digit)
}

/// Validates a resident or foreign registration number.
///
/// The check digit is not verified.
///
/// # Examples
///
/// ```
/// use fake_ko_kr::is_valid_national_id;
///
/// assert!(is_valid_national_id("240101-1123456"));
/// assert!(is_valid_national_id("991231-8000009"));
/// assert!(!is_valid_national_id("241301-1123456")); // Month 13
/// assert!(!is_valid_national_id("2401011123456"));  // Missing separator
/// ```
#[must_use]
pub fn is_valid_national_id(value: &str) -> bool {
    value.parse::<NationalId>().is_ok()
}

fn all_ascii_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}
