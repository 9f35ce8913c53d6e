//! South Korean (`ko_KR`) locale providers for synthetic test data.
//!
//! This crate generates believable, locale-correct values for vehicle
//! registration, passports and national identification numbers. It is
//! designed for seeding fixtures and demo databases; nothing it produces is a
//! real credential.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - License plates and driver's licence numbers
//! - Passport dates, gender markers, numbers, owner names and full records
//! - Resident (RRN) and foreign (FRN) registration numbers, with a parser
//! - Shape validators for every produced format
//! - [`fake::Dummy`] faker structs and a seeded [`KoKrFaker`] context
//!
//! Every provider takes its random source by `&mut`, so the same seed always
//! produces the same output.
//!
//! # Example
//!
//! ```
//! use fake_ko_kr::{NationalId, Residency, Sex, is_valid_license_plate, license_plate, rrn};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(2026);
//!
//! assert!(is_valid_license_plate(&license_plate(&mut rng)));
//!
//! let id: NationalId = rrn(&mut rng, Some(Sex::Male)).parse().expect("valid RRN");
//! assert_eq!(id.category().residency(), Residency::Citizen);
//! assert_eq!(id.category().sex(), Sex::Male);
//! ```

mod automotive;
pub mod cli;
pub mod clock;
mod error;
mod faker;
pub mod fakers;
mod gender;
mod names;
mod national_id;
mod passport;
pub mod template;
mod validation;

pub use automotive::{PLATE_SYLLABLES, PLATE_TEMPLATES, drivers_license, license_plate};
pub use error::ProviderError;
pub use faker::KoKrFaker;
pub use gender::{PassportGender, Sex};
pub use names::passport_owner;
pub use national_id::{
    BirthPrefix, IdCategory, NationalId, Residency, category_choices, frn, generate_national_id,
    generate_ymd, rrn, ssn,
};
pub use passport::{
    PASSPORT_DATE_FORMAT, PASSPORT_NUMBER_TEMPLATES, PassportDates, PassportRecord,
    format_passport_date, passport_dates, passport_dob, passport_full, passport_gender,
    passport_number,
};
pub use validation::{
    is_valid_drivers_license, is_valid_license_plate, is_valid_national_id,
    is_valid_passport_number,
};
