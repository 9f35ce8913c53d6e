//! `fake` faker structs for the South Korean providers.
//!
//! Each struct plugs a provider into [`fake::Dummy`], so values compose with
//! the rest of the `fake` ecosystem.
//!
//! # Example
//!
//! ```
//! use fake::Fake;
//! use fake_ko_kr::Sex;
//! use fake_ko_kr::fakers::{LicensePlate, Rrn};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(5);
//! let plate: String = LicensePlate.fake_with_rng(&mut rng);
//! let rrn: String = Rrn(Some(Sex::Female)).fake_with_rng(&mut rng);
//!
//! assert!(fake_ko_kr::is_valid_license_plate(&plate));
//! assert!(fake_ko_kr::is_valid_national_id(&rrn));
//! ```

use fake::Dummy;
use rand::Rng;

use crate::automotive::{drivers_license, license_plate};
use crate::gender::{PassportGender, Sex};
use crate::national_id::{frn, rrn, ssn};
use crate::passport::{passport_gender, passport_number};

/// License plate such as `12가3456`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LicensePlate;

/// Driver's licence number such as `11-24-012345-67`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriversLicense;

/// Passport number such as `M12345678`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassportNumber;

/// Weighted `M` / `F` / `X` passport marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassportGenderMarker;

/// Resident registration number, optionally restricted to one sex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rrn(pub Option<Sex>);

/// Foreign registration number, optionally restricted to one sex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frn(pub Option<Sex>);

/// Registration number of either family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ssn {
    /// Restricts the category to one sex.
    pub sex: Option<Sex>,
    /// `Some(true)` for foreigners only, `Some(false)` for citizens only.
    pub foreigner: Option<bool>,
}

impl Dummy<LicensePlate> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &LicensePlate, rng: &mut R) -> Self {
        license_plate(rng)
    }
}

impl Dummy<DriversLicense> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &DriversLicense, rng: &mut R) -> Self {
        drivers_license(rng)
    }
}

impl Dummy<PassportNumber> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &PassportNumber, rng: &mut R) -> Self {
        passport_number(rng)
    }
}

impl Dummy<PassportGenderMarker> for PassportGender {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &PassportGenderMarker, rng: &mut R) -> Self {
        passport_gender(rng)
    }
}

impl Dummy<PassportGenderMarker> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &PassportGenderMarker, rng: &mut R) -> Self {
        passport_gender(rng).as_str().to_owned()
    }
}

impl Dummy<Rrn> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &Rrn, rng: &mut R) -> Self {
        rrn(rng, config.0)
    }
}

impl Dummy<Frn> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &Frn, rng: &mut R) -> Self {
        frn(rng, config.0)
    }
}

impl Dummy<Ssn> for String {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &Ssn, rng: &mut R) -> Self {
        ssn(rng, config.sex, config.foreigner)
    }
}

#[cfg(test)]
mod tests {
    use fake::Fake;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::national_id::{NationalId, Residency};
    use crate::validation::{
        is_valid_drivers_license, is_valid_license_plate, is_valid_passport_number,
    };

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(77)
    }

    #[rstest]
    fn automotive_fakers_produce_valid_values(mut rng: ChaCha8Rng) {
        for _ in 0..50 {
            let plate: String = LicensePlate.fake_with_rng(&mut rng);
            let licence: String = DriversLicense.fake_with_rng(&mut rng);
            assert!(is_valid_license_plate(&plate), "{plate}");
            assert!(is_valid_drivers_license(&licence), "{licence}");
        }
    }

    #[rstest]
    fn passport_fakers_produce_valid_values(mut rng: ChaCha8Rng) {
        for _ in 0..50 {
            let number: String = PassportNumber.fake_with_rng(&mut rng);
            let marker: String = PassportGenderMarker.fake_with_rng(&mut rng);
            assert!(is_valid_passport_number(&number), "{number}");
            assert!(matches!(marker.as_str(), "M" | "F" | "X"), "{marker}");
        }
    }

    #[rstest]
    fn faker_matches_the_provider_stream(mut rng: ChaCha8Rng) {
        let mut twin = rng.clone();
        let via_faker: String = LicensePlate.fake_with_rng(&mut rng);
        assert_eq!(via_faker, license_plate(&mut twin));

        let marker: PassportGender = PassportGenderMarker.fake_with_rng(&mut rng);
        assert_eq!(marker, passport_gender(&mut twin));
    }

    #[rstest]
    #[case(Residency::Citizen, Sex::Male)]
    #[case(Residency::Citizen, Sex::Female)]
    #[case(Residency::Foreigner, Sex::Male)]
    #[case(Residency::Foreigner, Sex::Female)]
    fn national_id_fakers_respect_filters(
        mut rng: ChaCha8Rng,
        #[case] residency: Residency,
        #[case] sex: Sex,
    ) {
        for _ in 0..50 {
            let value: String = match residency {
                Residency::Citizen => Rrn(Some(sex)).fake_with_rng(&mut rng),
                Residency::Foreigner => Frn(Some(sex)).fake_with_rng(&mut rng),
            };
            let id: NationalId = value.parse().expect("parse");
            assert_eq!(id.category().residency(), residency);
            assert_eq!(id.category().sex(), sex);
        }
    }

    #[rstest]
    fn ssn_faker_honours_the_foreigner_flag(mut rng: ChaCha8Rng) {
        let citizens = Ssn {
            sex: None,
            foreigner: Some(false),
        };
        for _ in 0..50 {
            let value: String = citizens.fake_with_rng(&mut rng);
            let id: NationalId = value.parse().expect("parse");
            assert_eq!(id.category().residency(), Residency::Citizen);
        }
    }
}
