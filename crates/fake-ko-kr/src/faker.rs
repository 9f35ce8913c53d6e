//! Stateful generation context.
//!
//! [`KoKrFaker`] bundles a seeded random source with a clock and exposes every
//! provider with string-typed arguments. Reseeding replaces only this
//! context's random source; there is no process-wide generator.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::automotive;
use crate::clock::today;
use crate::error::ProviderError;
use crate::gender::{PassportGender, Sex};
use crate::names;
use crate::national_id;
use crate::passport::{self, PassportRecord, format_passport_date};

/// A deterministic generator for South Korean locale data.
///
/// # Example
///
/// ```
/// use fake_ko_kr::KoKrFaker;
///
/// let mut first = KoKrFaker::new(2026);
/// let mut second = KoKrFaker::new(2026);
///
/// assert_eq!(first.license_plate(), second.license_plate());
/// assert!(first.rrn(Some("Q")).is_err());
/// ```
#[derive(Clone)]
pub struct KoKrFaker {
    rng: ChaCha8Rng,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for KoKrFaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KoKrFaker")
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}

impl KoKrFaker {
    /// Creates a context seeded with `seed` that reads the system clock.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_clock(seed, Arc::new(DefaultClock))
    }

    /// Creates a context seeded with `seed` that reads `clock`.
    #[must_use]
    pub fn with_clock(seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock,
        }
    }

    /// Creates a context from a freshly drawn seed.
    ///
    /// The seed is logged at `debug` level so a run can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        debug!(seed, "seeded generation context from entropy");
        Self::new(seed)
    }

    /// Replaces the clock used for date-dependent providers.
    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) {
        self.clock = clock;
    }

    /// Replaces this context's random source with one seeded by `seed`.
    pub fn reseed(&mut self, seed: u64) {
        debug!(seed, "reseeding generation context");
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the date the context's clock reports as today.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today(self.clock.as_ref())
    }

    /// Generates a license plate.
    pub fn license_plate(&mut self) -> String {
        automotive::license_plate(&mut self.rng)
    }

    /// Generates a driver's licence number.
    pub fn drivers_license(&mut self) -> String {
        automotive::drivers_license(&mut self.rng)
    }

    /// Generates `(birth, issue, expiry)` passport dates for `birthday`,
    /// formatted `DD Mon YYYY`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::BirthdayInFuture`] when `birthday` is after
    /// the clock's current date.
    pub fn passport_dates(
        &mut self,
        birthday: NaiveDate,
    ) -> Result<(String, String, String), ProviderError> {
        let today = self.today();
        passport::passport_dates(&mut self.rng, birthday, today)
            .map(passport::PassportDates::into_strings)
    }

    /// Draws a passport gender marker.
    ///
    /// A non-zero `seed` first reseeds this context, so the marker and every
    /// later draw are reproducible. A `seed` of `0` leaves the random source
    /// untouched.
    pub fn passport_gender(&mut self, seed: u64) -> PassportGender {
        if seed != 0 {
            self.reseed(seed);
        }
        passport::passport_gender(&mut self.rng)
    }

    /// Generates a passport number.
    pub fn passport_number(&mut self) -> String {
        passport::passport_number(&mut self.rng)
    }

    /// Draws a passport holder's date of birth, formatted `DD Mon YYYY`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::DateOutOfRange`] when the clock's date is too
    /// close to the start of the supported calendar.
    pub fn passport_dob(&mut self) -> Result<String, ProviderError> {
        let today = self.today();
        passport::passport_dob(&mut self.rng, today).map(format_passport_date)
    }

    /// Draws a `(given name, surname)` pair for a passport marker.
    pub fn passport_owner(&mut self, gender: PassportGender) -> (String, String) {
        names::passport_owner(&mut self.rng, gender)
    }

    /// Generates a full passport record dated against the context's clock.
    ///
    /// # Errors
    ///
    /// Propagates [`ProviderError::DateOutOfRange`] from the date draws.
    pub fn passport_full(&mut self) -> Result<PassportRecord, ProviderError> {
        passport::passport_full(&mut self.rng, self.clock.as_ref())
    }

    /// Draws a `YYMMDD` birth prefix.
    pub fn generate_ymd(&mut self) -> String {
        national_id::generate_ymd(&mut self.rng).to_string()
    }

    /// Generates a resident registration number.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidGender`] unless `gender` is `None`,
    /// `"M"` or `"F"`.
    pub fn rrn(&mut self, gender: Option<&str>) -> Result<String, ProviderError> {
        let sex = Sex::parse_optional(gender)?;
        Ok(national_id::rrn(&mut self.rng, sex))
    }

    /// Generates a foreign registration number.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidGender`] unless `gender` is `None`,
    /// `"M"` or `"F"`.
    pub fn frn(&mut self, gender: Option<&str>) -> Result<String, ProviderError> {
        let sex = Sex::parse_optional(gender)?;
        Ok(national_id::frn(&mut self.rng, sex))
    }

    /// Generates a registration number of either family.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidGender`] unless `gender` is `None`,
    /// `"M"` or `"F"`.
    pub fn ssn(
        &mut self,
        gender: Option<&str>,
        foreigner: Option<bool>,
    ) -> Result<String, ProviderError> {
        let sex = Sex::parse_optional(gender)?;
        Ok(national_id::ssn(&mut self.rng, sex, foreigner))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::clock::FixedClock;
    use crate::national_id::{NationalId, Residency};
    use crate::validation::{
        is_valid_drivers_license, is_valid_license_plate, is_valid_passport_number,
    };

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[fixture]
    fn faker() -> KoKrFaker {
        KoKrFaker::with_clock(42, Arc::new(FixedClock::new(reference_day())))
    }

    #[rstest]
    fn same_seed_reproduces_every_provider(mut faker: KoKrFaker) {
        let mut twin = KoKrFaker::with_clock(42, Arc::new(FixedClock::new(reference_day())));

        assert_eq!(faker.license_plate(), twin.license_plate());
        assert_eq!(faker.drivers_license(), twin.drivers_license());
        assert_eq!(faker.passport_number(), twin.passport_number());
        assert_eq!(faker.generate_ymd(), twin.generate_ymd());
        assert_eq!(
            faker.passport_full().expect("record"),
            twin.passport_full().expect("record")
        );
    }

    #[rstest]
    fn outputs_have_the_expected_shapes(mut faker: KoKrFaker) {
        for _ in 0..50 {
            assert!(is_valid_license_plate(&faker.license_plate()));
            assert!(is_valid_drivers_license(&faker.drivers_license()));
            assert!(is_valid_passport_number(&faker.passport_number()));
            assert_eq!(faker.generate_ymd().len(), 6);
        }
    }

    #[rstest]
    fn nonzero_seed_makes_gender_reproducible(mut faker: KoKrFaker) {
        let first = faker.passport_gender(7);
        let follow_up = faker.license_plate();

        let mut other = KoKrFaker::new(99);
        assert_eq!(other.passport_gender(7), first);
        assert_eq!(other.license_plate(), follow_up);
    }

    #[rstest]
    fn zero_seed_leaves_the_stream_alone(mut faker: KoKrFaker) {
        let mut twin = faker.clone();

        let marker = faker.passport_gender(0);
        assert_eq!(twin.passport_gender(0), marker);
        assert_eq!(faker.license_plate(), twin.license_plate());
    }

    #[test]
    fn reseeding_one_context_does_not_affect_another() {
        let mut left = KoKrFaker::new(1);
        let mut right = KoKrFaker::new(1);
        let mut untouched = KoKrFaker::new(1);

        left.reseed(500);
        assert_eq!(right.license_plate(), untouched.license_plate());
        assert_ne!(
            (0..5).map(|_| left.drivers_license()).collect::<Vec<_>>(),
            (0..5).map(|_| right.drivers_license()).collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some("M"))]
    #[case(Some("F"))]
    fn accepts_known_genders(mut faker: KoKrFaker, #[case] gender: Option<&str>) {
        assert!(faker.rrn(gender).is_ok());
        assert!(faker.frn(gender).is_ok());
        assert!(faker.ssn(gender, None).is_ok());
    }

    #[rstest]
    #[case("X")]
    #[case("m")]
    #[case("")]
    #[case("Male")]
    fn rejects_unknown_genders(mut faker: KoKrFaker, #[case] gender: &str) {
        let expected = ProviderError::InvalidGender {
            value: gender.to_owned(),
        };
        assert_eq!(faker.rrn(Some(gender)), Err(expected.clone()));
        assert_eq!(faker.frn(Some(gender)), Err(expected.clone()));
        assert_eq!(faker.ssn(Some(gender), Some(true)), Err(expected));
    }

    #[rstest]
    fn string_arguments_reach_the_category(mut faker: KoKrFaker) {
        for _ in 0..50 {
            let id: NationalId = faker
                .ssn(Some("F"), Some(true))
                .expect("ssn")
                .parse()
                .expect("parse");
            assert_eq!(id.category().residency(), Residency::Foreigner);
            assert_eq!(id.category().sex(), Sex::Female);
        }
    }

    #[rstest]
    fn passport_dates_use_the_context_clock(mut faker: KoKrFaker) {
        let birthday = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let (birth, _, _) = faker.passport_dates(birthday).expect("dates");
        assert_eq!(birth, "01 May 2024");

        let future = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        assert_eq!(
            faker.passport_dates(future),
            Err(ProviderError::BirthdayInFuture {
                birthday: future,
                today: reference_day(),
            })
        );
    }

    #[rstest]
    fn passport_dob_is_not_after_today(mut faker: KoKrFaker) {
        for _ in 0..50 {
            let dob = faker.passport_dob().expect("dob");
            let parsed = NaiveDate::parse_from_str(&dob, passport::PASSPORT_DATE_FORMAT)
                .expect("formatted date");
            assert!(parsed <= reference_day());
        }
    }

    #[rstest]
    fn owner_follows_marker(mut faker: KoKrFaker) {
        let (given, surname) = faker.passport_owner(PassportGender::Female);
        assert!(names::GIVEN_NAMES_FEMALE.contains(&given.as_str()));
        assert!(names::SURNAMES.contains(&surname.as_str()));
    }

    #[test]
    fn entropy_contexts_produce_valid_output() {
        let mut faker = KoKrFaker::from_entropy();
        assert!(is_valid_license_plate(&faker.license_plate()));
    }
}
