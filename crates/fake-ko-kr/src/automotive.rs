//! Vehicle license plates and driver's licence numbers.
//!
//! Plate rules follow the Ministry of Land, Infrastructure and Transport
//! notice on registration plates (2023-954, articles 5 and 6). Special-use
//! plates (diplomatic, regional prefixes) are not generated.

use rand::Rng;

use crate::template::{bothify, pick, random_digit};

/// Hangul syllables allowed in the middle slot of a private-vehicle plate.
pub const PLATE_SYLLABLES: [char; 40] = [
    '가', '나', '다', '라', '마', '거', '너', '더', '러', '머', '버', '서', '어', '저', '고', '노',
    '도', '로', '모', '보', '소', '오', '조', '구', '누', '두', '루', '무', '부', '수', '우', '주',
    '바', '사', '아', '자', '배', '허', '하', '호',
];

/// Plate templates. The three-digit prefix has been issued since 2019-09.
pub const PLATE_TEMPLATES: [&str; 2] = ["##?####", "###?####"];

/// Lowest regional code on a driver's licence.
const REGION_CODE_MIN: u32 = 11;

/// Highest regional code on a driver's licence.
const REGION_CODE_MAX: u32 = 28;

/// Generates a license plate such as `12가3456` or `123가4567`.
///
/// # Example
///
/// ```
/// use fake_ko_kr::{is_valid_license_plate, license_plate};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// assert!(is_valid_license_plate(&license_plate(&mut rng)));
/// ```
pub fn license_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = pick(rng, &PLATE_TEMPLATES);
    bothify(rng, template, &PLATE_SYLLABLES)
}

/// Generates a driver's licence number in `AA-BB-CCCCCC-DE` layout.
///
/// - `AA`: regional code, 11 to 28
/// - `BB`: two-digit issue year
/// - `CCCCCC`: serial number
/// - `D`: check digit (random, not computed)
/// - `E`: issuance round
pub fn drivers_license<R: Rng + ?Sized>(rng: &mut R) -> String {
    let region = rng.random_range(REGION_CODE_MIN..=REGION_CODE_MAX);
    let year = rng.random_range(0..=99_u32);
    let serial = rng.random_range(0..=999_999_u32);
    let check = random_digit(rng);
    let round = random_digit(rng);
    format!("{region:02}-{year:02}-{serial:06}-{check}{round}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::validation::{is_valid_drivers_license, is_valid_license_plate};

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2019)
    }

    #[test]
    fn syllable_table_has_no_duplicates() {
        let mut sorted = PLATE_SYLLABLES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), PLATE_SYLLABLES.len());
    }

    #[rstest]
    fn plates_match_a_template(mut rng: ChaCha8Rng) {
        for _ in 0..500 {
            let plate = license_plate(&mut rng);
            assert!(is_valid_license_plate(&plate), "bad plate {plate}");
        }
    }

    #[rstest]
    fn both_plate_lengths_occur(mut rng: ChaCha8Rng) {
        let lengths: std::collections::HashSet<usize> = (0..200)
            .map(|_| license_plate(&mut rng).chars().count())
            .collect();
        assert_eq!(lengths, [7, 8].into_iter().collect());
    }

    #[rstest]
    fn licences_match_layout(mut rng: ChaCha8Rng) {
        for _ in 0..500 {
            let licence = drivers_license(&mut rng);
            assert!(is_valid_drivers_license(&licence), "bad licence {licence}");
        }
    }

    #[rstest]
    fn region_codes_cover_bounds(mut rng: ChaCha8Rng) {
        let regions: std::collections::HashSet<String> = (0..2_000)
            .map(|_| drivers_license(&mut rng).chars().take(2).collect())
            .collect();
        assert!(regions.contains("11"));
        assert!(regions.contains("28"));
        assert_eq!(regions.len(), 18);
    }
}
