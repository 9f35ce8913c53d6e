//! Korean given names and surnames for passport owners.

use rand::Rng;

use crate::gender::PassportGender;
use crate::template::pick;

/// Common male given names.
pub const GIVEN_NAMES_MALE: [&str; 24] = [
    "건우", "도윤", "도현", "동현", "민재", "민준", "민성", "상현", "서준", "성민", "성현", "승민",
    "시우", "예준", "우진", "유준", "은우", "재원", "정우", "준서", "준영", "지호", "지후", "현우",
];

/// Common female given names.
pub const GIVEN_NAMES_FEMALE: [&str; 24] = [
    "민서", "서연", "서영", "서윤", "서현", "수민", "수빈", "수아", "예린", "예은", "유진", "윤서",
    "은지", "지민", "지아", "지우", "지원", "지유", "지은", "지현", "채원", "하윤", "하은", "현주",
];

/// Surnames, most frequent first.
pub const SURNAMES: [&str; 60] = [
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권",
    "황", "안", "송", "류", "전", "홍", "고", "문", "양", "손", "배", "백", "허", "유", "남",
    "심", "노", "하", "곽", "성", "차", "주", "우", "구", "민", "진", "지", "엄", "채", "원",
    "천", "방", "공", "현", "함", "변", "염", "여", "추", "도", "소", "석", "선", "설", "마",
];

/// Draws a `(given name, surname)` pair consistent with the passport marker.
///
/// `X` draws the given name from either list with equal probability.
pub fn passport_owner<R: Rng + ?Sized>(rng: &mut R, gender: PassportGender) -> (String, String) {
    let given = match gender {
        PassportGender::Male => pick(rng, &GIVEN_NAMES_MALE),
        PassportGender::Female => pick(rng, &GIVEN_NAMES_FEMALE),
        PassportGender::Unspecified => {
            if rng.random_bool(0.5) {
                pick(rng, &GIVEN_NAMES_MALE)
            } else {
                pick(rng, &GIVEN_NAMES_FEMALE)
            }
        }
    };
    let surname = pick(rng, &SURNAMES);
    (given.to_owned(), surname.to_owned())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PassportGender::Male)]
    #[case(PassportGender::Female)]
    #[case(PassportGender::Unspecified)]
    fn surnames_come_from_the_table(#[case] gender: PassportGender) {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let (_, surname) = passport_owner(&mut rng, gender);
            assert!(SURNAMES.contains(&surname.as_str()));
        }
    }

    #[test]
    fn given_names_follow_the_marker() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let (male, _) = passport_owner(&mut rng, PassportGender::Male);
            let (female, _) = passport_owner(&mut rng, PassportGender::Female);
            assert!(GIVEN_NAMES_MALE.contains(&male.as_str()));
            assert!(GIVEN_NAMES_FEMALE.contains(&female.as_str()));
        }
    }

    #[test]
    fn unspecified_marker_draws_from_both_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let names: Vec<String> = (0..200)
            .map(|_| passport_owner(&mut rng, PassportGender::Unspecified).0)
            .collect();
        assert!(names.iter().any(|n| GIVEN_NAMES_MALE.contains(&n.as_str())));
        assert!(names.iter().any(|n| GIVEN_NAMES_FEMALE.contains(&n.as_str())));
    }

    #[test]
    fn tables_have_no_duplicates() {
        for table in [&GIVEN_NAMES_MALE[..], &GIVEN_NAMES_FEMALE[..], &SURNAMES[..]] {
            let mut sorted = table.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
        }
    }
}
