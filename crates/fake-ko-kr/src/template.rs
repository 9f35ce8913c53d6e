//! Placeholder template expansion.
//!
//! Templates mix literal characters with two markers: [`DIGIT_MARKER`] expands
//! to a random ASCII digit and [`LETTER_MARKER`] expands to a random entry of
//! the supplied alphabet. Every marker is drawn independently, so an expanded
//! template always has the same character count as the template itself.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Marker replaced by a random digit `0`-`9`.
pub const DIGIT_MARKER: char = '#';

/// Marker replaced by a random character from the supplied alphabet.
pub const LETTER_MARKER: char = '?';

/// Expands digit and letter markers in `template`.
///
/// Characters other than the two markers are copied through unchanged. When
/// `letters` is empty the letter marker is left in place.
///
/// # Example
///
/// ```
/// use fake_ko_kr::template::bothify;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let plate = bothify(&mut rng, "##?####", &['가', '나']);
///
/// assert_eq!(plate.chars().count(), 7);
/// assert!(plate.contains('가') || plate.contains('나'));
/// ```
pub fn bothify<R: Rng + ?Sized>(rng: &mut R, template: &str, letters: &[char]) -> String {
    template
        .chars()
        .map(|c| match c {
            DIGIT_MARKER => random_digit(rng),
            LETTER_MARKER => letters.choose(rng).copied().unwrap_or(LETTER_MARKER),
            other => other,
        })
        .collect()
}

/// Draws a single ASCII digit.
pub fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.random_range(0..10_u8))
}

/// Picks one entry from a fixed, non-empty table.
///
/// # Panics
///
/// Panics if `table` is empty. Callers only pass the crate's constant tables.
#[expect(
    clippy::indexing_slicing,
    reason = "index is drawn from 0..len over a non-empty constant table"
)]
pub(crate) fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[T]) -> T {
    table[rng.random_range(0..table.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[rstest]
    fn digit_markers_expand_to_digits(mut rng: ChaCha8Rng) {
        for _ in 0..200 {
            let out = bothify(&mut rng, "######", &[]);
            assert_eq!(out.len(), 6);
            assert!(out.chars().all(|c| c.is_ascii_digit()), "got {out}");
        }
    }

    #[rstest]
    fn letter_markers_draw_from_alphabet(mut rng: ChaCha8Rng) {
        let letters = ['가', '나', '다'];
        for _ in 0..200 {
            let out = bothify(&mut rng, "??", &letters);
            assert!(out.chars().all(|c| letters.contains(&c)), "got {out}");
        }
    }

    #[rstest]
    fn literals_are_preserved(mut rng: ChaCha8Rng) {
        let out = bothify(&mut rng, "AB-#?", &['Z']);
        assert!(out.starts_with("AB-"));
        assert!(out.ends_with('Z'));
        assert_eq!(out.chars().count(), 5);
    }

    #[rstest]
    fn empty_alphabet_keeps_letter_marker(mut rng: ChaCha8Rng) {
        assert_eq!(bothify(&mut rng, "x?x", &[]), "x?x");
    }

    #[rstest]
    fn random_digit_covers_every_digit(mut rng: ChaCha8Rng) {
        let mut seen = [false; 10];
        for _ in 0..1_000 {
            let digit = random_digit(&mut rng);
            let index = digit.to_digit(10).expect("ascii digit") as usize;
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[rstest]
    fn pick_returns_table_entries(mut rng: ChaCha8Rng) {
        let table = [3_u8, 5, 7];
        for _ in 0..100 {
            assert!(table.contains(&pick(&mut rng, &table)));
        }
    }
}
