use rand::Rng;
use rand::seq::SliceRandom;

use crate::token::LetterToken;

/// Angle of the first token: straight up on screen.
pub const TOP_ANGLE: f32 = 270.0;

/// Case-folds `raw` and keeps only the letters `a`..=`z`.
///
/// Anything else is dropped without complaint.
pub fn filter_letters(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Angle in degrees for token `index` out of `count`.
///
/// Spacing is even and index 0 lands on [`TOP_ANGLE`].
pub fn angle_for(index: usize, count: usize) -> f32 {
    if count == 0 {
        return TOP_ANGLE;
    }
    let step = 360.0 / count as f32;
    (index as f32 * step - 90.0 + 360.0).rem_euclid(360.0)
}

/// Shuffles the filtered letters of `text` and places them around the wheel.
///
/// Every call produces fresh token ids, even for identical text.
pub fn place<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<LetterToken> {
    let mut letters: Vec<char> = filter_letters(text).chars().collect();
    if letters.is_empty() {
        return Vec::new();
    }

    letters.shuffle(rng);

    let count = letters.len();
    letters
        .into_iter()
        .enumerate()
        .map(|(index, letter)| LetterToken::new(letter, angle_for(index, count)))
        .collect()
}
