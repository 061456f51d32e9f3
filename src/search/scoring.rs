//! Match score calculation.

/// Score awarded to recipes without any required ingredient.
pub const FULL_SCORE: u8 = 100;

/// Convert match counts into a 0..=100 percentage.
///
/// - `required_count == 0`: 100, every required ingredient is vacuously present
/// - otherwise `matched_count / required_count * 100`, rounded half up
///
/// `matched_count` may include optional ingredients that happened to match, so
/// the result is clamped to 100.
pub fn score(matched_count: usize, required_count: usize) -> u8 {
    if required_count == 0 {
        return FULL_SCORE;
    }

    let rounded = (matched_count * 200 + required_count) / (required_count * 2);
    u8::try_from(rounded.min(usize::from(FULL_SCORE))).unwrap_or(FULL_SCORE)
}
