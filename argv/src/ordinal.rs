use std::borrow::Cow;

const WORDS: [&str; 20] = [
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
    "Twentieth",
];

/// Capitalised ordinal for a zero-based argument index: `0` is "First".
/// Past "Twentieth" the ordinal is numeric ("21st", "112th").
pub fn ordinal(index: usize) -> Cow<'static, str> {
    if let Some(word) = WORDS.get(index) {
        return Cow::Borrowed(word);
    }
    let n = index + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    Cow::Owned(format!("{n}{suffix}"))
}
