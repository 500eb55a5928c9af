use rand::Rng;

/// Number of decimal digits in a generated thought id.
pub const ID_DIGITS: usize = 20;

/// A string of random decimal digits.
///
/// Collisions are astronomically unlikely but possible; callers that need
/// uniqueness re-draw against the ids they already hold.
pub fn random_digits(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn short_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head = chars.by_ref().take(max_chars).collect::<String>();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}
