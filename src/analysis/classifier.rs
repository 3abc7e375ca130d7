//! Routing decision for tokens produced by segmentation.

/// How a token is turned into a match clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRoute {
    /// Expand through the phonetic analyzer.
    Phonetic,
    /// Emit as a quoted literal phrase.
    Literal,
}

/// Returns true when every character of `token` is an ASCII letter.
///
/// The empty string is not eligible. Accented Latin, digits and CJK all make a
/// token ineligible.
pub fn is_phonetic_eligible(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Pick the route for a token.
pub fn route(token: &str) -> TokenRoute {
    if is_phonetic_eligible(token) {
        TokenRoute::Phonetic
    } else {
        TokenRoute::Literal
    }
}
