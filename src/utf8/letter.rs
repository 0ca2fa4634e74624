use crate::utf8::char::{Satisfy, TakeWhile1, satisfy, take_while1};

/// Parser for a single alphabetic character, Unicode-aware
///
/// Accepts any character Unicode calls alphabetic, so `é`, `λ` and `日`
/// match too. Use [`letters`] or [`nonletter`] for ASCII `a-z`/`A-Z` only.
pub fn letter() -> Satisfy<fn(char) -> bool> {
    let is_letter: fn(char) -> bool = char::is_alphabetic;
    satisfy(is_letter, "letter")
}

/// Parser for a single letter or digit
pub fn alphanumeric() -> Satisfy<fn(char) -> bool> {
    let is_alphanumeric: fn(char) -> bool = char::is_alphanumeric;
    satisfy(is_alphanumeric, "letter or digit")
}

/// Parser for a run of one or more ASCII letters, yielding the matched slice
pub fn letters() -> TakeWhile1<fn(char) -> bool> {
    let is_letter: fn(char) -> bool = |c| c.is_ascii_alphabetic();
    take_while1(is_letter, "letters")
}

/// Parser for a single character that is not an ASCII letter
pub fn nonletter() -> Satisfy<fn(char) -> bool> {
    let is_nonletter: fn(char) -> bool = |c| !c.is_ascii_alphabetic();
    satisfy(is_nonletter, "nonletter")
}
