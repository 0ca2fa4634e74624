use crate::utf8::char::{Satisfy, TakeWhile1, satisfy, take_while1};

/// Parser for a single ASCII digit `0`-`9`
pub fn digit() -> Satisfy<fn(char) -> bool> {
    let is_digit: fn(char) -> bool = |c| c.is_ascii_digit();
    satisfy(is_digit, "digit")
}

/// Parser for any character Unicode classifies as numeric
pub fn unicode_digit() -> Satisfy<fn(char) -> bool> {
    let is_numeric: fn(char) -> bool = char::is_numeric;
    satisfy(is_numeric, "digit")
}

/// Parser for a run of one or more ASCII digits, yielding the matched slice
pub fn digits() -> TakeWhile1<fn(char) -> bool> {
    let is_digit: fn(char) -> bool = |c| c.is_ascii_digit();
    take_while1(is_digit, "digits")
}
