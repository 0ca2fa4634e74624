use crate::many::{AtMost, ManyExt};
use crate::utf8::char::{Satisfy, satisfy};

/// Parser for a single whitespace character
pub fn whitespace() -> Satisfy<fn(char) -> bool> {
    let is_whitespace: fn(char) -> bool = char::is_whitespace;
    satisfy(is_whitespace, "whitespace")
}

/// Parser for zero or more whitespace characters
pub fn spaces() -> AtMost<Satisfy<fn(char) -> bool>> {
    whitespace().many()
}
