pub mod char;
pub mod digit;
pub mod letter;
pub mod pattern;
pub mod string;
pub mod whitespace;

pub use char::{any_char, none_of, one_of, satisfy, take_while1};
pub use digit::{digit, digits, unicode_digit};
pub use letter::{alphanumeric, letter, letters, nonletter};
pub use pattern::regexp;
pub use string::string;
pub use whitespace::{spaces, whitespace};
