use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
#[derive(Debug, Clone, Copy)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub const fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _input: &'code str, state: ParseState) -> Reply<Self::Output> {
        Ok(Outcome::Success {
            value: self.value.clone(),
            state,
        })
    }
}

/// Convenience function to create a Pure parser
pub const fn pure<T>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Parser that always fails where it stands, adding no expected label
///
/// The output type is free so a failing branch can stand in wherever a
/// parser of some other output type is needed.
pub struct Fail<T = ()> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub const fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Fail<T> {}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Fail<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fail")
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _input: &'code str, state: ParseState) -> Reply<Self::Output> {
        Ok(Outcome::Failure { state })
    }
}

pub const fn fail<T>() -> Fail<T> {
    Fail::new()
}

/// The always-failing parser
pub const FAIL: Fail = Fail::new();

/// Another name for [`FAIL`], the identity of `or`
pub const ZERO: Fail = Fail::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run;

    #[test]
    fn test_pure_consumes_nothing() {
        let parsed = run(&pure(42), "abc").unwrap();
        assert_eq!(parsed.value, 42);
        assert_eq!(parsed.consumed, "");
        assert_eq!(parsed.remaining, "abc");
    }

    #[test]
    fn test_pure_on_empty_input() {
        let parsed = run(&pure("x"), "").unwrap();
        assert_eq!(parsed.value, "x");
    }

    #[test]
    fn test_pure_keeps_state() {
        let state = ParseState::new()
            .with_index(1)
            .expecting("digit".into());
        let outcome = pure(()).parse("ab", state.clone()).unwrap();
        assert_eq!(outcome.into_state(), state);
    }

    #[test]
    fn test_fail_adds_no_label() {
        let error = run(&FAIL, "abc").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 0);
        assert!(failure.expected.is_empty());
        assert_eq!(failure.remaining, "abc");
    }

    #[test]
    fn test_zero_is_fail() {
        let state = ParseState::new().with_index(2);
        let outcome = ZERO.parse("abcd", state.clone()).unwrap();
        assert_eq!(outcome, Outcome::Failure { state });
    }

    #[test]
    fn test_typed_fail() {
        let parser = fail::<Vec<char>>();
        assert!(run(&parser, "").is_err());
    }
}
