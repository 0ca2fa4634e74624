use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that runs two parsers in sequence and keeps the second value
#[derive(Debug, Clone)]
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        match self.first.parse(input, state)? {
            Outcome::Success { state, .. } => self.second.parse(input, state),
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

/// Parser combinator that runs two parsers in sequence and keeps the first value
#[derive(Debug, Clone)]
pub struct Skip<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Skip { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        match self.first.parse(input, state)? {
            Outcome::Success { value, state } => {
                Ok(self.second.parse(input, state)?.map(|_| value))
            }
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

/// Extension trait to add .then() and .skip() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    /// Run `next` after this parser and keep its value
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, next)
    }

    /// Run `next` after this parser and keep this parser's value
    fn skip<P>(self, next: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run;
    use crate::utf8::{digit, string};

    #[test]
    fn test_then_keeps_second() {
        let parser = string("-").then(digit());
        let parsed = run(&parser, "-5").unwrap();
        assert_eq!(parsed.value, '5');
        assert_eq!(parsed.remaining, "");
    }

    #[test]
    fn test_skip_keeps_first() {
        let parser = digit().skip(string(";"));
        let parsed = run(&parser, "5;rest").unwrap();
        assert_eq!(parsed.value, '5');
        assert_eq!(parsed.remaining, "rest");
    }

    #[test]
    fn test_then_first_failure() {
        let error = run(&string("-").then(digit()), "+5").unwrap_err();
        let failure = error.failure().unwrap();
        assert_eq!(failure.index, 0);
        assert_eq!(failure.expected, vec!["-"]);
    }

    #[test]
    fn test_skip_second_failure() {
        let error = run(&digit().skip(string(";")), "5,").unwrap_err();
        let failure = error.failure().unwrap();
        assert_eq!(failure.index, 1);
        assert_eq!(failure.expected, vec![";"]);
        assert_eq!(failure.remaining, ",");
    }
}
