use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;
use crate::then::Skip;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with `()` without consuming input if the wrapped parser fails
/// without consuming input. Fails at the starting offset if the wrapped
/// parser succeeds. A failure of the wrapped parser after consuming input
/// is passed on.
///
/// The rejection on a match is a soft failure at the starting offset, with
/// no expected label, even though the wrapped parser consumed input. An
/// enclosing `or` or `alt` therefore goes on to its next alternative instead
/// of committing.
#[derive(Debug, Clone)]
pub struct FailsSoftly<P> {
    parser: P,
}

impl<P> FailsSoftly<P> {
    pub fn new(parser: P) -> Self {
        FailsSoftly { parser }
    }
}

impl<'code, P> Parser<'code> for FailsSoftly<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.parser.parse(input, state)? {
            // Parser succeeded when we wanted it to fail
            Outcome::Success { .. } => Ok(Outcome::Failure { state: start }),
            Outcome::Failure { state } if state.index() == start.index() => {
                Ok(Outcome::Success {
                    value: (),
                    state: start,
                })
            }
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

/// Convenience function to create a FailsSoftly parser for negative lookahead
pub fn not<'code, P>(parser: P) -> FailsSoftly<P>
where
    P: Parser<'code>,
{
    FailsSoftly::new(parser)
}

/// Extension trait to add .fails_softly() and .not_followed_by() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn fails_softly(self) -> FailsSoftly<Self> {
        FailsSoftly::new(self)
    }

    /// Keep this parser's value only if `next` does not match right after it
    fn not_followed_by<P>(self, next: P) -> Skip<Self, FailsSoftly<P>>
    where
        P: Parser<'code>,
    {
        Skip::new(self, FailsSoftly::new(next))
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::ManyExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::run::run;
    use crate::seq::seq;
    use crate::then::ThenExt;
    use crate::utf8::{any_char, digit, letter, string};

    #[test]
    fn test_fails_softly_on_mismatch() {
        let parsed = run(&string("x").fails_softly(), "abc").unwrap();
        assert_eq!(parsed.remaining, "abc");
        assert_eq!(parsed.state.labels().count(), 0);
    }

    #[test]
    fn test_fails_on_match() {
        let error = run(&string("a").fails_softly(), "abc").unwrap_err();
        let failure = error.failure().unwrap();
        assert_eq!(failure.index, 0);
        assert_eq!(failure.remaining, "abc");
    }

    #[test]
    fn test_rejection_lets_or_try_next_alternative() {
        let parser = string("ab")
            .fails_softly()
            .map(|()| "not ab")
            .or(string("a").map(|_| "a"));
        let parsed = run(&parser, "ab").unwrap();

        assert_eq!(parsed.value, "a");
        assert_eq!(parsed.remaining, "b");
    }

    #[test]
    fn test_passes_on_committed_failure() {
        let parser = seq((string("a"), string("b"))).fails_softly();
        let error = run(&parser, "ax").unwrap_err();
        assert_eq!(error.failure().unwrap().index, 1);
    }

    #[test]
    fn test_not_followed_by_rejects() {
        let parser = digit().not_followed_by(letter());
        let error = run(&parser, "5x").unwrap_err();
        assert_eq!(error.failure().unwrap().index, 1);
    }

    #[test]
    fn test_not_followed_by_accepts() {
        let parser = digit().not_followed_by(letter());
        let parsed = run(&parser, "5 ").unwrap();
        assert_eq!(parsed.value, '5');
        assert_eq!(parsed.remaining, " ");
    }

    #[test]
    fn test_not_followed_by_at_end_of_input() {
        let parsed = run(&digit().not_followed_by(letter()), "5").unwrap();
        assert_eq!(parsed.value, '5');
    }

    #[test]
    fn test_keyword_boundary() {
        // "if" as a keyword, but not as the prefix of an identifier
        let keyword = string("if").not_followed_by(letter());
        assert!(run(&keyword, "if (x)").is_ok());
        assert!(run(&keyword, "iffy").is_err());
    }

    #[test]
    fn test_take_until_terminator() {
        let body = not(string("*/"))
            .then(any_char())
            .many()
            .map(|cs| cs.into_iter().collect::<String>());
        let parsed = run(&body, "comment */ rest").unwrap();
        assert_eq!(parsed.value, "comment ");
        assert_eq!(parsed.remaining, "*/ rest");
    }
}
