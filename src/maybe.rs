use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator matching zero or one occurrence
///
/// Yields `Some` when the wrapped parser succeeds and `None` when it fails
/// without consuming input; the `None` case resumes from the starting state,
/// keeping only the failure's expected labels. A failure after consuming
/// input is passed on.
#[derive(Debug, Clone)]
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.parser.parse(input, state)? {
            Outcome::Success { value, state } => Ok(Outcome::Success {
                value: Some(value),
                state,
            }),
            Outcome::Failure { state: failed } if failed.index() == start.index() => {
                Ok(Outcome::Success {
                    value: None,
                    state: start.with_expected(failed.expected().clone()),
                })
            }
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers
impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}
