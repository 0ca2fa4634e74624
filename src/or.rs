use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::pure::Pure;
use crate::state::ParseState;
use tracing::trace;

/// Parser combinator for ordered choice
///
/// Runs the first parser. If it fails *after consuming input*, that failure
/// is final and the second parser is never tried; wrap the first parser in
/// [`attempt`](crate::attempt::AttemptExt::attempt) to allow backtracking
/// over consumed input. If it fails without consuming, the second parser
/// runs from the starting state carrying the failure's expected labels, so
/// context set inside the failed branch does not leak into the second one.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.first.parse(input, state)? {
            Outcome::Failure { state: failed } if failed.index() == start.index() => {
                trace!(index = start.index(), "first alternative failed softly, trying second");
                let state = start.with_expected(failed.expected().clone());
                self.second.parse(input, state)
            }
            outcome @ Outcome::Failure { .. } => {
                trace!(
                    start = start.index(),
                    reached = outcome.state().index(),
                    "first alternative consumed input, committing"
                );
                Ok(outcome)
            }
            success => Ok(success),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() and .fallback() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Succeed with `value` without consuming anything if this parser fails softly
    fn fallback(self, value: Self::Output) -> Or<Self, Pure<Self::Output>>
    where
        Self::Output: Clone,
    {
        Or::new(self, Pure::new(value))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
