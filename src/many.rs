use crate::error::GrammarError;
use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;
use tracing::warn;

/// Parser combinator that matches up to `max` occurrences of the given parser
///
/// Repetition stops cleanly, succeeding with what it collected, when the
/// parser fails without consuming input or `max` elements have been
/// collected. A failure after consuming input fails the whole repetition,
/// so a half-matched last element is never dropped silently.
///
/// Every successful iteration must consume input. One that does not would
/// repeat forever, so it aborts the parse with
/// [`GrammarError::NonConsumingRepetition`].
#[derive(Debug, Clone)]
pub struct AtMost<P> {
    parser: P,
    max: usize,
}

impl<P> AtMost<P> {
    pub fn new(parser: P, max: usize) -> Self {
        AtMost { parser, max }
    }
}

impl<'code, P> Parser<'code> for AtMost<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str, mut state: ParseState) -> Reply<Self::Output> {
        let mut results = Vec::new();

        while results.len() < self.max {
            let start = state.index();
            match self.parser.parse(input, state)? {
                Outcome::Success { value, state: next } => {
                    ensure_progress(start, &next)?;
                    results.push(value);
                    state = next;
                }
                Outcome::Failure { state } if state.index() == start => {
                    return Ok(Outcome::Success {
                        value: results,
                        state,
                    });
                }
                Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
            }
        }

        Ok(Outcome::Success {
            value: results,
            state,
        })
    }
}

/// Abort unless a repeated parser moved past `start`
pub(crate) fn ensure_progress(start: usize, next: &ParseState) -> Result<(), GrammarError> {
    if next.index() > start {
        Ok(())
    } else {
        warn!(index = start, "repeated parser consumed no input, aborting parse");
        Err(GrammarError::NonConsumingRepetition { index: start })
    }
}

/// Parser combinator that matches between `min` and `max` occurrences
///
/// Collecting fewer than `min` elements is an ordinary failure, reported at
/// the state where the repetition stopped.
#[derive(Debug, Clone)]
pub struct Times<P> {
    inner: AtMost<P>,
    min: usize,
}

impl<P> Times<P> {
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        Times {
            inner: AtMost::new(parser, max),
            min,
        }
    }
}

impl<'code, P> Parser<'code> for Times<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        match self.inner.parse(input, state)? {
            Outcome::Success { value, state } if value.len() < self.min => {
                Ok(Outcome::Failure { state })
            }
            outcome => Ok(outcome),
        }
    }
}

/// Convenience function to create a parser matching zero or more occurrences
pub fn many<'code, P>(parser: P) -> AtMost<P>
where
    P: Parser<'code>,
{
    AtMost::new(parser, usize::MAX)
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    /// Zero or more occurrences
    fn many(self) -> AtMost<Self> {
        AtMost::new(self, usize::MAX)
    }

    /// Zero to `max` occurrences
    fn at_most(self, max: usize) -> AtMost<Self> {
        AtMost::new(self, max)
    }

    /// Exactly `count` occurrences
    fn times(self, count: usize) -> Times<Self> {
        Times::new(self, count, count)
    }

    /// Between `min` and `max` occurrences, inclusive
    fn times_between(self, min: usize, max: usize) -> Times<Self> {
        Times::new(self, min, max)
    }

    /// `min` or more occurrences
    fn at_least(self, min: usize) -> Times<Self> {
        Times::new(self, min, usize::MAX)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
