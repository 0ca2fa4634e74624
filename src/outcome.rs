use crate::error::GrammarError;
use crate::state::ParseState;

/// Result of running a parser once
///
/// A failure carries no value. What it reports is its state: the offset it
/// stopped at and the labels expected there.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<O> {
    Success { value: O, state: ParseState },
    Failure { state: ParseState },
}

/// What every parser returns
///
/// `Ok` holds the ordinary outcome, which drives backtracking. `Err` is a
/// malformed grammar and aborts the whole parse; combinators pass it through
/// with `?` and never inspect it.
pub type Reply<O> = Result<Outcome<O>, GrammarError>;

impl<O> Outcome<O> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn state(&self) -> &ParseState {
        match self {
            Outcome::Success { state, .. } | Outcome::Failure { state } => state,
        }
    }

    pub fn into_state(self) -> ParseState {
        match self {
            Outcome::Success { state, .. } | Outcome::Failure { state } => state,
        }
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Transform the success value, leaving a failure untouched
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Outcome<U> {
        match self {
            Outcome::Success { value, state } => Outcome::Success {
                value: f(value),
                state,
            },
            Outcome::Failure { state } => Outcome::Failure { state },
        }
    }

    /// Whether this outcome ended somewhere other than `start`
    pub fn moved_from(&self, start: usize) -> bool {
        self.state().index() != start
    }
}
