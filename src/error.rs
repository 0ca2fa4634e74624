use crate::state::ParseState;
use thiserror::Error;

/// A grammar that is malformed, independent of the input it runs on
///
/// Unlike an ordinary failure this is never backtracked over: every
/// combinator propagates it untouched and the whole parse is aborted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    /// A repeated parser succeeded without consuming input, so the repetition
    /// would never terminate
    #[error(
        "repeated parser succeeded at offset {index} without consuming input; a repeated parser must consume input to terminate"
    )]
    NonConsumingRepetition { index: usize },

    /// A pattern handed to `regexp` does not compile
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Report for a parse that did not match its input
///
/// Holds the furthest offset the parse reached, what would have allowed it
/// to continue there, and the input left from that offset on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("expected {} at offset {index}", describe_expected(.expected))]
pub struct ParseFailure<'code> {
    pub index: usize,
    /// Expected labels, de-duplicated, in the order they were collected
    pub expected: Vec<String>,
    pub remaining: &'code str,
}

impl<'code> ParseFailure<'code> {
    pub fn new(input: &'code str, state: &ParseState) -> Self {
        let mut expected: Vec<String> = Vec::new();
        for label in state.labels() {
            if !expected.iter().any(|seen| seen == label) {
                expected.push(label.to_string());
            }
        }

        Self {
            index: state.index(),
            expected,
            remaining: input.get(state.index()..).unwrap_or_default(),
        }
    }
}

/// Why a top-level parse produced no value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError<'code> {
    #[error("{0}")]
    Failed(ParseFailure<'code>),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

// `#[from]` would make the borrowed report a `source`, which must be 'static
impl<'code> From<ParseFailure<'code>> for RunError<'code> {
    fn from(failure: ParseFailure<'code>) -> Self {
        RunError::Failed(failure)
    }
}

impl<'code> RunError<'code> {
    /// The failure report, if this was an ordinary mismatch
    pub fn failure(&self) -> Option<&ParseFailure<'code>> {
        match self {
            RunError::Failed(failure) => Some(failure),
            RunError::Grammar(_) => None,
        }
    }

    pub fn is_grammar_error(&self) -> bool {
        matches!(self, RunError::Grammar(_))
    }
}

/// Render labels as `a`, `a or b`, `a, b, or c`
fn describe_expected(expected: &[String]) -> String {
    match expected {
        [] => "nothing matchable".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
