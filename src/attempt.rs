use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::{Label, ParseState};
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that makes a failure look as if no input was consumed
///
/// If the wrapped parser fails, the failure is reported at the state the
/// attempt started from, so an enclosing `or` or `alt` may try its next
/// alternative even though the wrapped parser had already consumed input.
/// With a label, the label is appended to the starting state's expected list
/// and replaces whatever the wrapped parser expected.
#[derive(Debug, Clone)]
pub struct Attempt<P> {
    parser: P,
    label: Option<Label>,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt {
            parser,
            label: None,
        }
    }

    pub fn labelled(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Attempt {
            parser,
            label: Some(label.into()),
        }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.parser.parse(input, state)? {
            Outcome::Failure { state: failed } => {
                if failed.index() != start.index() {
                    trace!(
                        start = start.index(),
                        reached = failed.index(),
                        "rewinding failed attempt"
                    );
                }
                let state = match &self.label {
                    Some(label) => start.expecting(label.clone()),
                    None => start,
                };
                Ok(Outcome::Failure { state })
            }
            success => Ok(success),
        }
    }
}

/// Extension trait to add .attempt() and .label() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    /// Allow alternatives to be tried after this parser fails, even if it consumed input
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }

    /// Like [`attempt`](AttemptExt::attempt), reporting `label` as the expectation on failure
    fn label(self, label: impl Into<Cow<'static, str>>) -> Attempt<Self> {
        Attempt::labelled(self, label)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}
