use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;
use tracing::{trace, trace_span};

/// Parser wrapper that records each invocation in a `trace` span
///
/// The span carries the rule name and starting offset; an event inside it
/// records where the parser ended and whether it matched. Behaviour is
/// otherwise identical to the wrapped parser.
#[derive(Debug, Clone)]
pub struct Traced<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Traced<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Traced {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Traced<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let span = trace_span!("rule", name = %self.name, start = state.index());
        let _entered = span.enter();

        let reply = self.parser.parse(input, state);
        match &reply {
            Ok(Outcome::Success { state, .. }) => trace!(end = state.index(), "matched"),
            Ok(Outcome::Failure { state }) => {
                trace!(end = state.index(), expected = state.expected().len(), "failed")
            }
            Err(error) => trace!(%error, "aborted"),
        }
        reply
    }
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'code>: Parser<'code> + Sized {
    fn traced(self, name: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(self, name)
    }
}

/// Implement TracedExt for all parsers
impl<'code, P> TracedExt<'code> for P where P: Parser<'code> {}
