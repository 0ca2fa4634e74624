use crate::error::{ParseFailure, RunError};
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::state::ParseState;
use tracing::{debug, debug_span, warn};

/// A successful top-level parse
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'code, O> {
    pub value: O,
    /// Input matched by the parser, from the starting offset to where it stopped
    pub consumed: &'code str,
    /// Input the parser did not consume
    pub remaining: &'code str,
    /// Final state, including any labels left by the last soft failure
    pub state: ParseState,
}

/// Run a parser over the whole of `input`, starting at offset 0
///
/// Leftover input is not an error; it comes back in
/// [`Parsed::remaining`]. Skip [`eof`](crate::eof::eof) at the end of the
/// grammar to require a full match.
pub fn run<'code, P>(parser: &P, input: &'code str) -> Result<Parsed<'code, P::Output>, RunError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    run_from(parser, input, ParseState::new())
}

/// Run a parser over `input` from a caller-supplied state
///
/// Useful to resume at an offset or to seed context values the grammar
/// reads with [`get_state`](crate::get_state::get_state).
pub fn run_from<'code, P>(
    parser: &P,
    input: &'code str,
    state: ParseState,
) -> Result<Parsed<'code, P::Output>, RunError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let start = state.index();
    let span = debug_span!("parse", start, len = input.len());
    let _entered = span.enter();

    match parser.parse(input, state) {
        Ok(Outcome::Success { value, state }) => {
            debug!(end = state.index(), "parse succeeded");
            let end = state.index();
            Ok(Parsed {
                value,
                consumed: input.get(start..end).unwrap_or_default(),
                remaining: input.get(end..).unwrap_or_default(),
                state,
            })
        }
        Ok(Outcome::Failure { state }) => {
            let failure = ParseFailure::new(input, &state);
            debug!(index = failure.index, expected = ?failure.expected, "parse failed");
            Err(failure.into())
        }
        Err(error) => {
            warn!(%error, "grammar error");
            Err(error.into())
        }
    }
}

/// Extension trait to add .run() method support for parsers
pub trait RunExt<'code>: Parser<'code> {
    fn run(&self, input: &'code str) -> Result<Parsed<'code, Self::Output>, RunError<'code>> {
        run(self, input)
    }
}

/// Implement RunExt for all parsers
impl<'code, P> RunExt<'code> for P where P: Parser<'code> + ?Sized {}
