use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

const END_OF_INPUT: &str = "end of input";

/// Parser that succeeds only when no input is left
///
/// Consumes nothing. Fails with the label `"end of input"` anywhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        if state.index() >= input.len() {
            Ok(Outcome::Success { value: (), state })
        } else {
            Ok(Outcome::Failure {
                state: state.expecting(END_OF_INPUT.into()),
            })
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
