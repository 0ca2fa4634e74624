use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::{Label, ParseState};
use std::borrow::Cow;

/// Parser that matches an exact string at the current offset
///
/// On success the value is the literal itself and the expected labels are
/// cleared. On failure nothing is consumed and the literal is recorded as
/// the expected label.
#[derive(Debug, Clone)]
pub struct Literal {
    literal: Label,
}

impl Literal {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = Label;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let matched = input
            .get(state.index()..)
            .is_some_and(|rest| rest.starts_with(&*self.literal));

        if matched {
            // Clone is cheap here - just copies the reference for &'static str
            Ok(Outcome::Success {
                value: self.literal.clone(),
                state: state.advance(self.literal.len()),
            })
        } else {
            Ok(Outcome::Failure {
                state: state.expecting(self.literal.clone()),
            })
        }
    }
}

/// Convenience function to create a Literal parser
pub fn string(literal: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(literal)
}
