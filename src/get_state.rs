use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that succeeds with a copy of the current state, consuming nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct GetState;

impl<'code> Parser<'code> for GetState {
    type Output = ParseState;

    fn parse(&self, _input: &'code str, state: ParseState) -> Reply<Self::Output> {
        Ok(Outcome::Success {
            value: state.clone(),
            state,
        })
    }
}

pub fn get_state() -> GetState {
    GetState
}

/// Parser that replaces the current state with a fixed one
///
/// Always succeeds with `()`. Installing a state with a smaller index
/// rewinds the parse; this is how lookahead-style combinators can be
/// written by hand.
#[derive(Debug, Clone)]
pub struct SetState {
    state: ParseState,
}

impl SetState {
    pub fn new(state: ParseState) -> Self {
        SetState { state }
    }
}

impl<'code> Parser<'code> for SetState {
    type Output = ();

    fn parse(&self, _input: &'code str, _state: ParseState) -> Reply<Self::Output> {
        Ok(Outcome::Success {
            value: (),
            state: self.state.clone(),
        })
    }
}

pub fn set_state(state: ParseState) -> SetState {
    SetState::new(state)
}
