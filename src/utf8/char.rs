use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::{Label, ParseState};
use std::borrow::Cow;

/// Consume one character if `accept` allows it
///
/// Shared by every single-character parser: success clears the expected
/// labels and advances by the character's UTF-8 width, failure records
/// `label` and stays put. Running out of input is a failure.
fn one_char(
    input: &str,
    state: ParseState,
    label: &Label,
    accept: impl FnOnce(char) -> bool,
) -> Reply<char> {
    let next = input
        .get(state.index()..)
        .and_then(|rest| rest.chars().next());

    match next {
        Some(c) if accept(c) => Ok(Outcome::Success {
            value: c,
            state: state.advance(c.len_utf8()),
        }),
        _ => Ok(Outcome::Failure {
            state: state.expecting(label.clone()),
        }),
    }
}

/// Parser that consumes one character satisfying a predicate
#[derive(Debug, Clone)]
pub struct Satisfy<F> {
    predicate: F,
    label: Label,
}

impl<F> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            label: label.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        one_char(input, state, &self.label, &self.predicate)
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label)
}

/// Parser that consumes a non-empty run of characters satisfying a predicate
///
/// Yields the matched slice of the input. Fails without consuming, recording
/// its label, when the first character does not qualify.
#[derive(Debug, Clone)]
pub struct TakeWhile1<F> {
    predicate: F,
    label: Label,
}

impl<F> TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            label: label.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code, F> Parser<'code> for TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let rest = input.get(state.index()..).unwrap_or_default();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(rest.len(), |(at, _)| at);

        match rest.get(..len) {
            Some(run) if !run.is_empty() => Ok(Outcome::Success {
                value: run,
                state: state.advance(len),
            }),
            _ => Ok(Outcome::Failure {
                state: state.expecting(self.label.clone()),
            }),
        }
    }
}

pub fn take_while1<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile1::new(predicate, label)
}

/// Parser that consumes any single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        one_char(input, state, &Cow::Borrowed("any character"), |_| true)
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes one character not in a forbidden set
///
/// Fails without consuming when the input is exhausted or the next character
/// is forbidden. The default label is `none of <chars>`.
#[derive(Debug, Clone)]
pub struct NoneOf {
    forbidden: Cow<'static, str>,
    label: Label,
}

impl NoneOf {
    pub fn new(forbidden: impl Into<Cow<'static, str>>) -> Self {
        let forbidden = forbidden.into();
        let label = Cow::Owned(format!("none of {forbidden}"));
        Self { forbidden, label }
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code> Parser<'code> for NoneOf {
    type Output = char;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        one_char(input, state, &self.label, |c| !self.forbidden.contains(c))
    }
}

pub fn none_of(forbidden: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf::new(forbidden)
}

/// Parser that consumes one character from an allowed set
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Cow<'static, str>,
    label: Label,
}

impl OneOf {
    pub fn new(allowed: impl Into<Cow<'static, str>>) -> Self {
        let allowed = allowed.into();
        let label = Cow::Owned(format!("one of {allowed}"));
        Self { allowed, label }
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        one_char(input, state, &self.label, |c| self.allowed.contains(c))
    }
}

pub fn one_of(allowed: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(allowed)
}
