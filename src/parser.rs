use crate::outcome::Reply;
use crate::state::ParseState;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value wrapping a pure function from the input and
/// a state to a [`Reply`]. Running it twice on the same arguments gives the
/// same answer, and running it never changes the parser, so one grammar can
/// serve any number of parses, including from several threads at once.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse `input` starting at `state.index()`
    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        (**self).parse(input, state)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        (**self).parse(input, state)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        (**self).parse(input, state)
    }
}
