use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that feeds a successful value into a function choosing the next parser
///
/// The chosen parser continues on the same input from the state the first
/// parser left behind. A failure of the first parser short-circuits without
/// calling the function.
#[derive(Debug, Clone)]
pub struct Chain<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Chain { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        match self.parser.parse(input, state)? {
            Outcome::Success { value, state } => (self.next)(value).parse(input, state),
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'code, P, F, Q>(parser: P, next: F) -> Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Chain::new(parser, next)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'code>: Parser<'code> + Sized {
    fn chain<F, Q>(self, next: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Chain::new(self, next)
    }
}

/// Implement ChainExt for all parsers
impl<'code, P> ChainExt<'code> for P where P: Parser<'code> {}
