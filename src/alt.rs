use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;
use tracing::trace;

/// A group of alternatives with one output type, tried in order
///
/// Implemented for tuples of up to eight parsers, and for arrays and `Vec`s.
pub trait Choice<'code> {
    type Output;

    fn parse_first(&self, input: &'code str, state: ParseState) -> Reply<Self::Output>;
}

fn choose<'code, P>(alternatives: &[P], input: &'code str, mut state: ParseState) -> Reply<P::Output>
where
    P: Parser<'code>,
{
    let start = state.clone();
    for (position, alternative) in alternatives.iter().enumerate() {
        match alternative.parse(input, state)? {
            Outcome::Failure { state: failed } if failed.index() == start.index() => {
                trace!(index = start.index(), alternative = position, "alternative failed softly");
                state = start.clone().with_expected(failed.expected().clone());
            }
            outcome @ Outcome::Failure { .. } => {
                trace!(
                    start = start.index(),
                    reached = outcome.state().index(),
                    alternative = position,
                    "alternative consumed input, committing"
                );
                return Ok(outcome);
            }
            success => return Ok(success),
        }
    }
    Ok(Outcome::Failure { state })
}

impl<'code, P> Choice<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        choose(self, input, state)
    }
}

impl<'code, P, const N: usize> Choice<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        choose(self, input, state)
    }
}

macro_rules! impl_choice_for_tuple {
    ($($parser:ident $index:tt),+) => {
        impl<'code, O, $($parser),+> Choice<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code, Output = O>),+
        {
            type Output = O;

            fn parse_first(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
                let alternatives = [$(&self.$index as &dyn Parser<'code, Output = O>),+];
                choose(&alternatives, input, state)
            }
        }
    };
}

impl_choice_for_tuple!(P1 0);
impl_choice_for_tuple!(P1 0, P2 1);
impl_choice_for_tuple!(P1 0, P2 1, P3 2);
impl_choice_for_tuple!(P1 0, P2 1, P3 2, P4 3);
impl_choice_for_tuple!(P1 0, P2 1, P3 2, P4 3, P5 4);
impl_choice_for_tuple!(P1 0, P2 1, P3 2, P4 3, P5 4, P6 5);
impl_choice_for_tuple!(P1 0, P2 1, P3 2, P4 3, P5 4, P6 5, P7 6);
impl_choice_for_tuple!(P1 0, P2 1, P3 2, P4 3, P5 4, P6 5, P7 6, P8 7);

/// Parser combinator for ordered choice over any number of alternatives
///
/// Each alternative that fails without consuming input hands its expected
/// labels to the next one, which starts from the original state, so the
/// labels of every tried alternative accumulate while context set by a
/// failed alternative is dropped. The first success, or the first failure that consumed input,
/// is the result. With no alternatives at all it fails where it stands.
#[derive(Debug, Clone)]
pub struct Alt<C> {
    alternatives: C,
}

impl<C> Alt<C> {
    pub fn new(alternatives: C) -> Self {
        Alt { alternatives }
    }
}

impl<'code, C> Parser<'code> for Alt<C>
where
    C: Choice<'code>,
{
    type Output = C::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        self.alternatives.parse_first(input, state)
    }
}

/// Creates a parser that tries each alternative in order
pub fn alt<'code, C>(alternatives: C) -> Alt<C>
where
    C: Choice<'code>,
{
    Alt::new(alternatives)
}
