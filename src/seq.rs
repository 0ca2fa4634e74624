use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// A group of parsers that can be run one after another
///
/// Implemented for tuples of up to eight parsers, producing a tuple of their
/// outputs, and for arrays and `Vec`s of one parser type, producing a `Vec`.
pub trait Sequence<'code> {
    type Output;

    fn parse_all(&self, input: &'code str, state: ParseState) -> Reply<Self::Output>;
}

fn parse_each<'code, P>(
    parsers: &[P],
    input: &'code str,
    mut state: ParseState,
) -> Reply<Vec<P::Output>>
where
    P: Parser<'code>,
{
    let mut values = Vec::with_capacity(parsers.len());
    for parser in parsers {
        match parser.parse(input, state)? {
            Outcome::Success { value, state: next } => {
                values.push(value);
                state = next;
            }
            Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
        }
    }
    Ok(Outcome::Success {
        value: values,
        state,
    })
}

impl<'code, P> Sequence<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_all(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        parse_each(self, input, state)
    }
}

impl<'code, P, const N: usize> Sequence<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_all(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        parse_each(self, input, state)
    }
}

macro_rules! impl_sequence_for_tuple {
    ($($parser:ident $value:ident $index:tt),+) => {
        impl<'code, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>),+
        {
            type Output = ($(<$parser as Parser<'code>>::Output,)+);

            fn parse_all(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
                $(
                    let ($value, state) = match self.$index.parse(input, state)? {
                        Outcome::Success { value, state } => (value, state),
                        Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
                    };
                )+
                Ok(Outcome::Success {
                    value: ($($value,)+),
                    state,
                })
            }
        }
    };
}

impl_sequence_for_tuple!(P1 v1 0);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6);
impl_sequence_for_tuple!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7);

/// Parser combinator that matches a group of parsers in order
///
/// Collects every value; the first failure aborts the sequence and is
/// reported as is. An empty `Vec` succeeds with no values.
///
/// # Examples
/// - `seq((string("a"), digit()))` on `"a1"` → `("a", '1')`
/// - `seq(vec![string("a"), string("b")])` on `"ab"` → `vec!["a", "b"]`
#[derive(Debug, Clone)]
pub struct Seq<S> {
    parsers: S,
}

impl<S> Seq<S> {
    pub fn new(parsers: S) -> Self {
        Seq { parsers }
    }
}

impl<'code, S> Parser<'code> for Seq<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        self.parsers.parse_all(input, state)
    }
}

/// Creates a parser that matches every parser of the group in order
pub fn seq<'code, S>(parsers: S) -> Seq<S>
where
    S: Sequence<'code>,
{
    Seq::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::map::MapExt;
    use crate::run::run;
    use crate::utf8::{digit, letter, string};

    #[test]
    fn test_tuple_collects_mixed_outputs() {
        let parser = seq((string("a"), digit(), letter()));
        let parsed = run(&parser, "a1b!").unwrap();

        assert_eq!(parsed.value.0, "a");
        assert_eq!(parsed.value.1, '1');
        assert_eq!(parsed.value.2, 'b');
        assert_eq!(parsed.remaining, "!");
    }

    #[test]
    fn test_first_failure_aborts() {
        let parser = seq((string("a"), string("b"), string("c")));
        let error = run(&parser, "abx").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 2);
        assert_eq!(failure.expected, vec!["c"]);
    }

    #[test]
    fn test_vec_of_literals() {
        let parser = seq(vec![string("a"), string("b")]);
        let parsed = run(&parser, "abc").unwrap();

        assert_eq!(parsed.value, vec!["a", "b"]);
        assert_eq!(parsed.consumed, "ab");
    }

    #[test]
    fn test_array_of_boxed_parsers() {
        let parsers: [BoxedParser<'_, String>; 2] = [
            string("x").map(|s| s.into_owned()).boxed(),
            digit().map(|c| c.to_string()).boxed(),
        ];
        let parsed = run(&seq(parsers), "x9").unwrap();
        assert_eq!(parsed.value, vec!["x", "9"]);
    }

    #[test]
    fn test_empty_vec_succeeds() {
        let parser = seq(Vec::<crate::utf8::string::Literal>::new());
        let parsed = run(&parser, "abc").unwrap();

        assert!(parsed.value.is_empty());
        assert_eq!(parsed.remaining, "abc");
    }

    #[test]
    fn test_single_element_tuple() {
        let parsed = run(&seq((digit(),)), "7").unwrap();
        assert_eq!(parsed.value, ('7',));
    }
}
