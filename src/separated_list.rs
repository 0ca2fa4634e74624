use crate::many::ensure_progress;
use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses an optional first item followed by zero or more occurrences of
/// (separator + item), returning every item. A separator that matched with
/// no item after it fails the whole list. With `min = 1` the list must not
/// be empty.
///
/// # Examples
/// - `"a,a,a"` with separator `,` → `vec!["a", "a", "a"]`
/// - `""` with separator `,` → `vec![]`
#[derive(Debug, Clone)]
pub struct SeparatedList<P, S> {
    parser: P,
    separator: S,
    min: usize,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedList {
            parser,
            separator,
            min: 0,
        }
    }

    pub fn non_empty(parser: P, separator: S) -> Self {
        SeparatedList {
            parser,
            separator,
            min: 1,
        }
    }
}

impl<'code, P, S> Parser<'code> for SeparatedList<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.parser.parse(input, state)? {
            Outcome::Success { value, state } => {
                let mut results = vec![value];
                let outcome = self.parse_rest(input, state, &mut results)?;
                Ok(outcome.map(|()| results))
            }
            Outcome::Failure { state: failed }
                if failed.index() == start.index() && self.min == 0 =>
            {
                Ok(Outcome::Success {
                    value: Vec::new(),
                    state: start.with_expected(failed.expected().clone()),
                })
            }
            Outcome::Failure { state } => Ok(Outcome::Failure { state }),
        }
    }
}

impl<P, S> SeparatedList<P, S> {
    /// Parse `(separator item)*` after the first item, pushing each item
    fn parse_rest<'code>(
        &self,
        input: &'code str,
        mut state: ParseState,
        results: &mut Vec<P::Output>,
    ) -> Reply<()>
    where
        P: Parser<'code>,
        S: Parser<'code>,
    {
        loop {
            let before = state.clone();
            let start = before.index();
            let after_separator = match self.separator.parse(input, state)? {
                Outcome::Success { state, .. } => state,
                Outcome::Failure { state: failed } if failed.index() == start => {
                    let state = before.with_expected(failed.expected().clone());
                    return Ok(Outcome::Success { value: (), state });
                }
                Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
            };

            match self.parser.parse(input, after_separator)? {
                Outcome::Success { value, state: next } => {
                    ensure_progress(start, &next)?;
                    results.push(value);
                    state = next;
                }
                Outcome::Failure { state: failed } if failed.index() == start => {
                    let state = before.with_expected(failed.expected().clone());
                    return Ok(Outcome::Success { value: (), state });
                }
                Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
            }
        }
    }
}

/// Creates a parser that matches zero or more items separated by the given parser
pub fn sep_by<'code, P, S>(parser: P, separator: S) -> SeparatedList<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

/// Extension trait to add .sep_by() and .sep_by1() method support for parsers
pub trait SepByExt<'code>: Parser<'code> + Sized {
    fn sep_by<S>(self, separator: S) -> SeparatedList<Self, S>
    where
        S: Parser<'code>,
    {
        SeparatedList::new(self, separator)
    }

    fn sep_by1<S>(self, separator: S) -> SeparatedList<Self, S>
    where
        S: Parser<'code>,
    {
        SeparatedList::non_empty(self, separator)
    }
}

/// Implement SepByExt for all parsers
impl<'code, P> SepByExt<'code> for P where P: Parser<'code> {}
