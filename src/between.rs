use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content`, then `close`, and returns just the content
/// value with the delimiters discarded. The first failure among the three is
/// reported as is.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"{data}"` → `"data"`
#[derive(Debug, Clone)]
pub struct Between<P, L, R> {
    open: L,
    content: P,
    close: R,
}

impl<P, L, R> Between<P, L, R> {
    pub fn new(open: L, content: P, close: R) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P, L, R> Parser<'code> for Between<P, L, R>
where
    P: Parser<'code>,
    L: Parser<'code>,
    R: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let state = match self.open.parse(input, state)? {
            Outcome::Success { state, .. } => state,
            Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
        };
        let (value, state) = match self.content.parse(input, state)? {
            Outcome::Success { value, state } => (value, state),
            Outcome::Failure { state } => return Ok(Outcome::Failure { state }),
        };
        Ok(self.close.parse(input, state)?.map(|_| value))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P, L, R>(open: L, content: P, close: R) -> Between<P, L, R>
where
    P: Parser<'code>,
    L: Parser<'code>,
    R: Parser<'code>,
{
    Between::new(open, content, close)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt<'code>: Parser<'code> + Sized {
    fn between<L, R>(self, open: L, close: R) -> Between<Self, L, R>
    where
        L: Parser<'code>,
        R: Parser<'code>,
    {
        Between::new(open, self, close)
    }
}

/// Implement BetweenExt for all parsers
impl<'code, P> BetweenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::ManyExt;
    use crate::map::MapExt;
    use crate::run::run;
    use crate::utf8::{none_of, string};

    fn word() -> impl for<'code> Parser<'code, Output = String> {
        none_of("[]{}")
            .at_least(1)
            .map(|cs: Vec<char>| cs.into_iter().collect::<String>())
    }

    #[test]
    fn test_square_brackets() {
        let parser = word().between(string("["), string("]"));
        let parsed = run(&parser, "[content]").unwrap();

        assert_eq!(parsed.value, "content");
        assert_eq!(parsed.remaining, "");
    }

    #[test]
    fn test_function_syntax() {
        let parser = between(string("{"), word(), string("}"));
        let parsed = run(&parser, "{data} tail").unwrap();

        assert_eq!(parsed.value, "data");
        assert_eq!(parsed.remaining, " tail");
    }

    #[test]
    fn test_missing_open() {
        let parser = word().between(string("["), string("]"));
        let error = run(&parser, "content]").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 0);
        assert_eq!(failure.expected, vec!["["]);
    }

    #[test]
    fn test_missing_close() {
        let parser = word().between(string("["), string("]"));
        let error = run(&parser, "[content").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 8);
        assert_eq!(failure.expected, vec!["none of []{}", "]"]);
        assert_eq!(failure.remaining, "");
    }

    #[test]
    fn test_empty_content_fails() {
        let parser = word().between(string("["), string("]"));
        let error = run(&parser, "[]").unwrap_err();
        assert_eq!(error.failure().unwrap().index, 1);
    }
}
