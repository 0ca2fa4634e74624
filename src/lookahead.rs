use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that checks what follows without consuming it
///
/// On success the value is kept and the state is restored to where the
/// lookahead started. On failure nothing is consumed either: a failure that
/// had consumed input is reported at the starting state, a failure that had
/// not is reported at the starting state with its expected labels.
#[derive(Debug, Clone)]
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let start = state.clone();
        match self.parser.parse(input, state)? {
            Outcome::Success { value, .. } => Ok(Outcome::Success {
                value,
                state: start,
            }),
            Outcome::Failure { state: failed } if failed.index() == start.index() => {
                let expected = failed.expected().clone();
                Ok(Outcome::Failure {
                    state: start.with_expected(expected),
                })
            }
            Outcome::Failure { .. } => Ok(Outcome::Failure { state: start }),
        }
    }
}

/// Extension trait to add .lookahead() method support for parsers
pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainExt;
    use crate::get_state::set_state;
    use crate::or::OrExt;
    use crate::run::run;
    use crate::seq::seq;
    use crate::then::ThenExt;
    use crate::utf8::string;

    #[test]
    fn test_lookahead_consumes_nothing() {
        let parsed = run(&string("ab").lookahead(), "abc").unwrap();
        assert_eq!(parsed.value, "ab");
        assert_eq!(parsed.consumed, "");
        assert_eq!(parsed.remaining, "abc");
    }

    #[test]
    fn test_lookahead_then_parse() {
        let parser = string("a").lookahead().then(string("abc"));
        let parsed = run(&parser, "abc").unwrap();
        assert_eq!(parsed.value, "abc");
        assert_eq!(parsed.remaining, "");
    }

    #[test]
    fn test_lookahead_failure_without_progress() {
        let error = run(&string("x").lookahead(), "abc").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 0);
        assert_eq!(failure.expected, vec!["x"]);
    }

    #[test]
    fn test_failed_lookahead_restores_starting_context() {
        let marked = set_state(ParseState::new().with_context("peeked", true))
            .chain(|()| string("x"));
        let start = ParseState::new().with_context("peeked", false);
        let outcome = marked.lookahead().parse("y", start).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(
            outcome.state().context("peeked").and_then(|value| value.as_bool()),
            Some(false)
        );
        assert_eq!(outcome.state().labels().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_lookahead_failure_after_progress_is_rewound() {
        let parser = seq((string("a"), string("b"))).lookahead();
        let outcome = parser.parse("ax", ParseState::new()).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.state().index(), 0);
    }

    #[test]
    fn test_rewound_lookahead_lets_or_continue() {
        let parser = seq(vec![string("a"), string("b")])
            .lookahead()
            .or(seq(vec![string("a"), string("c")]));
        let parsed = run(&parser, "ac").unwrap();
        assert_eq!(parsed.value, vec!["a", "c"]);
    }
}
