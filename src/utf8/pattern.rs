use crate::error::GrammarError;
use crate::outcome::{Outcome, Reply};
use crate::parser::Parser;
use crate::state::{Label, ParseState};
use regex::Regex;
use std::borrow::Cow;

/// Parser that matches a regular expression anchored at the current offset
///
/// The value is the matched slice of the input. Shares the success and
/// failure contract of [`Literal`](crate::utf8::string::Literal), recording
/// its label (by default `/pattern/`) on failure.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    label: Label,
}

impl Pattern {
    /// Compile `pattern` so that it only matches at the start of the remaining input
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
            GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            regex,
            label: Cow::Owned(format!("/{pattern}/")),
        })
    }

    /// Replace the label reported when the pattern does not match
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        let found = input
            .get(state.index()..)
            .and_then(|rest| self.regex.find(rest));

        match found {
            Some(m) => Ok(Outcome::Success {
                value: m.as_str(),
                state: state.advance(m.len()),
            }),
            None => Ok(Outcome::Failure {
                state: state.expecting(self.label.clone()),
            }),
        }
    }
}

/// Convenience function to create a Pattern parser
///
/// # Example
/// ```
/// use pegcomb::prelude::*;
///
/// let word = regexp(r"[a-z]+").unwrap().with_label("word");
/// let parsed = word.run("hello world").unwrap();
/// assert_eq!(parsed.value, "hello");
/// assert_eq!(parsed.remaining, " world");
/// ```
pub fn regexp(pattern: &str) -> Result<Pattern, GrammarError> {
    Pattern::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::run;

    #[test]
    fn test_match_at_start() {
        let parsed = run(&regexp(r"\d+").unwrap(), "123abc").unwrap();
        assert_eq!(parsed.value, "123");
        assert_eq!(parsed.remaining, "abc");
    }

    #[test]
    fn test_does_not_search_ahead() {
        let error = run(&regexp(r"\d+").unwrap(), "abc123").unwrap_err();
        let failure = error.failure().unwrap();

        assert_eq!(failure.index, 0);
        assert_eq!(failure.expected, vec![r"/\d+/"]);
    }

    #[test]
    fn test_anchors_alternation() {
        // Without grouping, `^a|b` would match a `b` anywhere
        let error = run(&regexp("a|b").unwrap(), "xb").unwrap_err();
        assert_eq!(error.failure().unwrap().index, 0);
    }

    #[test]
    fn test_custom_label() {
        let cword = regexp(r"\\[a-zA-Z]+").unwrap().with_label("cword");
        let error = run(&cword, "plain").unwrap_err();
        assert_eq!(error.failure().unwrap().expected, vec!["cword"]);
    }

    #[test]
    fn test_match_from_middle_of_input() {
        let state = ParseState::new().with_index(3);
        let outcome = regexp("[a-z]+").unwrap().parse("123abc", state).unwrap();

        assert_eq!(outcome.value(), Some(&"abc"));
        assert_eq!(outcome.state().index(), 6);
    }

    #[test]
    fn test_success_clears_expected() {
        let state = ParseState::new().expecting("x".into());
        let outcome = regexp("a").unwrap().parse("a", state).unwrap();
        assert_eq!(outcome.state().labels().count(), 0);
    }

    #[test]
    fn test_invalid_pattern() {
        let error = regexp("(unclosed").unwrap_err();
        assert!(matches!(
            error,
            GrammarError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"
        ));
    }
}
