use crate::outcome::Reply;
use crate::parser::Parser;
use crate::stack::ensure_sufficient_stack;
use crate::state::ParseState;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// This is how a grammar refers to itself: a rule built from `lazy(rule)`
/// does not call `rule` while it is being constructed, only when input
/// reaches that point. Each invocation runs with enough stack reserved for
/// deeply nested input.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        ensure_sufficient_stack(|| (self.factory)().parse(input, state))
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::many::ManyExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::run::run;
    use crate::then::ThenExt;
    use crate::utf8::string;
    use std::cell::Cell;

    /// `nested := "(" nested ")" | ""`, returns the nesting depth
    fn nested<'code>() -> BoxedParser<'code, usize> {
        string("(")
            .then(lazy(nested))
            .skip(string(")"))
            .map(|depth| depth + 1)
            .fallback(0)
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| string("a"));
        let parsed = run(&parser, "aaaa").unwrap();

        assert_eq!(parsed.value, "a");
        assert_eq!(parsed.state.index(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let parser = lazy(|| string("a").many());
        let parsed = run(&parser, "aaaa").unwrap();
        assert_eq!(parsed.value.len(), 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let parser = lazy(|| {
            built.set(built.get() + 1);
            string("x")
        });
        assert_eq!(built.get(), 0);

        run(&parser, "xyz").unwrap();
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_recursive_grammar() {
        let parsed = run(&nested(), "((()))rest").unwrap();
        assert_eq!(parsed.value, 3);
        assert_eq!(parsed.remaining, "rest");
    }

    #[test]
    fn test_recursive_grammar_unbalanced() {
        let error = run(&nested(), "(()").unwrap_err();
        let failure = error.failure().unwrap();
        assert_eq!(failure.index, 3);
        assert!(failure.expected.contains(&")".to_string()));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 20_000;
        let input = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        let parsed = run(&nested(), &input).unwrap();
        assert_eq!(parsed.value, depth);
    }
}
