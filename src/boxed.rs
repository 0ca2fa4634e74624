use crate::outcome::Reply;
use crate::parser::Parser;
use crate::state::ParseState;
use std::fmt;
use std::sync::Arc;

/// Type-erased, shareable parser
///
/// Recursive rules need a nameable type, and `seq`/`alt` over a `Vec` need
/// every element to have the same type; boxing provides both. Cloning is a
/// reference-count bump, and the parser can be shared across threads.
pub struct BoxedParser<'code, O> {
    inner: Arc<dyn Parser<'code, Output = O> + Send + Sync + 'code>,
}

impl<'code, O> BoxedParser<'code, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = O> + Send + Sync + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<O> Clone for BoxedParser<'_, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O> fmt::Debug for BoxedParser<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

impl<'code, O> Parser<'code> for BoxedParser<'code, O> {
    type Output = O;

    fn parse(&self, input: &'code str, state: ParseState) -> Reply<Self::Output> {
        self.inner.parse(input, state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all thread-safe parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
