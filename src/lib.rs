//! # PegComb - Parser Combinator Library
//!
//! Composable parsers over `&str` input with ordered choice, opt-in
//! backtracking and labelled failures.
//!
//! A grammar is built once from small parsers and combinators, then run any
//! number of times. Running it threads a [`ParseState`] through the composed
//! parsers and produces one [`Reply`]:
//!
//! - **Ordered choice without implicit backtracking**: `or` and `alt` only try
//!   the next alternative when the previous one failed without consuming
//!   input. Wrap a branch in [`attempt`](AttemptExt::attempt) to allow it.
//! - **Labelled failures**: every failed parse reports the furthest offset
//!   reached and the labels expected there, ready for an
//!   "expected X, Y, or Z at offset N" message.
//! - **Malformed grammars are fatal**: a repetition of a parser that can
//!   succeed without consuming input aborts with a [`GrammarError`] that no
//!   combinator can swallow.
//! - **Zero panics**: library code never indexes out of bounds or unwraps.
//!
//! ```
//! use pegcomb::prelude::*;
//!
//! let item = string("a").or(string("b"));
//! let list = item.sep_by(string(","));
//!
//! let parsed = list.run("a,b,a;").unwrap();
//! assert_eq!(parsed.value, vec!["a", "b", "a"]);
//! assert_eq!(parsed.remaining, ";");
//!
//! let error = string("a").then(string("b")).run("ax").unwrap_err();
//! assert_eq!(error.to_string(), "expected b at offset 1");
//! ```

pub mod alt;
pub mod attempt;
pub mod between;
pub mod boxed;
pub mod chain;
pub mod eof;
pub mod error;
pub mod get_state;
pub mod lazy;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod run;
pub mod separated_list;
pub mod seq;
mod stack;
pub mod state;
pub mod then;
pub mod traced;
pub mod utf8;

pub use attempt::AttemptExt;
pub use boxed::BoxedParser;
pub use error::{GrammarError, ParseFailure, RunError};
pub use outcome::{Outcome, Reply};
pub use parser::Parser;
pub use run::{Parsed, run, run_from};
pub use state::{Label, ParseState};

/// Everything needed to write a grammar, for glob import
pub mod prelude {
    pub use crate::alt::alt;
    pub use crate::attempt::AttemptExt;
    pub use crate::between::{BetweenExt, between};
    pub use crate::boxed::{BoxedExt, BoxedParser};
    pub use crate::chain::{ChainExt, chain};
    pub use crate::eof::eof;
    pub use crate::error::{GrammarError, ParseFailure, RunError};
    pub use crate::get_state::{get_state, set_state};
    pub use crate::lazy::lazy;
    pub use crate::lookahead::LookaheadExt;
    pub use crate::many::{ManyExt, many};
    pub use crate::map::{MapExt, map};
    pub use crate::maybe::{MaybeExt, maybe};
    pub use crate::not::{NotExt, not};
    pub use crate::or::{OrExt, or};
    pub use crate::outcome::{Outcome, Reply};
    pub use crate::parser::Parser;
    pub use crate::pure::{FAIL, ZERO, fail, pure};
    pub use crate::run::{Parsed, RunExt, run, run_from};
    pub use crate::separated_list::{SepByExt, sep_by};
    pub use crate::seq::seq;
    pub use crate::state::{Label, ParseState};
    pub use crate::then::ThenExt;
    pub use crate::traced::TracedExt;
    pub use crate::utf8::{
        alphanumeric, any_char, digit, digits, letter, letters, none_of, nonletter, one_of,
        regexp, satisfy, spaces, string, take_while1, unicode_digit, whitespace,
    };
}
