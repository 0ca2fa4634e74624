use im::{OrdMap, Vector};
use serde_json::Value;
use std::borrow::Cow;

/// Human-readable description of something a parser expected to find
pub type Label = Cow<'static, str>;

/// State threaded through every parse step
///
/// A state is an offset into the input, the labels collected from failures
/// at that offset, and any caller-defined context. States are passed by value;
/// both collections are persistent, so cloning a state at a backtracking
/// point is O(1).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseState {
    /// Byte offset into the input
    index: usize,
    expected: Vector<Label>,
    context: OrdMap<String, Value>,
}

impl ParseState {
    /// Initial state: offset 0, nothing expected, no context
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset into the input this state points at
    pub fn index(&self) -> usize {
        self.index
    }

    /// Labels collected from failures at the current offset, oldest first
    pub fn expected(&self) -> &Vector<Label> {
        &self.expected
    }

    /// Iterate the expected labels as plain strings
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.expected.iter().map(|label| &**label)
    }

    /// Look up a caller-defined context field
    pub fn context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Move to another offset, keeping labels and context
    ///
    /// Used together with `set_state` to reposition a parse by hand. Offsets
    /// past the end of the input or inside a multi-byte character make every
    /// input-reading primitive fail rather than panic.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Set a caller-defined context field
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Remove a caller-defined context field
    pub fn without_context(mut self, key: &str) -> Self {
        self.context.remove(key);
        self
    }

    /// State after a successful match of `len` bytes: error accumulation starts over
    pub(crate) fn advance(mut self, len: usize) -> Self {
        self.index += len;
        self.expected = Vector::new();
        self
    }

    /// State after a failed match: the offset stays, the label is recorded
    pub(crate) fn expecting(mut self, label: Label) -> Self {
        self.expected.push_back(label);
        self
    }

    /// Same offset and context, with the labels of another state at that offset
    pub(crate) fn with_expected(mut self, expected: Vector<Label>) -> Self {
        self.expected = expected;
        self
    }
}
