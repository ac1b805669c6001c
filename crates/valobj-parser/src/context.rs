//! Dotted context path tracking during document traversal.

/// A stack of name segments identifying the document position currently
/// being parsed. Rendered as `"<value>/<property>"` in error messages.
#[derive(Debug, Default)]
pub(crate) struct Context {
    segments: Vec<String>,
}

impl Context {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// The dotted path for the current position.
    pub(crate) fn path(&self) -> String {
        self.segments.join("/")
    }
}
