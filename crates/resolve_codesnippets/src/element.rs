// crates/resolve_codesnippets/src/element.rs

use snippet_diagnostics::SourcePosition;

/// A documented element as owned by the host toolchain.
pub trait DocElement {
    fn raw_comment(&self) -> &str;

    fn set_raw_comment(&mut self, text: String);

    /// Where missing-snippet warnings point.
    fn position(&self) -> Option<SourcePosition> {
        None
    }
}

/// A free-standing comment, e.g. a whole documentation file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    text: String,
    position: Option<SourcePosition>,
}

impl Comment {
    pub fn new(text: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self { text: text.into(), position }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DocElement for Comment {
    fn raw_comment(&self) -> &str {
        &self.text
    }

    fn set_raw_comment(&mut self, text: String) {
        self.text = text;
    }

    fn position(&self) -> Option<SourcePosition> {
        self.position.clone()
    }
}
