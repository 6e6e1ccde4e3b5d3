// crates/snippet_diagnostics/src/lib.rs

//! The diagnostic channel every stage reports through.
//!
//! Nothing in the snippet engine aborts: structural mistakes, missing
//! snippets and unreadable files all become a [`Diagnostic`] handed to a
//! caller-supplied [`Reporter`], and processing carries on.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a diagnostic originates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePosition {
    pub path: PathBuf,
    /// 1-based line number, when known.
    pub line: Option<usize>,
}

impl SourcePosition {
    pub fn file(path: &Path) -> Self {
        Self { path: path.to_path_buf(), line: None }
    }

    pub fn line(path: &Path, line: usize) -> Self {
        Self { path: path.to_path_buf(), line: Some(line) }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path.display(), line),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub position: Option<SourcePosition>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.position {
            Some(pos) => write!(f, "{}: {}: {}", pos, label, self.message),
            None => write!(f, "{}: {}", label, self.message),
        }
    }
}

/// Sink for warnings and errors.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);

    fn warning(&mut self, position: Option<SourcePosition>, message: String) {
        self.report(Diagnostic { severity: Severity::Warning, position, message });
    }

    fn error(&mut self, position: Option<SourcePosition>, message: String) {
        self.report(Diagnostic { severity: Severity::Error, position, message });
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let prefix = diagnostic
            .position
            .as_ref()
            .map(|p| format!("{}: ", p))
            .unwrap_or_default();
        match diagnostic.severity {
            Severity::Warning => log::warn!("{}{}", prefix, diagnostic.message),
            Severity::Error => log::error!("{}{}", prefix, diagnostic.message),
        }
    }
}

/// Keeps every diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::trace!("collected {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
