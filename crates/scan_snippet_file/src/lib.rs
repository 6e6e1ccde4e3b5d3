// crates/scan_snippet_file/src/lib.rs

//! Turns one source file into the snippets it defines.
//!
//! Each line is checked for a BEGIN marker, then for an END/FINISH marker;
//! any other line is appended to every region currently open in the file,
//! so regions may nest and overlap. Files of the documented language also
//! have their package and import declarations recorded, which drive the
//! cross-references added when their regions are finalized.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use bold_keywords::DeclarationLookup;
use build_xref_index::XrefIndex;
use regex::Regex;
use snippet_diagnostics::{Reporter, SourcePosition};
use snippet_region::{FinalizeOptions, Snippet};

mod scanner;
mod whole_class;

pub use scanner::FileScanner;

/// Settings shared by every file of one scan.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    pub finalize: FinalizeOptions,
    /// Documented-language classes whose fully qualified name matches one of
    /// these are also published whole, keyed by that name.
    pub snippet_classes: Vec<ClassPattern>,
}

/// A regex that selects a class only when it matches the entire fully
/// qualified name.
#[derive(Clone, Debug)]
pub struct ClassPattern {
    source: String,
    anchored: Regex,
}

impl ClassPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self { source: pattern.to_string(), anchored })
    }

    /// The pattern as written, without the anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, qualified: &str) -> bool {
        self.anchored.is_match(qualified)
    }
}

/// What a file scan reads but never modifies.
#[derive(Clone, Copy)]
pub struct ScanContext<'a> {
    pub options: &'a ScanOptions,
    pub index: &'a XrefIndex,
    pub known: &'a dyn DeclarationLookup,
}

/// Reads `path` and scans it. Binary content is a warning, any other read
/// failure an error; both yield no snippets.
pub fn scan_file(
    path: &Path,
    ctx: &ScanContext<'_>,
    reporter: &mut dyn Reporter,
) -> BTreeMap<String, Snippet> {
    match fs::read_to_string(path) {
        Ok(content) => scan_source(path, &content, ctx, reporter),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            reporter.warning(
                Some(SourcePosition::file(path)),
                format!("Skipping {}: not a text file", path.display()),
            );
            BTreeMap::new()
        }
        Err(err) => {
            reporter.error(
                Some(SourcePosition::file(path)),
                format!("Cannot read {} {}", path.display(), err),
            );
            BTreeMap::new()
        }
    }
}

/// Scans already loaded `content` as if it had been read from `path`.
pub fn scan_source(
    path: &Path,
    content: &str,
    ctx: &ScanContext<'_>,
    reporter: &mut dyn Reporter,
) -> BTreeMap<String, Snippet> {
    let mut scanner = FileScanner::new(path, *ctx);
    for line in content.lines() {
        scanner.feed(line, reporter);
    }
    let (mut snippets, package) = scanner.finish(reporter);

    if let Some((id, snippet)) = whole_class::class_snippet(path, content, package.as_deref(), ctx, reporter) {
        snippets.insert(id, snippet);
    }
    log::trace!("{} snippet(s) in {}", snippets.len(), path.display());
    snippets
}
