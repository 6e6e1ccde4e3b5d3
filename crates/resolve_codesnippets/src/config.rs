// crates/resolve_codesnippets/src/config.rs

use std::path::PathBuf;

use scan_snippet_file::{ClassPattern, ScanOptions};
use snippet_markers::DEFAULT_MAX_LINE_LENGTH;
use snippet_region::FinalizeOptions;

/// A directory scanned for snippets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPath {
    pub dir: PathBuf,
    /// Also index its top-level declarations for cross-references.
    pub visible: bool,
}

impl SearchPath {
    pub fn snippets_only(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), visible: false }
    }

    pub fn visible(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), visible: true }
    }
}

/// Settings supplied by the host toolchain.
///
/// Version-tag verification and annotation-based hiding belong to the host,
/// so their version string and annotation names are not carried here.
#[derive(Clone, Debug)]
pub struct SnippetConfig {
    /// Scanned in order; a later file wins a snippet name collision.
    pub search_paths: Vec<SearchPath>,
    /// Classes whose whole fully qualified name matches are published whole.
    pub snippet_classes: Vec<ClassPattern>,
    pub max_line_length: usize,
    /// Escape `@` as well, for hosts that re-parse the text for tags.
    pub escape_at: bool,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            snippet_classes: Vec::new(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            escape_at: false,
        }
    }
}

impl SnippetConfig {
    pub fn search_roots(&self) -> Vec<PathBuf> {
        self.search_paths.iter().map(|p| p.dir.clone()).collect()
    }

    pub fn visible_roots(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.dir.clone())
            .collect()
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            finalize: FinalizeOptions {
                max_line_length: self.max_line_length,
                escape_at: self.escape_at,
            },
            snippet_classes: self.snippet_classes.clone(),
        }
    }
}
