// crates/collect_snippets/src/lib.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scan_snippet_file::{scan_file, ScanContext};
use snippet_diagnostics::{Reporter, SourcePosition};
use snippet_region::Snippet;
use walkdir::WalkDir;

/// Every snippet found under the search roots, keyed by region name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnippetTable {
    snippets: BTreeMap<String, Snippet>,
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `snippet`; a snippet of the same name from an earlier file is
    /// replaced.
    pub fn insert(&mut self, id: String, snippet: Snippet) {
        if let Some(previous) = self.snippets.get(&id) {
            log::debug!(
                "snippet {} from {} replaces the one from {}",
                id,
                snippet.source().display(),
                previous.source().display()
            );
        }
        self.snippets.insert(id, snippet);
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.get(id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Snippet)> {
        self.snippets.iter().map(|(id, s)| (id.as_str(), s))
    }
}

/// Scans every regular file under every root, in order, and merges what
/// each file defines into one table.
///
/// A root that is not a directory is a warning. A directory that cannot be
/// traversed is an error and its subtree is skipped; the rest of the walk
/// goes on.
pub fn collect_snippets(
    roots: &[PathBuf],
    ctx: &ScanContext<'_>,
    reporter: &mut dyn Reporter,
) -> SnippetTable {
    let mut table = SnippetTable::new();
    for root in roots {
        if !root.is_dir() {
            reporter.warning(None, format!("Cannot scan {} not a directory!", root.display()));
            continue;
        }
        log::debug!("scanning {} for snippets", root.display());
        scan_dir(root, ctx, &mut table, reporter);
    }
    log::debug!("collected {} snippet(s)", table.len());
    table
}

fn scan_dir(
    root: &Path,
    ctx: &ScanContext<'_>,
    table: &mut SnippetTable,
    reporter: &mut dyn Reporter,
) {
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let position = err.path().map(SourcePosition::file);
                reporter.error(position, format!("Cannot read {}: {}", root.display(), err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        for (id, snippet) in scan_file(entry.path(), ctx, reporter) {
            table.insert(id, snippet);
        }
    }
}
