// crates/build_xref_index/src/lib.rs

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use lang_support::{declaration_name, for_path, qualify};
use snippet_diagnostics::{Reporter, SourcePosition};
use walkdir::WalkDir;

/// Simple name → fully qualified name of every top-level declaration found
/// under the visible roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XrefIndex {
    names: BTreeMap<String, String>,
}

impl XrefIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `simple` → `qualified`. A later registration of the same
    /// simple name replaces the earlier one.
    pub fn insert(&mut self, simple: impl Into<String>, qualified: impl Into<String>) {
        let simple = simple.into();
        let qualified = qualified.into();
        if let Some(previous) = self.names.insert(simple.clone(), qualified.clone()) {
            if previous != qualified {
                log::debug!("{} now resolves to {} instead of {}", simple, qualified, previous);
            }
        }
    }

    pub fn get(&self, simple: &str) -> Option<&str> {
        self.names.get(simple).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The mapping itself, used to seed per-file import maps.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Every fully qualified name in the index.
    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }
}

/// Walks every visible root and indexes the top-level declaration of each
/// documented-language file.
///
/// Roots that are not directories and subtrees that cannot be traversed are
/// reported and skipped.
pub fn build_xref_index(visible_roots: &[PathBuf], reporter: &mut dyn Reporter) -> XrefIndex {
    let mut index = XrefIndex::new();
    for root in visible_roots {
        if !root.is_dir() {
            reporter.warning(None, format!("Cannot index {} not a directory!", root.display()));
            continue;
        }
        index_root(root, &mut index, reporter);
    }
    log::debug!("cross-reference index holds {} declaration(s)", index.len());
    index
}

fn index_root(root: &Path, index: &mut XrefIndex, reporter: &mut dyn Reporter) {
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
        let path = entry.path();
        let Some(lang) = for_path(path) else {
            continue;
        };
        // `package-info` and `module-info` are not types
        let Some(name) = declaration_name(path).filter(|n| !n.contains('-')) else {
            continue;
        };
        let package = match read_package(path, |line| lang.parse_package(line)) {
            Ok(package) => package,
            Err(err) => {
                log::debug!("skipping {} for the index: {}", path.display(), err);
                continue;
            }
        };
        index.insert(name, qualify(package.as_deref(), name));
    }
}

/// Returns the first package declaration of the file, reading no further.
fn read_package(
    path: &Path,
    parse: impl Fn(&str) -> Option<String>,
) -> std::io::Result<Option<String>> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        if let Some(package) = parse(&line?) {
            return Ok(Some(package));
        }
    }
    Ok(None)
}
