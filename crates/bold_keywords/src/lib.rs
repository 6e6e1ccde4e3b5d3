// crates/bold_keywords/src/lib.rs

//! Post-processing of escaped snippet text written in the documented
//! language: reserved words become `<b>word</b>` and identifiers that name a
//! known declaration become `{@link package.Name Name}`.

use std::collections::{BTreeMap, BTreeSet};

use build_xref_index::XrefIndex;
use lang_support::{Import, LanguageSupport};
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*").unwrap());

// ---------------------------------------------------------------------------
//  Per-file imports
// ---------------------------------------------------------------------------

/// Names one source file can refer to without qualification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportMap {
    names: BTreeMap<String, String>,
    open_packages: Vec<String>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the global index; the file's own imports are layered on
    /// top with [`ImportMap::add`].
    pub fn seeded(index: &XrefIndex) -> Self {
        Self { names: index.as_map().clone(), open_packages: Vec::new() }
    }

    pub fn add(&mut self, import: Import) {
        match import {
            Import::Single { simple, qualified } => {
                self.names.insert(simple, qualified);
            }
            Import::Wildcard(package) => {
                if !self.open_packages.contains(&package) {
                    self.open_packages.push(package);
                }
            }
        }
    }

    pub fn resolve(&self, simple: &str) -> Option<&str> {
        self.names.get(simple).map(String::as_str)
    }

    /// Wildcard-imported packages in registration order.
    pub fn open_packages(&self) -> &[String] {
        &self.open_packages
    }
}

// ---------------------------------------------------------------------------
//  Declaration lookup
// ---------------------------------------------------------------------------

/// Answers whether a fully qualified name denotes an existing declaration.
pub trait DeclarationLookup {
    fn is_declared(&self, qualified: &str) -> bool;
}

/// The language's well-known declarations plus everything indexed from the
/// visible roots.
#[derive(Clone, Debug, Default)]
pub struct KnownDeclarations {
    names: BTreeSet<String>,
}

impl KnownDeclarations {
    pub fn new(lang: &dyn LanguageSupport, index: &XrefIndex) -> Self {
        let names = lang
            .well_known_declarations()
            .iter()
            .copied()
            .chain(index.qualified_names())
            .map(String::from)
            .collect();
        Self { names }
    }
}

impl DeclarationLookup for KnownDeclarations {
    fn is_declared(&self, qualified: &str) -> bool {
        self.names.contains(qualified)
    }
}

impl DeclarationLookup for BTreeSet<String> {
    fn is_declared(&self, qualified: &str) -> bool {
        self.contains(qualified)
    }
}

// ---------------------------------------------------------------------------
//  Bolding
// ---------------------------------------------------------------------------

/// Rewrites reserved words and resolvable identifiers in already escaped
/// `text`. Resolution order: the file's import map, the core package, then
/// each open package in registration order. Unresolved words are copied
/// unchanged.
pub fn bold(
    text: &str,
    lang: &dyn LanguageSupport,
    imports: &ImportMap,
    known: &dyn DeclarationLookup,
) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last = 0;
    for m in WORD_RE.find_iter(text) {
        let word = m.as_str();
        let prev = text[..m.start()].chars().next_back();
        out.push_str(&text[last..m.start()]);
        last = m.end();

        // tail of a number literal or an entity such as `&lt;`
        if matches!(prev, Some(c) if c.is_ascii_alphanumeric() || c == '&' || c == '#') {
            out.push_str(word);
            continue;
        }
        if lang.is_reserved(word) {
            out.push_str("<b>");
            out.push_str(word);
            out.push_str("</b>");
            continue;
        }
        // member access: `x.Name` is not a type reference
        if prev == Some('.') {
            out.push_str(word);
            continue;
        }
        match resolve(word, lang, imports, known) {
            Some(qualified) => {
                out.push_str("{@link ");
                out.push_str(&qualified);
                out.push(' ');
                out.push_str(word);
                out.push('}');
            }
            None => out.push_str(word),
        }
    }
    out.push_str(&text[last..]);
    out
}

fn resolve(
    word: &str,
    lang: &dyn LanguageSupport,
    imports: &ImportMap,
    known: &dyn DeclarationLookup,
) -> Option<String> {
    if let Some(qualified) = imports.resolve(word) {
        return Some(qualified.to_string());
    }
    std::iter::once(lang.core_package())
        .chain(imports.open_packages().iter().map(String::as_str))
        .map(|package| format!("{}.{}", package, word))
        .find(|candidate| known.is_declared(candidate))
}
