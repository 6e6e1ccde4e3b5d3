//! `lang_support`: rules for the *documented language*, the one whose
//! snippets get keyword bolding and cross-references.
//!
//!  * **Line-oriented only** – the crate knows about source lines, file
//!    paths and `regex`; nothing is parsed into an AST.
//!  * **One trait** – `LanguageSupport` – implemented once per language.
//!    Java is the documented language today; adding another means adding a
//!    single file in this crate.
//!  * **Thin adapter API** – other crates call `lang_support::for_path()`
//!    and forward the work.

use std::path::Path;

/// One import declaration recognised on a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Import {
    /// `import a.b.C;` – `simple` is `C`, `qualified` is `a.b.C`.
    Single { simple: String, qualified: String },
    /// `import a.b.*;` – the open package `a.b`.
    Wildcard(String),
}

/// What the snippet engine needs from a language.
pub trait LanguageSupport: Sync + Send {
    /// `true` for words rendered in bold.
    fn is_reserved(&self, word: &str) -> bool;

    /// Package every source file sees without importing it.
    fn core_package(&self) -> &'static str;

    /// Package name declared on `line`, if any.
    fn parse_package(&self, line: &str) -> Option<String>;

    /// Import declared on `line`, if any.
    fn parse_import(&self, line: &str) -> Option<Import>;

    /// Fully qualified names known to exist without scanning any sources.
    fn well_known_declarations(&self) -> &'static [&'static str];
}

/// Returns the [`LanguageSupport`] matching the file extension.
/// Extensions are matched case‑insensitively.
pub fn for_extension(ext: &str) -> Option<&'static dyn LanguageSupport> {
    match ext.to_lowercase().as_str() {
        "java" => Some(&java::JAVA),
        _ => None,
    }
}

/// The language whose snippets are bolded and cross-referenced.
pub fn documented_language() -> &'static dyn LanguageSupport {
    &java::JAVA
}

/// Returns the [`LanguageSupport`] for `path`, or `None` when the file is
/// not written in the documented language.
pub fn for_path(path: &Path) -> Option<&'static dyn LanguageSupport> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(for_extension)
}

/// Base name of `path` without its extension, e.g. `Demo` for `a/Demo.java`.
pub fn declaration_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Joins a package and a simple name; the default package has no prefix.
pub fn qualify(package: Option<&str>, name: &str) -> String {
    match package {
        Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, name),
        _ => name.to_string(),
    }
}

mod java;
