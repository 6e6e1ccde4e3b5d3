// crates/snippet_region/src/lib.rs

//! One open region of one file, and the immutable [`Snippet`] it turns into.
//!
//! Lines are collected with [`RegionBuilder::append`]; closing the region
//! consumes the builder, so a region can only ever be finalized once.

use std::path::{Path, PathBuf};

use bold_keywords::{DeclarationLookup, ImportMap};
use lang_support::LanguageSupport;
use snippet_markers::DEFAULT_MAX_LINE_LENGTH;

pub mod builder;
pub mod text_utils;

pub use builder::RegionBuilder;

/// Knobs applied when a region is finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizeOptions {
    pub max_line_length: usize,
    /// Also escape `@` so the text cannot start a documentation tag.
    pub escape_at: bool,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self { max_line_length: DEFAULT_MAX_LINE_LENGTH, escape_at: false }
    }
}

/// Everything needed to bold a documented-language region.
#[derive(Clone, Copy)]
pub struct Bolding<'a> {
    pub lang: &'a dyn LanguageSupport,
    pub imports: &'a ImportMap,
    pub known: &'a dyn DeclarationLookup,
}

/// Finalized, escaped text of one region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    source: PathBuf,
    text: String,
}

impl Snippet {
    pub fn new(source: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { source: source.into(), text: text.into() }
    }

    /// File the region was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
