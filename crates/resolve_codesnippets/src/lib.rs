// crates/resolve_codesnippets/src/lib.rs

//! Replaces `{@codesnippet id}` tags in documentation comments with the
//! snippet of that name.
//!
//! The host creates one [`CodeSnippets`] per run and hands it every
//! documented element. The first resolution indexes the visible roots and
//! scans all search roots; the resulting table is reused for the rest of
//! the run.
//!
//! ```no_run
//! use resolve_codesnippets::{CodeSnippets, Comment, SearchPath, SnippetConfig};
//! use snippet_diagnostics::LogReporter;
//!
//! let config = SnippetConfig {
//!     search_paths: vec![SearchPath::visible("src/main/java")],
//!     ..SnippetConfig::default()
//! };
//! let mut snippets = CodeSnippets::new(config, LogReporter);
//! let mut comment = Comment::new("Usage: {@codesnippet org.demo.usage}", None);
//! snippets.fix_codesnippets(&mut comment);
//! ```

mod config;
mod element;
mod engine;

pub use config::{SearchPath, SnippetConfig};
pub use element::{Comment, DocElement};
pub use engine::CodeSnippets;
pub use scan_snippet_file::ClassPattern;
