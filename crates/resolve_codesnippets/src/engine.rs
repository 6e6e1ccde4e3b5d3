// crates/resolve_codesnippets/src/engine.rs

use bold_keywords::KnownDeclarations;
use build_xref_index::build_xref_index;
use collect_snippets::{collect_snippets, SnippetTable};
use lang_support::documented_language;
use scan_snippet_file::ScanContext;
use snippet_diagnostics::{Reporter, SourcePosition};
use snippet_markers::find_tag;

use crate::config::SnippetConfig;
use crate::element::DocElement;

/// Lazily built snippet table plus the reporter every diagnostic goes to.
pub struct CodeSnippets<R: Reporter> {
    config: SnippetConfig,
    reporter: R,
    table: SnippetTable,
    built: bool,
}

impl<R: Reporter> CodeSnippets<R> {
    pub fn new(config: SnippetConfig, reporter: R) -> Self {
        Self { config, reporter, table: SnippetTable::new(), built: false }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Indexes the visible roots and scans every search root, once. Later
    /// calls do nothing.
    pub fn ensure_built(&mut self) {
        if self.built {
            return;
        }
        self.table = self.build();
        self.built = true;
    }

    pub fn snippets(&mut self) -> &SnippetTable {
        self.ensure_built();
        &self.table
    }

    fn build(&mut self) -> SnippetTable {
        let lang = documented_language();
        let index = build_xref_index(&self.config.visible_roots(), &mut self.reporter);
        let known = KnownDeclarations::new(lang, &index);
        let options = self.config.scan_options();
        let ctx = ScanContext { options: &options, index: &index, known: &known };

        let table = collect_snippets(&self.config.search_roots(), &ctx, &mut self.reporter);
        log::debug!(
            "snippet table ready: {} snippet(s), {} indexed declaration(s)",
            table.len(),
            index.len()
        );
        table
    }

    /// Rendered text of snippet `id`. A missing id is warned about at
    /// `position` and yields a visible placeholder instead.
    pub fn find_snippet(&mut self, id: &str, position: Option<SourcePosition>) -> String {
        let found = self.snippets().get(id).map(|s| s.text().to_string());
        match found {
            Some(text) => text,
            None => {
                let message = format!("Snippet '{}' not found.", id);
                self.reporter.warning(position, message.clone());
                message
            }
        }
    }

    /// Replacement for one `{@codesnippet id}` tag.
    pub fn resolve(&mut self, id: &str, position: Option<SourcePosition>) -> String {
        format!("<pre>{}</pre>", self.find_snippet(id, position))
    }

    /// Substitutes every tag in `comment`, left to right.
    ///
    /// Scanning resumes after each replacement instead of restarting from the
    /// top, so a tag that appears inside inserted snippet text stays literal.
    /// Every tag of the original comment is still replaced, and a snippet
    /// that quotes its own tag cannot expand forever.
    pub fn expand(&mut self, comment: &str, position: Option<SourcePosition>) -> String {
        let mut text = comment.to_string();
        let mut from = 0;
        while let Some(tag) = find_tag(&text, from) {
            let replacement = self.resolve(&tag.id, position.clone());
            log::trace!("replacing {{@codesnippet {}}} at byte {}", tag.id, tag.start);
            text.replace_range(tag.start..tag.end, &replacement);
            from = tag.start + replacement.len();
        }
        text
    }

    /// Rewrites the comment of `element` in place. Comments without tags are
    /// left untouched and never trigger a scan.
    pub fn fix_codesnippets(&mut self, element: &mut dyn DocElement) {
        if find_tag(element.raw_comment(), 0).is_none() {
            return;
        }
        let position = element.position();
        let text = self.expand(element.raw_comment(), position);
        element.set_raw_comment(text);
    }
}
