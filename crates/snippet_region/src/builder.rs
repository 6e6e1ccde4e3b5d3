// crates/snippet_region/src/builder.rs

use std::path::{Path, PathBuf};

use snippet_diagnostics::{Reporter, SourcePosition};
use snippet_markers::Close;

use crate::text_utils::{close_braces, count_char, escape, leading_spaces, strip_indent};
use crate::{Bolding, FinalizeOptions, Snippet};

/// Mutable buffer for one region while it is open.
#[derive(Clone, Debug)]
pub struct RegionBuilder {
    file: PathBuf,
    name: String,
    /// Raw lines with their 1-based line numbers in `file`.
    lines: Vec<(usize, String)>,
    /// Smallest indentation over the non-blank lines; `None` until one is seen.
    min_indent: Option<usize>,
}

impl RegionBuilder {
    pub fn new(file: &Path, name: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            name: name.to_string(),
            lines: Vec::new(),
            min_indent: None,
        }
    }

    pub fn append(&mut self, line_no: usize, line: &str) {
        if let Some(indent) = leading_spaces(line) {
            self.min_indent = Some(self.min_indent.map_or(indent, |min| min.min(indent)));
        }
        self.lines.push((line_no, line.to_string()));
    }

    /// Closes the region: strips the common indentation, checks line length
    /// and brace balance (repairing it first for [`Close::Finish`]), escapes
    /// and, for documented-language files, bolds the text.
    pub fn finish(
        self,
        close: Close,
        options: &FinalizeOptions,
        bolding: Option<Bolding<'_>>,
        reporter: &mut dyn Reporter,
    ) -> Snippet {
        let mut text = self.stripped(options, reporter);

        let open = count_char(&text, '{');
        let end = count_char(&text, '}');
        if close == Close::Finish && open > end {
            close_braces(&mut text, open - end);
        }
        if count_char(&text, '{') != count_char(&text, '}') {
            reporter.error(
                Some(SourcePosition::file(&self.file)),
                format!(
                    "not paired amount of braces in {} (use FINISH: {} to close them)\n{}",
                    self.file.display(),
                    self.name,
                    text
                ),
            );
        }
        let rendered = self.render(&text, options, bolding);
        log::trace!("closed region {} of {}", self.name, self.file.display());
        Snippet::new(self.file, rendered)
    }

    /// Commits a region whose file ended before it was closed. The text is
    /// stripped, escaped and bolded but its braces are left alone.
    pub fn abandon(
        self,
        options: &FinalizeOptions,
        bolding: Option<Bolding<'_>>,
        reporter: &mut dyn Reporter,
    ) -> Snippet {
        let text = self.stripped(options, reporter);
        let rendered = self.render(&text, options, bolding);
        Snippet::new(self.file, rendered)
    }

    fn stripped(&self, options: &FinalizeOptions, reporter: &mut dyn Reporter) -> String {
        let indent = self.min_indent.unwrap_or(0);
        let mut text = String::new();
        let mut too_long = Vec::new();
        for (line_no, line) in &self.lines {
            let line = strip_indent(line, indent);
            if line.chars().count() > options.max_line_length {
                too_long.push(*line_no);
            }
            text.push_str(line);
            text.push('\n');
        }
        for line_no in too_long {
            reporter.error(
                Some(SourcePosition::line(&self.file, line_no)),
                format!(
                    "Line is too long (over {} characters) in: {}\n{}",
                    options.max_line_length,
                    self.file.display(),
                    text
                ),
            );
        }
        text
    }

    fn render(&self, text: &str, options: &FinalizeOptions, bolding: Option<Bolding<'_>>) -> String {
        let escaped = escape(text, options.escape_at);
        match bolding {
            Some(b) => bold_keywords::bold(&escaped, b.lang, b.imports, b.known),
            None => escaped,
        }
    }
}
