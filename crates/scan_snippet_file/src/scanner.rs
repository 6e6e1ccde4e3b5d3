// crates/scan_snippet_file/src/scanner.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bold_keywords::{DeclarationLookup, ImportMap};
use lang_support::{for_path, LanguageSupport};
use snippet_diagnostics::{Reporter, SourcePosition};
use snippet_markers::{parse_marker, Close, Marker};
use snippet_region::{Bolding, RegionBuilder, Snippet};

use crate::ScanContext;

enum RegionState {
    Open { builder: RegionBuilder, opened_at: usize },
    Closed(Snippet),
}

/// Line-by-line state of one file.
pub struct FileScanner<'a> {
    path: PathBuf,
    ctx: ScanContext<'a>,
    lang: Option<&'static dyn LanguageSupport>,
    imports: ImportMap,
    package: Option<String>,
    regions: BTreeMap<String, RegionState>,
    line_no: usize,
}

impl<'a> FileScanner<'a> {
    pub fn new(path: &Path, ctx: ScanContext<'a>) -> Self {
        let lang = for_path(path);
        let imports = match lang {
            Some(_) => ImportMap::seeded(ctx.index),
            None => ImportMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            ctx,
            lang,
            imports,
            package: None,
            regions: BTreeMap::new(),
            line_no: 0,
        }
    }

    /// Processes the next line of the file.
    pub fn feed(&mut self, line: &str, reporter: &mut dyn Reporter) {
        self.line_no += 1;
        if let Some(lang) = self.lang {
            if let Some(package) = lang.parse_package(line) {
                self.package = Some(package);
            } else if let Some(import) = lang.parse_import(line) {
                self.imports.add(import);
            }
        }

        match parse_marker(line) {
            Some(Marker::Begin(name)) => self.begin(name, reporter),
            Some(Marker::Close(name, close)) => self.close(name, close, reporter),
            None => {
                for state in self.regions.values_mut() {
                    if let RegionState::Open { builder, .. } = state {
                        builder.append(self.line_no, line);
                    }
                }
            }
        }
    }

    /// Ends the file: regions still open are reported and committed as they
    /// are. Returns the snippets and the declared package, if any.
    pub fn finish(self, reporter: &mut dyn Reporter) -> (BTreeMap<String, Snippet>, Option<String>) {
        let bolding = bolding_for(self.lang, &self.imports, self.ctx.known);
        let mut snippets = BTreeMap::new();
        for (name, state) in self.regions {
            let snippet = match state {
                RegionState::Closed(snippet) => snippet,
                RegionState::Open { builder, opened_at } => {
                    reporter.error(
                        Some(SourcePosition::line(&self.path, opened_at)),
                        format!("Not closed section {} in {}", name, self.path.display()),
                    );
                    builder.abandon(&self.ctx.options.finalize, bolding, reporter)
                }
            };
            snippets.insert(name, snippet);
        }
        (snippets, self.package)
    }

    fn begin(&mut self, name: &str, reporter: &mut dyn Reporter) {
        let state = RegionState::Open {
            builder: RegionBuilder::new(&self.path, name),
            opened_at: self.line_no,
        };
        if self.regions.insert(name.to_string(), state).is_some() {
            reporter.error(
                Some(self.position()),
                format!("Same pattern is there twice: {} in {}", name, self.path.display()),
            );
        }
    }

    fn close(&mut self, name: &str, close: Close, reporter: &mut dyn Reporter) {
        match self.regions.remove(name) {
            Some(RegionState::Open { builder, .. }) => {
                let bolding = bolding_for(self.lang, &self.imports, self.ctx.known);
                let snippet = builder.finish(close, &self.ctx.options.finalize, bolding, reporter);
                self.regions.insert(name.to_string(), RegionState::Closed(snippet));
            }
            Some(closed) => {
                reporter.error(
                    Some(self.position()),
                    format!("Closing not opened section: {} in {}", name, self.path.display()),
                );
                self.regions.insert(name.to_string(), closed);
            }
            None => {
                reporter.error(
                    Some(self.position()),
                    format!("Closing unknown section: {} in {}", name, self.path.display()),
                );
            }
        }
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::line(&self.path, self.line_no)
    }
}

fn bolding_for<'b>(
    lang: Option<&'static dyn LanguageSupport>,
    imports: &'b ImportMap,
    known: &'b dyn DeclarationLookup,
) -> Option<Bolding<'b>> {
    lang.map(|lang| Bolding { lang, imports, known })
}
