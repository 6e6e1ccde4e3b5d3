// crates/codesnippet/src/lib.rs

//! Command-line host for the snippet engine.
//!
//! Each input file is handled as one documentation comment: its
//! `{@codesnippet id}` tags are resolved against the configured search
//! paths and the result is printed, or written back with `--in-place`.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use resolve_codesnippets::{CodeSnippets, Comment};
use snippet_diagnostics::{CollectingReporter, Diagnostic, LogReporter, Reporter, SourcePosition};

pub mod config;

use config::AppConfig;

/// Logs every diagnostic and keeps a copy for the exit status.
#[derive(Debug, Default)]
pub struct CliReporter {
    log: LogReporter,
    collected: CollectingReporter,
}

impl CliReporter {
    pub fn collected(&self) -> &CollectingReporter {
        &self.collected
    }
}

impl Reporter for CliReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.log.report(diagnostic.clone());
        self.collected.report(diagnostic);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub rewritten: usize,
    pub warnings: usize,
    pub errors: usize,
}

/// Resolves the tags of every configured file. Output goes to `out` unless
/// the config asks for in-place rewriting.
pub fn run(config: &AppConfig, out: &mut dyn Write) -> Result<RunSummary> {
    let inputs = config
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
                .map(|text| (path.as_path(), text))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut engine = CodeSnippets::new(config.snippets.clone(), CliReporter::default());
    let mut summary = RunSummary { files: inputs.len(), ..RunSummary::default() };

    for (path, original) in inputs {
        let mut comment = Comment::new(original.as_str(), Some(SourcePosition::file(path)));
        engine.fix_codesnippets(&mut comment);
        let changed = comment.text() != original;
        if changed {
            summary.rewritten += 1;
        }

        if config.in_place {
            if changed {
                write_back(path, comment.text())?;
            }
        } else {
            out.write_all(comment.text().as_bytes())
                .context("Failed to write output")?;
        }
    }

    let collected = engine.reporter().collected();
    summary.warnings = collected.warnings().count();
    summary.errors = collected.errors().count();
    log::debug!(
        "{} file(s), {} rewritten, {} warning(s), {} error(s)",
        summary.files,
        summary.rewritten,
        summary.warnings,
        summary.errors
    );
    Ok(summary)
}

fn write_back(path: &Path, text: &str) -> Result<()> {
    log::info!("rewriting {}", path.display());
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
