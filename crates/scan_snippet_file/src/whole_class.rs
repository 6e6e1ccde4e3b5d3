// crates/scan_snippet_file/src/whole_class.rs

use std::path::Path;

use bold_keywords::ImportMap;
use lang_support::{declaration_name, for_path, qualify};
use snippet_diagnostics::Reporter;
use snippet_markers::{parse_marker, Close};
use snippet_region::{Bolding, RegionBuilder, Snippet};

use crate::ScanContext;

/// Publishes the whole body of a documented-language file when its fully
/// qualified name matches one of the configured class patterns.
///
/// The body starts after the last package or import declaration; leading
/// blank lines and region marker lines are left out.
pub(crate) fn class_snippet(
    path: &Path,
    content: &str,
    package: Option<&str>,
    ctx: &ScanContext<'_>,
    reporter: &mut dyn Reporter,
) -> Option<(String, Snippet)> {
    if ctx.options.snippet_classes.is_empty() {
        return None;
    }
    let lang = for_path(path)?;
    let qualified = qualify(package, declaration_name(path)?);
    if !ctx.options.snippet_classes.iter().any(|p| p.matches(&qualified)) {
        return None;
    }

    let mut imports = ImportMap::seeded(ctx.index);
    let mut body_start = 0;
    for (i, line) in content.lines().enumerate() {
        if lang.parse_package(line).is_some() {
            body_start = i + 1;
        } else if let Some(import) = lang.parse_import(line) {
            imports.add(import);
            body_start = i + 1;
        }
    }

    let mut builder = RegionBuilder::new(path, &qualified);
    let body = content
        .lines()
        .enumerate()
        .skip(body_start)
        .skip_while(|(_, line)| line.trim().is_empty())
        .filter(|(_, line)| parse_marker(line).is_none());
    for (i, line) in body {
        builder.append(i + 1, line);
    }

    let bolding = Bolding { lang, imports: &imports, known: ctx.known };
    log::debug!("publishing {} as a whole-class snippet", qualified);
    let snippet = builder.finish(Close::End, &ctx.options.finalize, Some(bolding), reporter);
    Some((qualified, snippet))
}
