// crates/snippet_markers/src/lib.rs

//! Marker syntax shared by the scanner and the resolver.
//!
//!  * **Region markers** live in ordinary source comments:
//!    `// BEGIN: name`, `// END: name`, `// FINISH: name`.  Any prefix is
//!    allowed before the keyword, so `<!-- BEGIN: name -->` works too.
//!  * **Reference tags** live in documentation comments:
//!    `{@codesnippet name}`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default maximum rendered line length of a snippet.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

// ---------------------------------------------------------------------------
//  Regexes
// ---------------------------------------------------------------------------

static BEGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.* BEGIN: *([[:graph:]]+)[->\x20]*$").unwrap());

static END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.* (END|FINISH): *([[:graph:]]+)[->\x20]*$").unwrap());

/// `{@codesnippet id}` where `id` is letters, digits, `.`, `-` or `#`.
pub static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{ *@codesnippet *([.\-a-zA-Z0-9#]*) *\}").unwrap());

// ---------------------------------------------------------------------------
//  Line classification
// ---------------------------------------------------------------------------

/// How a region was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Close {
    /// `END:` – plain terminator.
    End,
    /// `FINISH:` – terminator that also appends missing closing braces.
    Finish,
}

/// A marker recognised on one line of source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker<'a> {
    Begin(&'a str),
    Close(&'a str, Close),
}

/// Classifies `line` as a BEGIN marker, an END/FINISH marker, or neither.
/// BEGIN is checked first.
pub fn parse_marker(line: &str) -> Option<Marker<'_>> {
    if let Some(cap) = BEGIN_RE.captures(line) {
        return cap.get(1).map(|m| Marker::Begin(m.as_str()));
    }
    let cap = END_RE.captures(line)?;
    let close = if &cap[1] == "FINISH" { Close::Finish } else { Close::End };
    cap.get(2).map(|m| Marker::Close(m.as_str(), close))
}

/// A reference tag located in a comment, as a byte span plus the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatch {
    pub start: usize,
    pub end: usize,
    pub id: String,
}

/// Finds the first `{@codesnippet ..}` tag at or after byte offset `from`.
pub fn find_tag(text: &str, from: usize) -> Option<TagMatch> {
    let cap = TAG_RE.captures_at(text, from)?;
    let whole = cap.get(0)?;
    Some(TagMatch {
        start: whole.start(),
        end: whole.end(),
        id: cap[1].to_string(),
    })
}
