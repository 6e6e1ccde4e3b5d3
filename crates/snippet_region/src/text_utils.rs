// crates/snippet_region/src/text_utils.rs

/// Column of the first non-space character, or `None` for a line that is
/// empty or only spaces.
pub fn leading_spaces(line: &str) -> Option<usize> {
    line.bytes().position(|b| b != b' ')
}

/// Removes up to `indent` leading characters, never reaching past the end
/// of the line.
pub fn strip_indent(line: &str, indent: usize) -> &str {
    // Only spaces can sit in front of `indent`: every non-blank line is at
    // least that deep, and blank lines consist of spaces alone.
    &line[indent.min(line.len())..]
}

/// Replaces the markup characters `&`, `<`, `>` and, when `escape_at` is
/// set, `@`.
pub fn escape(text: &str, escape_at: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '@' if escape_at => out.push_str("&#64;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn count_char(text: &str, ch: char) -> usize {
    text.chars().filter(|c| *c == ch).count()
}

/// Byte offset of the innermost `{` that no later `}` closes.
pub fn innermost_unmatched_open(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().rev() {
        match b {
            b'}' => depth += 1,
            b'{' if depth == 0 => return Some(i),
            b'{' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Appends `missing` closing braces to `text` (which ends with a newline),
/// each on its own line and indented like the line of the brace it closes.
pub fn close_braces(text: &mut String, missing: usize) {
    for _ in 0..missing {
        let indent = match innermost_unmatched_open(text) {
            Some(pos) => {
                let line_start = text[..pos].rfind('\n').map_or(0, |nl| nl + 1);
                leading_spaces(&text[line_start..]).unwrap_or(0)
            }
            None => 0,
        };
        text.push_str(&" ".repeat(indent));
        text.push_str("}\n");
    }
}
