// crates/lang_support/src/java.rs

//! Java, the documented language.
//!
//! * `is_reserved` – keywords plus the `true`/`false`/`null` literals.
//! * `parse_package` / `parse_import` – one regex each; static imports are
//!   member imports and never name a type, so they are ignored.
//! * `well_known_declarations` – the slice of the platform library a
//!   snippet is likely to mention.

use super::{Import, LanguageSupport};
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) struct JavaSupport;
pub(super) const JAVA: JavaSupport = JavaSupport;

// ---------------------------------------------------------------------------
//  Regexes
// ---------------------------------------------------------------------------

static PACKAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*package\s+([\w.]+)\s*;").unwrap());

// `import a.b.C;` and `import a.b.*;`, but not `import static ...;`
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*import\s+(static\s+)?([\w.]+?)(\.\*)?\s*;").unwrap()
});

// Kept sorted: looked up with `binary_search`.
static RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

static WELL_KNOWN: &[&str] = &[
    // java.lang
    "java.lang.AssertionError",
    "java.lang.AutoCloseable",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.CharSequence",
    "java.lang.Character",
    "java.lang.Class",
    "java.lang.ClassCastException",
    "java.lang.ClassLoader",
    "java.lang.ClassNotFoundException",
    "java.lang.CloneNotSupportedException",
    "java.lang.Cloneable",
    "java.lang.Comparable",
    "java.lang.Deprecated",
    "java.lang.Double",
    "java.lang.Enum",
    "java.lang.Error",
    "java.lang.Exception",
    "java.lang.Float",
    "java.lang.FunctionalInterface",
    "java.lang.IllegalArgumentException",
    "java.lang.IllegalStateException",
    "java.lang.IndexOutOfBoundsException",
    "java.lang.Integer",
    "java.lang.InterruptedException",
    "java.lang.Iterable",
    "java.lang.Long",
    "java.lang.Math",
    "java.lang.NullPointerException",
    "java.lang.Number",
    "java.lang.NumberFormatException",
    "java.lang.Object",
    "java.lang.Override",
    "java.lang.Process",
    "java.lang.Runnable",
    "java.lang.Runtime",
    "java.lang.RuntimeException",
    "java.lang.SafeVarargs",
    "java.lang.SecurityException",
    "java.lang.Short",
    "java.lang.String",
    "java.lang.StringBuffer",
    "java.lang.StringBuilder",
    "java.lang.SuppressWarnings",
    "java.lang.System",
    "java.lang.Thread",
    "java.lang.ThreadLocal",
    "java.lang.Throwable",
    "java.lang.UnsupportedOperationException",
    "java.lang.Void",
    // java.util
    "java.util.ArrayList",
    "java.util.Arrays",
    "java.util.Collection",
    "java.util.Collections",
    "java.util.Comparator",
    "java.util.HashMap",
    "java.util.HashSet",
    "java.util.Iterator",
    "java.util.LinkedHashMap",
    "java.util.LinkedList",
    "java.util.List",
    "java.util.Map",
    "java.util.Objects",
    "java.util.Optional",
    "java.util.Set",
    "java.util.TreeMap",
    "java.util.TreeSet",
    // java.util.function
    "java.util.function.BiFunction",
    "java.util.function.Consumer",
    "java.util.function.Function",
    "java.util.function.Predicate",
    "java.util.function.Supplier",
    // java.io
    "java.io.BufferedReader",
    "java.io.File",
    "java.io.IOException",
    "java.io.InputStream",
    "java.io.OutputStream",
    "java.io.PrintStream",
    "java.io.Reader",
    "java.io.Serializable",
    "java.io.UncheckedIOException",
    "java.io.Writer",
];

// ---------------------------------------------------------------------------
//  Trait impl
// ---------------------------------------------------------------------------

impl LanguageSupport for JavaSupport {
    fn is_reserved(&self, word: &str) -> bool {
        RESERVED.binary_search(&word).is_ok()
    }

    fn core_package(&self) -> &'static str {
        "java.lang"
    }

    fn parse_package(&self, line: &str) -> Option<String> {
        PACKAGE_RE.captures(line).map(|cap| cap[1].to_string())
    }

    fn parse_import(&self, line: &str) -> Option<Import> {
        let cap = IMPORT_RE.captures(line)?;
        if cap.get(1).is_some() {
            return None;
        }
        let name = cap[2].to_string();
        if cap.get(3).is_some() {
            return Some(Import::Wildcard(name));
        }
        let simple = name.rsplit('.').next().unwrap_or(&name).to_string();
        Some(Import::Single { simple, qualified: name })
    }

    fn well_known_declarations(&self) -> &'static [&'static str] {
        WELL_KNOWN
    }
}
