// crates/scan_snippet_file/tests/scan.rs

use std::fs;
use std::path::Path;

use bold_keywords::KnownDeclarations;
use build_xref_index::XrefIndex;
use lang_support::for_extension;
use scan_snippet_file::{scan_file, scan_source, ClassPattern, ScanContext, ScanOptions};
use snippet_diagnostics::CollectingReporter;
use tempfile::tempdir;

struct Fixture {
    options: ScanOptions,
    index: XrefIndex,
    known: KnownDeclarations,
}

impl Fixture {
    fn new() -> Self {
        Self::with(ScanOptions::default(), XrefIndex::new())
    }

    fn with(options: ScanOptions, index: XrefIndex) -> Self {
        let known = KnownDeclarations::new(for_extension("java").unwrap(), &index);
        Self { options, index, known }
    }

    fn ctx(&self) -> ScanContext<'_> {
        ScanContext { options: &self.options, index: &self.index, known: &self.known }
    }
}

#[test]
fn plain_text_region_is_stripped_and_escaped() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "intro\n// BEGIN: ex1\n    int x = 1;\n// END: ex1\noutro\n";

    let snippets = scan_source(Path::new("notes.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["ex1"].text(), "int x = 1;\n");
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn nested_regions_share_content_lines() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
// BEGIN: outer
a();
    // BEGIN: inner
    b();
    // END: inner
c();
// END: outer
";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["inner"].text(), "b();\n");
    assert_eq!(snippets["outer"].text(), "a();\n    b();\nc();\n");
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn duplicate_region_keeps_second_content() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
// BEGIN: dup
first();
// END: dup
// BEGIN: dup
second();
// END: dup
";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["dup"].text(), "second();\n");
    let errors: Vec<_> = reporter.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Same pattern is there twice: dup"));
    assert_eq!(errors[0].position.as_ref().and_then(|p| p.line), Some(4));
}

#[test]
fn unterminated_region_is_reported_and_kept() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "// BEGIN: open\n  if (a) {\n    b();\n";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["open"].text(), "if (a) {\n  b();\n");
    let errors: Vec<_> = reporter.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Not closed section open"));
    assert_eq!(errors[0].position.as_ref().and_then(|p| p.line), Some(1));
}

#[test]
fn stray_close_markers_are_errors() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
// END: ghost
// BEGIN: once
x();
// END: once
// FINISH: once
";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["once"].text(), "x();\n");
    let messages: Vec<_> = reporter.errors().map(|d| d.message.clone()).collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Closing unknown section: ghost"));
    assert!(messages[1].starts_with("Closing not opened section: once"));
}

#[test]
fn finish_marker_balances_braces() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
// BEGIN: fin
    void run() {
        go();
// FINISH: fin
    }
";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["fin"].text(), "void run() {\n    go();\n}\n");
    assert!(!reporter.has_errors());
}

#[test]
fn java_import_becomes_a_cross_reference() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
package org.demo;

import foo.Bar;

class Demo {
    // BEGIN: use.bar
    Bar bar = null;
    // END: use.bar
}
";

    let snippets = scan_source(Path::new("org/demo/Demo.java"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(
        snippets["use.bar"].text(),
        "{@link foo.Bar Bar} bar = <b>null</b>;\n"
    );
}

#[test]
fn local_import_beats_the_global_index() {
    let mut index = XrefIndex::new();
    index.insert("Bar", "global.Bar");
    index.insert("Helper", "global.Helper");
    let fixture = Fixture::with(ScanOptions::default(), index);
    let mut reporter = CollectingReporter::new();
    let content = "\
import local.Bar;
// BEGIN: r
Bar b = Helper.make();
// END: r
";

    let snippets = scan_source(Path::new("R.java"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(
        snippets["r"].text(),
        "{@link local.Bar Bar} b = {@link global.Helper Helper}.make();\n"
    );
}

#[test]
fn non_java_files_are_not_bolded() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "// BEGIN: t\npublic class String {}\n// END: t\n";

    let snippets = scan_source(Path::new("t.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["t"].text(), "public class String {}\n");
}

#[test]
fn whole_class_is_published_under_its_qualified_name() {
    let options = ScanOptions {
        snippet_classes: vec![ClassPattern::new(r".*Example").unwrap()],
        ..ScanOptions::default()
    };
    let fixture = Fixture::with(options, XrefIndex::new());
    let mut reporter = CollectingReporter::new();
    let content = "\
package org.demo;

import java.util.List;

public class UsageExample {
    // BEGIN: inside
    List<String> names;
    // END: inside
}
";

    let snippets = scan_source(
        Path::new("org/demo/UsageExample.java"),
        content,
        &fixture.ctx(),
        &mut reporter,
    );

    assert_eq!(
        snippets["org.demo.UsageExample"].text(),
        "<b>public</b> <b>class</b> UsageExample {\n    \
         {@link java.util.List List}&lt;{@link java.lang.String String}&gt; names;\n}\n"
    );
    assert!(snippets.contains_key("inside"));
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn class_patterns_must_match_the_whole_name() {
    let options = ScanOptions {
        snippet_classes: vec![ClassPattern::new(r"Example").unwrap()],
        ..ScanOptions::default()
    };
    let fixture = Fixture::with(options, XrefIndex::new());
    let mut reporter = CollectingReporter::new();

    let snippets = scan_source(
        Path::new("org/demo/UsageExample.java"),
        "package org.demo;\nclass UsageExample {}\n",
        &fixture.ctx(),
        &mut reporter,
    );

    assert!(snippets.is_empty());
}

#[test]
fn class_patterns_pick_the_alternative_covering_the_whole_name() {
    let options = ScanOptions {
        snippet_classes: vec![
            ClassPattern::new(r"org\.demo\.Demo|org\.demo\.DemoExample").unwrap(),
            ClassPattern::new(r".*?Twice").unwrap(),
        ],
        ..ScanOptions::default()
    };
    let fixture = Fixture::with(options, XrefIndex::new());
    let mut reporter = CollectingReporter::new();

    let alternation = scan_source(
        Path::new("org/demo/DemoExample.java"),
        "package org.demo;\nclass DemoExample {}\n",
        &fixture.ctx(),
        &mut reporter,
    );
    let lazy = scan_source(
        Path::new("org/TwiceTwice.java"),
        "package org;\nclass TwiceTwice {}\n",
        &fixture.ctx(),
        &mut reporter,
    );

    assert_eq!(alternation.keys().collect::<Vec<_>>(), vec!["org.demo.DemoExample"]);
    assert_eq!(lazy.keys().collect::<Vec<_>>(), vec!["org.TwiceTwice"]);
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn reopening_an_open_region_starts_it_afresh() {
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();
    let content = "\
// BEGIN: d
first();
// BEGIN: d
second();
// END: d
";

    let snippets = scan_source(Path::new("x.txt"), content, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["d"].text(), "second();\n");
    let errors: Vec<_> = reporter.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Same pattern is there twice: d"));
    assert_eq!(errors[0].position.as_ref().and_then(|p| p.line), Some(3));
}

#[test]
fn binary_file_is_skipped_with_a_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, [0x89u8, 0x50, 0xff, 0xfe, 0x00, 0xc3]).unwrap();
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();

    let snippets = scan_file(&path, &fixture.ctx(), &mut reporter);

    assert!(snippets.is_empty());
    assert_eq!(reporter.warnings().count(), 1);
    assert!(!reporter.has_errors());
}

#[test]
fn scan_file_reads_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.txt");
    fs::write(&path, "// BEGIN: disk\n  on disk\n// END: disk\n").unwrap();
    let fixture = Fixture::new();
    let mut reporter = CollectingReporter::new();

    let snippets = scan_file(&path, &fixture.ctx(), &mut reporter);

    assert_eq!(snippets["disk"].text(), "on disk\n");
    assert_eq!(snippets["disk"].source(), path.as_path());
}
