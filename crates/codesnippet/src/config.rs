// crates/codesnippet/src/config.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use resolve_codesnippets::{ClassPattern, SearchPath, SnippetConfig};
use snippet_markers::DEFAULT_MAX_LINE_LENGTH;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub snippets: SnippetConfig,
    pub files: Vec<PathBuf>,
    pub in_place: bool,
    pub fail_on_error: bool,
    pub verbose: bool,
}

pub fn command() -> Command {
    Command::new("codesnippet")
        .version("0.1.0")
        .about("Replaces {@codesnippet id} tags with regions extracted from source trees")
        .arg(
            Arg::new("snippetpath")
                .long("snippetpath")
                .value_name("DIR")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Directory scanned for snippets only"),
        )
        .arg(
            Arg::new("sourcepath")
                .long("sourcepath")
                .value_name("DIR")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Directory scanned for snippets whose declarations can be linked to"),
        )
        .arg(
            Arg::new("snippetclasses")
                .long("snippetclasses")
                .value_name("REGEX")
                .action(ArgAction::Append)
                .help("Publish classes whose qualified name matches in full as whole snippets"),
        )
        .arg(
            Arg::new("max_line_length")
                .long("max-line-length")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Longest allowed snippet line (default 80)"),
        )
        .arg(
            Arg::new("escape_at")
                .long("escape-at")
                .help("Escape @ in snippet text as well")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("in_place")
                .long("in-place")
                .help("Rewrite the input files instead of printing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fail_on_error")
                .long("fail-on-error")
                .help("Exit with status 1 when any error was reported")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .required(true)
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .help("Documentation files whose tags are resolved"),
        )
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let snippet_classes = matches
            .get_many::<String>("snippetclasses")
            .unwrap_or_default()
            .map(|pattern| {
                ClassPattern::new(pattern)
                    .with_context(|| format!("Invalid --snippetclasses pattern '{}'", pattern))
            })
            .collect::<Result<Vec<_>>>()?;

        let snippets = SnippetConfig {
            search_paths: search_paths(matches),
            snippet_classes,
            max_line_length: matches
                .get_one::<usize>("max_line_length")
                .copied()
                .unwrap_or(DEFAULT_MAX_LINE_LENGTH),
            escape_at: matches.get_flag("escape_at"),
        };

        Ok(Self {
            snippets,
            files: matches
                .get_many::<PathBuf>("files")
                .unwrap_or_default()
                .cloned()
                .collect(),
            in_place: matches.get_flag("in_place"),
            fail_on_error: matches.get_flag("fail_on_error"),
            verbose: matches.get_flag("verbose"),
        })
    }
}

/// `--snippetpath` and `--sourcepath` entries in command-line order.
fn search_paths(matches: &ArgMatches) -> Vec<SearchPath> {
    let mut ordered: Vec<(usize, SearchPath)> = Vec::new();
    for (id, visible) in [("snippetpath", false), ("sourcepath", true)] {
        let dirs = matches.get_many::<PathBuf>(id).unwrap_or_default();
        let indices = matches.indices_of(id).unwrap_or_default();
        for (index, dir) in indices.zip(dirs) {
            ordered.push((index, SearchPath { dir: dir.clone(), visible }));
        }
    }
    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, path)| path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig> {
        let matches = command().try_get_matches_from(args)?;
        AppConfig::from_matches(&matches)
    }

    #[test]
    fn test_search_paths_keep_command_line_order() {
        let config = parse(&[
            "codesnippet",
            "--sourcepath",
            "src",
            "--snippetpath",
            "demos",
            "--sourcepath",
            "api",
            "doc.html",
        ])
        .unwrap();

        assert_eq!(
            config.snippets.search_paths,
            vec![
                SearchPath::visible("src"),
                SearchPath::snippets_only("demos"),
                SearchPath::visible("api"),
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["codesnippet", "a.html", "b.html"]).unwrap();

        assert_eq!(config.files, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);
        assert_eq!(config.snippets.max_line_length, DEFAULT_MAX_LINE_LENGTH);
        assert!(!config.snippets.escape_at);
        assert!(!config.in_place);
        assert!(!config.fail_on_error);
    }

    #[test]
    fn test_invalid_snippet_class_is_an_error() {
        let err = parse(&["codesnippet", "--snippetclasses", "(", "a.html"]).unwrap_err();

        assert!(format!("{:#}", err).contains("Invalid --snippetclasses pattern '('"));
    }

    #[test]
    fn test_snippet_classes_match_whole_names() {
        let config = parse(&["codesnippet", "--snippetclasses", "a.B|a.BExample", "doc.html"]).unwrap();
        let pattern = &config.snippets.snippet_classes[0];

        assert_eq!(pattern.as_str(), "a.B|a.BExample");
        assert!(pattern.matches("a.BExample"));
        assert!(!pattern.matches("a.BExampleTest"));
    }

    #[test]
    fn test_files_are_required() {
        assert!(parse(&["codesnippet", "--verbose"]).is_err());
    }
}
