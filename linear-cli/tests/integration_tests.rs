// ABOUTME: End-to-end tests from command-line arguments and config files to resolved predicates
// ABOUTME: Exercises clap parsing, config defaults and predicate validation together

use chrono::{TimeZone, Utc};
use clap::Parser;
use linear_cli::cli::{Cli, Commands, IssueFilterArgs};
use linear_cli::config::Config;
use linear_cli::filters::{Assignee, FilterError, PredicateSet};
use tempfile::TempDir;

fn filters_from(args: &[&str]) -> IssueFilterArgs {
    match Cli::try_parse_from(args).expect("Should parse").command {
        Commands::Issues { filters, .. } | Commands::Search { filters, .. } => filters,
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 31, 12, 0, 0).unwrap()
}

#[test]
fn test_config_and_flags_integration() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
        default_team = "ENG"
        default_newer_than = "1_month_ago"
        preferred_format = "json"
    "#,
    )
    .expect("Should write config file");

    let config = Config::load_from_file(&config_path).expect("Should load config");
    assert!(config.wants_json());

    // Config defaults fill in missing flags
    let filters = filters_from(&["linear", "issues", "--assignee", "me"]);
    let predicates =
        PredicateSet::from_args(&filters, &config.filter_defaults(), now()).expect("valid");
    assert_eq!(predicates.assignee, Some(Assignee::Me));
    assert_eq!(predicates.team.as_deref(), Some("ENG"));
    assert_eq!(
        predicates.created_after.as_deref(),
        Some("2024-07-31T12:00:00Z")
    );

    // Explicit flags win over config defaults
    let filters = filters_from(&[
        "linear", "search", "login", "--team", "OPS", "-n", "all_time",
    ]);
    let predicates =
        PredicateSet::from_args(&filters, &config.filter_defaults(), now()).expect("valid");
    assert_eq!(predicates.team.as_deref(), Some("OPS"));
    assert_eq!(predicates.created_after, None);
}

#[test]
fn test_label_flags_are_kept_raw_until_resolution() {
    let filters = filters_from(&[
        "linear",
        "issues",
        "--label",
        " Bug , Backend ",
        "--label-not",
        "",
    ]);
    let predicates =
        PredicateSet::from_args(&filters, &Config::default().filter_defaults(), now()).unwrap();

    assert_eq!(predicates.labels_all.as_deref(), Some("Bug , Backend"));
    assert_eq!(predicates.labels_not, None);
    assert!(predicates.has_label_predicates());
}

#[test]
fn test_flag_conflicts_from_command_line() {
    let cases: [(&[&str], &str); 3] = [
        (
            &["linear", "issues", "--has-parent", "--no-parent"],
            "Cannot combine --has-parent and --no-parent",
        ),
        (
            &["linear", "issues", "--parent", "ENG-1", "--no-parent"],
            "Cannot combine --parent with --has-parent/--no-parent",
        ),
        (
            &["linear", "issues", "--project", "abc"],
            "Invalid project ID format: abc",
        ),
    ];

    for (args, expected) in cases {
        let err = PredicateSet::from_args(
            &filters_from(args),
            &Config::default().filter_defaults(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), expected);
        assert!(err.is_usage_error());
    }
}

#[test]
fn test_invalid_time_window_from_command_line() {
    let err = PredicateSet::from_args(
        &filters_from(&["linear", "ls", "--newer-than", "last_tuesday"]),
        &Config::default().filter_defaults(),
        now(),
    )
    .unwrap_err();
    assert!(matches!(err, FilterError::InvalidTimeWindow(_)));
}
