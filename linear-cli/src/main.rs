// ABOUTME: Main entry point for the Linear CLI application
// ABOUTME: Wires config, API client and filter pipeline to the issues and search commands

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use linear_cli::cli::{Cli, Commands, IssueFilterArgs, ListArgs};
use linear_cli::cli_output::CliOutput;
use linear_cli::commands::{
    FilteredIssues, IssueSource, ListOptions, fetch_filtered_issues, search_term,
};
use linear_cli::config::Config;
use linear_cli::constants::{limits, timeouts};
use linear_cli::filters::{FilterError, PredicateSet};
use linear_cli::output::{JsonFormatter, OutputFormat, TableFormatter};
use linear_sdk::{LinearClient, LinearError};
use secrecy::SecretString;
use std::env;
use std::io::IsTerminal;
use std::time::Duration;

const USAGE_HINT: &str = "Run 'linear issues --help' to see how the filter flags combine";

struct RenderOptions {
    json: bool,
    pretty: bool,
    use_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let use_color = should_use_color(&cli);
    let out = CliOutput::with_color(use_color && std::io::stderr().is_terminal());

    if let Err(err) = run(cli, use_color).await {
        report_error(&out, &err);
        std::process::exit(1);
    }
}

fn should_use_color(cli: &Cli) -> bool {
    if cli.force_color {
        return true;
    }
    !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb"
        && std::io::stdout().is_terminal()
}

fn report_error(out: &CliOutput, err: &anyhow::Error) {
    out.error(&format!("{:#}", err));
    if let Some(help) = error_hint(err) {
        out.hint(help);
    }
}

/// Follow-up advice for an error: SDK help for API failures, a pointer to
/// `--help` for bad flag combinations.
fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(api_error) = err.downcast_ref::<LinearError>() {
        return api_error.help_text();
    }

    let filter_error = err.downcast_ref::<FilterError>()?;
    if filter_error.is_usage_error() {
        return Some(USAGE_HINT);
    }
    filter_error.api_error().and_then(LinearError::help_text)
}

fn build_client(config: &Config, verbose: bool) -> Result<LinearClient> {
    let api_key = env::var("LINEAR_API_KEY").map_err(|_| {
        anyhow!(
            "No LINEAR_API_KEY environment variable found. \
             Set it with: export LINEAR_API_KEY=lin_api_xxxxx"
        )
    })?;

    LinearClient::builder()
        .auth_token(SecretString::new(api_key.into_boxed_str()))
        .verbose(verbose)
        .base_url(config.api_url.clone())
        .build()
        .context("Failed to create Linear client")
}

fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(timeouts::PROGRESS_BAR_TICK_MS));
    spinner
}

async fn run(cli: Cli, use_color: bool) -> Result<()> {
    let config = Config::load()?;

    let (filters, output, source_words, include_archived) = match cli.command {
        Commands::Issues { filters, output } => (filters, output, None, false),
        Commands::Search {
            query,
            include_archived,
            filters,
            output,
        } => (filters, output, Some(query), include_archived),
    };

    let term = source_words.as_deref().map(search_term).transpose()?;
    let source = match term.as_deref() {
        Some(term) => IssueSource::Search {
            term,
            include_archived,
        },
        None => IssueSource::List,
    };

    let render = RenderOptions {
        json: output.json || config.wants_json(),
        pretty: output.pretty,
        use_color,
    };
    let out = CliOutput::with_color(use_color && std::io::stderr().is_terminal())
        .structured(render.json);

    let (predicates, options) = prepare(&filters, &output, &config)?;
    let client = build_client(&config, cli.verbose)?;

    let progress = spinner(
        "Fetching issues...",
        out.emits_notices() && std::io::stderr().is_terminal(),
    );
    let result = fetch_filtered_issues(&client, &predicates, source, options, |warning| {
        progress.suspend(|| out.warning(&warning.to_string()))
    })
    .await;
    progress.finish_and_clear();
    let result = result?;

    let empty_message = match term.as_deref() {
        Some(term) => format!("No matches found for \"{}\"", term),
        None => "No issues found.".to_string(),
    };
    print_issues(&result, &render, &empty_message, &out)
}

fn prepare(
    filters: &IssueFilterArgs,
    output: &ListArgs,
    config: &Config,
) -> Result<(PredicateSet, ListOptions)> {
    let predicates = PredicateSet::from_args(filters, &config.filter_defaults(), Utc::now())?;
    let options = ListOptions {
        limit: output
            .limit
            .or(config.default_limit)
            .unwrap_or(limits::DEFAULT_ISSUE_LIMIT),
        order_by: output.sort.order_by(),
    };
    Ok((predicates, options))
}

fn print_issues(
    result: &FilteredIssues,
    render: &RenderOptions,
    empty_message: &str,
    out: &CliOutput,
) -> Result<()> {
    let issues = &result.issues;

    if render.json {
        let formatter = JsonFormatter::new(render.pretty);
        println!("{}", formatter.format_issues(&issues.nodes)?);
        return Ok(());
    }

    if issues.nodes.is_empty() {
        println!("{}", empty_message);
    } else {
        let formatter = TableFormatter::new(render.use_color);
        println!("{}", formatter.format_issues(&issues.nodes)?);
    }

    if issues.page_info.has_next_page {
        out.info("Use --limit to see more results");
    }
    Ok(())
}
