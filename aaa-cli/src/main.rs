//! Command-line interface for aaa
//! Checks that every `test(name, fn)` call in JavaScript/TypeScript sources carries `arrange`,
//! `act` and `assert` comments, in that order.
//!
//! Usage:
//!   aaa [PATHS]... [--config `<file>`] [--format text|json] [--severity off|warn|error] [--quiet]
//!
//! Exit status is 0 when clean, 1 when an error-level finding was reported, and 2 when the
//! configuration, a file read or a parse failed.

mod files;
mod report;

use aaa_config::{AaaConfig, ConfigError, Loader, OutputFormat, PROJECT_CONFIG_FILE};
use aaa_lint::Linter;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;

use report::{Outcome, Summary};

const LOG_ENV: &str = "AAA_LOG";

fn cli() -> Command {
    Command::new("aaa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Enforce arrange, act and assert comments in test bodies")
        .arg(
            Arg::new("paths")
                .help("Files or directories to lint")
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./aaa.toml")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(PossibleValuesParser::new(["text", "json"])),
        )
        .arg(
            Arg::new("severity")
                .long("severity")
                .help("Severity of the arrange-act-assert rule")
                .value_parser(PossibleValuesParser::new(["off", "warn", "error"])),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Report errors only")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    init_logging();
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::from(2);
        }
    };

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let outcomes = lint_all(&files::collect(&paths, &config), &config);
    let quiet = config.output.quiet;

    let rendered = match config.output.format {
        OutputFormat::Text => report::render_text(&outcomes, quiet),
        OutputFormat::Json => match report::render_json(&outcomes, quiet) {
            Ok(json) => format!("{}\n", json),
            Err(err) => {
                eprintln!("Failed to serialize report: {}", err);
                return ExitCode::from(2);
            }
        },
    };
    print!("{}", rendered);

    ExitCode::from(exit_status(&Summary::of(&outcomes, quiet)))
}

fn init_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<AaaConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);

    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(severity) = matches.get_one::<String>("severity") {
        loader = loader.set_override(
            &format!("rules.{}", aaa_lint::rules::arrange_act_assert::RULE_NAME),
            severity.as_str(),
        )?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("quiet") {
        loader = loader.set_override("output.quiet", true)?;
    }

    loader.build()
}

fn lint_all(files: &[PathBuf], config: &AaaConfig) -> Vec<Outcome> {
    let linter = Linter::new(&config.lint_options());
    tracing::debug!(rules = linter.enabled(), files = files.len(), "linting");

    files
        .iter()
        .map(|path| {
            let outcome = linter.lint_file(path);
            if let Err(err) = &outcome {
                tracing::warn!(%err, "file skipped");
            }
            outcome
        })
        .collect()
}

fn exit_status(summary: &Summary) -> u8 {
    if summary.failures > 0 {
        2
    } else if summary.errors > 0 {
        1
    } else {
        0
    }
}
