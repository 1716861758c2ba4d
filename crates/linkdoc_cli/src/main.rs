//! LinkDoc CLI: the command-line interface for LinkedDoc headers.
//!
//! Provides `linkdoc validate` for checking headers, `linkdoc index` for
//! writing the JSON module index, `linkdoc build` to do both, and
//! `linkdoc tags` for the tag-to-module lookup.

#![warn(missing_docs)]

mod build;
mod index;
mod pipeline;
mod tags;
mod validate;

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

/// LinkDoc: parse, validate, and index LinkedDoc file headers.
#[derive(Parser, Debug)]
#[command(name = "linkdoc", version, about = "LinkedDoc header tooling")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show warnings and progress; repeat for more detail (-vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `linkdoc.toml` file or the directory containing it.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate headers and report errors (and warnings with -v).
    Validate(ValidateArgs),
    /// Write the JSON module index.
    Index(IndexArgs),
    /// Validate, then write the index if validation passes.
    Build(BuildArgs),
    /// Print the tag-to-modules lookup as JSON.
    Tags(ScanArgs),
}

/// Which files to scan.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory to scan (default: the project root).
    #[arg(short, long)]
    pub path: Option<String>,

    /// Skip files whose content hash matches the cache.
    #[arg(long)]
    pub incremental: bool,
}

/// Arguments for the `linkdoc validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files to scan.
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format for findings.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Rule names to suppress (e.g., `--allow unknown-tag`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g., `--deny duplicate-module`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,
}

/// Arguments for the `linkdoc index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Files to scan.
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output path (default: `[index] output` from `linkdoc.toml`).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `linkdoc build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Validation settings.
    #[command(flatten)]
    pub validate: ValidateArgs,

    /// Output path (default: `[index] output` from `linkdoc.toml`).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Finding output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Verbosity level (number of `-v` flags).
    pub verbose: u8,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let color = match cli.color {
        ColorChoice::Auto => env_wants_color(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Validate(ref args) => validate::run(args, &global),
        Command::Index(ref args) => index::run(args, &global),
        Command::Build(ref args) => build::run(args, &global),
        Command::Tags(ref args) => tags::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough color detection: honors `NO_COLOR` and requires a `TERM`.
fn env_wants_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::env::var_os("TERM").is_some()
}

/// Installs the stderr log subscriber.
///
/// Without `-v` the level comes from `RUST_LOG`, defaulting to `warn`.
fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_validate_default() {
        let cli = Cli::parse_from(["linkdoc", "validate"]);
        match cli.command {
            Command::Validate(args) => {
                assert!(args.scan.path.is_none());
                assert!(!args.scan.incremental);
                assert_eq!(args.format, ReportFormat::Text);
                assert!(args.allow.is_empty());
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn parse_validate_with_options() {
        let cli = Cli::parse_from([
            "linkdoc",
            "validate",
            "--path",
            "handlers",
            "--incremental",
            "--format",
            "json",
            "--allow",
            "unknown-tag",
            "no-tags",
            "--deny",
            "duplicate-module",
        ]);
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.scan.path.as_deref(), Some("handlers"));
                assert!(args.scan.incremental);
                assert_eq!(args.format, ReportFormat::Json);
                assert_eq!(args.allow, vec!["unknown-tag", "no-tags"]);
                assert_eq!(args.deny, vec!["duplicate-module"]);
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn parse_index_output() {
        let cli = Cli::parse_from(["linkdoc", "index", "-o", "out/index.json"]);
        match cli.command {
            Command::Index(args) => {
                assert_eq!(args.output.as_deref(), Some("out/index.json"));
            }
            _ => panic!("expected Index command"),
        }
    }

    #[test]
    fn parse_build_combines_flags() {
        let cli = Cli::parse_from(["linkdoc", "build", "--incremental", "--output", "i.json"]);
        match cli.command {
            Command::Build(args) => {
                assert!(args.validate.scan.incremental);
                assert_eq!(args.output.as_deref(), Some("i.json"));
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_tags_path() {
        let cli = Cli::parse_from(["linkdoc", "tags", "--path", "src"]);
        match cli.command {
            Command::Tags(args) => assert_eq!(args.path.as_deref(), Some("src")),
            _ => panic!("expected Tags command"),
        }
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["linkdoc", "-vv", "validate"]);
        assert_eq!(cli.verbose, 2);
        let cli = Cli::parse_from(["linkdoc", "validate", "-v"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn global_flags() {
        let cli = Cli::parse_from(["linkdoc", "--quiet", "--config", "linkdoc.toml", "tags"]);
        assert!(cli.quiet);
        assert_eq!(cli.config.as_deref(), Some("linkdoc.toml"));
    }

    #[test]
    fn invalid_format_rejected() {
        assert!(Cli::try_parse_from(["linkdoc", "validate", "--format", "xml"]).is_err());
    }
}
