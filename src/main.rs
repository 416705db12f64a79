use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use script_list::filter::ScriptFilter;
use script_list::locator;
use script_list::output::{self, OutputFormat, PresentOptions, Report};
use script_list::parser::{self, ParseError};

#[derive(Parser)]
#[command(name = "sl")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "List the scripts declared in a package.json", long_about = None)]
struct Cli {
    /// Path to package.json (defaults to ./package.json)
    #[arg(short, long, value_name = "FILE", env = "SL_PATH")]
    path: Option<PathBuf>,

    /// Only show scripts whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "SUBSTR")]
    filter: Option<String>,

    /// Output format
    #[arg(
        short = 'F',
        long,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Table,
        env = "SL_FORMAT"
    )]
    format: OutputFormat,

    /// Show only script names, without their commands
    #[arg(short, long)]
    names_only: bool,

    /// Disable colored output (also set by a non-empty NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = locator::locate(cli.path.as_deref());
    debug!(path = %path.display(), "resolved manifest path");

    let manifest = parser::parse_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let filter = cli.filter.as_deref().map(ScriptFilter::new);
    let report = Report::from_manifest(&manifest, &locator::display_dir(&path), filter.as_ref());
    info!(
        declared = manifest.script_count(),
        shown = report.len(),
        "filtered scripts"
    );

    let options = PresentOptions {
        names_only: cli.names_only,
        color: !cli.no_color
            && !PresentOptions::no_color_requested(env::var_os("NO_COLOR").as_deref())
            && io::stdout().is_tty(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_report(cli.format, options, &report, &mut handle)
        .context("failed to write output")?;

    if report.is_empty() && cli.format == OutputFormat::Json {
        eprintln!("{}", report.empty_message());
    }

    Ok(())
}

fn report_not_found(path: &Path) {
    let dir = locator::display_dir(path);
    let shown = env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf());

    eprintln!();
    if io::stderr().is_tty() {
        eprintln!("   {}", dir.red().bold());
    } else {
        eprintln!("   {}", dir);
    }
    eprintln!();
    eprintln!("   No package.json file found:");
    eprintln!("     {}", shown.display());
    eprintln!();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ParseError>() {
                Some(ParseError::NotFound { path, source }) => {
                    debug!(error = %source, "manifest unreadable");
                    report_not_found(path);
                }
                _ => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
