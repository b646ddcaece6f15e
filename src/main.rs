//! greeter CLI
//!
//! Prints a greeting. With no arguments this is `Hello, World!`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use greeter::{config, logging, Greeter};

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Print a greeting")]
struct Cli {
    /// Name to greet (default: World)
    #[arg(short, long)]
    name: Option<String>,

    /// TOML config file to read the name from
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cli() -> Cli {
    let mut command = Cli::command();
    if let Some(path) = config::default_config_path() {
        command = command.after_help(format!(
            "Conventional config location: {} (read only when passed with --config)",
            path.display()
        ));
    }
    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => Some(config::load_config(path).context("Failed to load config")?),
        None => None,
    };

    let (name, source) = config::resolve_name(cli.name, file_config.as_ref());
    tracing::debug!(%source, "resolved name");

    let greeter = Greeter::new(name);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", greeter.greet()).context("Failed to write greeting")?;

    Ok(())
}
