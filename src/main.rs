mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod pricing;
mod source;
mod utils;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::CommandContext;
use cli::Cli;
use config::Config;
use error::AppError;
use output::NumberFormat;
use pricing::PricingDb;

/// Log to stderr so tables and JSON on stdout stay clean. `RUST_LOG` wins
/// over the level picked from the CLI flags.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let pricing_db = PricingDb::from_config(&config.pricing)?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let ctx = CommandContext {
        cli,
        pricing_db: &pricing_db,
        number_format,
    };
    app::run(&ctx)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
