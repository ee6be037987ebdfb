use anyhow::Context;
use clap::Parser;
use colored::*;
use librelink_processor::cli::Args;
use librelink_processor::constants::LOG_TARGET;
use librelink_processor::models::ConversionStats;
use librelink_processor::processor::ExportProcessor;
use std::process;
use tracing::debug;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    setup_logging(&args);

    match run(&args) {
        Ok(stats) => {
            if !args.quiet {
                print_summary(&stats);
            }
            process::exit(0);
        }
        Err(error) => {
            // stdout stays empty on failure
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ConversionStats> {
    // Configuration is validated before the export is opened
    let config = args.to_config().context("Invalid configuration")?;
    let data_path = config.data_path.clone();

    ExportProcessor::new(config)
        .with_output(args.output_target())
        .process()
        .with_context(|| format!("Failed to convert {}", data_path.display()))
}

/// Set up structured logging on stderr so stdout carries only the JSON document
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

fn print_summary(stats: &ConversionStats) {
    eprintln!(
        "{} {} readings ({} historic, {} scan), {} rows skipped",
        "Converted".bright_green(),
        stats.readings().to_string().bright_white().bold(),
        stats.historic_readings,
        stats.scan_readings,
        stats.filtered_rows.to_string().bright_black()
    );
}
