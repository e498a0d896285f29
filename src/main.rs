//! LogPulse CLI entry point

use anyhow::Context;
use log::{debug, info};
use logpulse::config::cli::Cli;
use logpulse::config::{toml, validator, Config};
use logpulse::generator::{GeneratorStats, LogGenerator, RatePacer};
use logpulse::output::{sink, text};
use logpulse::util::logging;
use logpulse::Result;
use std::io::{self, BufWriter};
use std::time::Instant;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;
    logging::init_logging(cli.debug);

    // Build and validate configuration
    let config = toml::load_config(&cli)?;
    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    if cli.dry_run {
        text::print_configuration(&config);
        eprintln!();
        eprintln!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    if cli.debug {
        text::print_configuration(&config);
    }

    let start = Instant::now();
    let stats = run(&config)?;

    if config.runtime.summary {
        text::print_summary(&stats, start.elapsed());
    }

    Ok(())
}

/// Generate lines into the configured sink until the run completes
fn run(config: &Config) -> Result<GeneratorStats> {
    let mut generator = LogGenerator::from_config(config)?;
    let pacer = RatePacer::new(config.generator.rate).with_mode(config.runtime.pacing);

    info!(
        "generating {} lines/s from {} sessions of {} requests",
        config.generator.rate, config.generator.sessions, config.generator.session_length
    );

    match config.runtime.output {
        Some(ref path) => {
            let file = sink::open_output(path, config.runtime.append)?;
            debug!("writing to {}", path.display());
            let mut writer = BufWriter::new(file);
            generator.run(&mut writer, &pacer, config.runtime.completion)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            generator.run(&mut handle, &pacer, config.runtime.completion)
        }
    }
}
