//! `docdiff` binary entry point.

use anyhow::Context;
use clap::Parser;
use docdiff::infrastructure::{config::Settings, telemetry::TelemetryBuilder};
use docdiff::{Cli, compare_files, write_report};
use std::io::IsTerminal;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut settings);
    if cli.output.is_none() && !std::io::stdout().is_terminal() {
        settings.output.color = false;
    }
    colored::control::set_override(settings.output.color);

    TelemetryBuilder::new("docdiff")
        .with_log_level(settings.telemetry.log_level.clone())
        .with_json(settings.telemetry.json)
        .init()
        .context("Failed to initialize logging")?;

    info!(
        old = %cli.old.display(),
        new = %cli.new.display(),
        "Docdiff starting"
    );
    debug!(?settings, "Effective settings");

    let report =
        compare_files(&cli.old, &cli.new, &settings).context("Failed to compare documents")?;

    write_report(&report, cli.output.as_deref()).context("Failed to write report")?;
    if let Some(path) = &cli.output {
        info!(path = %path.display(), "Report written");
    }
    Ok(())
}
