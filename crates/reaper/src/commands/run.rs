use std::path::PathBuf;

use chrono::Utc;
use clap::ArgMatches;
use tracing::{error, info, warn};

use reaper_config::load_config;
use reaper_core::{InventoryClient, RunMode, RunSettings, SilentReporter, events, run};

use super::helpers::{config_overrides, write_inventory_path};
use crate::render::{self, ConsoleReporter};

pub(crate) fn handle_run_command(
    matches: &ArgMatches,
    plan: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(
        event = "cli.run_started",
        plan = plan,
        json_output = json_output
    );

    let config_path = matches.get_one::<PathBuf>("config");
    let config = match load_config(config_path.map(PathBuf::as_path), config_overrides(matches, plan))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let inventory_path = matches
        .get_one::<PathBuf>("inventory")
        .ok_or("--inventory is required")?;
    let mut client = match InventoryClient::load(inventory_path) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.inventory_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let settings = RunSettings::from_config(&config, plan);
    let report = if json_output {
        run(&mut client, &settings, Utc::now(), &SilentReporter)
    } else {
        run(
            &mut client,
            &settings,
            Utc::now(),
            &ConsoleReporter::new(settings.mode),
        )
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_summary(&report);
    }

    if let Some(path) = write_inventory_path(matches) {
        if settings.mode == (RunMode::Apply { dry_run: false }) {
            if let Err(e) = client.save(&path) {
                eprintln!("{}", e);
                error!(event = "cli.inventory_write_failed", error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        } else {
            eprintln!("Dry run: not writing inventory to '{}'", path.display());
            warn!(
                event = "cli.inventory_write_skipped",
                path = %path.display(),
                reason = "dry_run"
            );
        }
    }

    let summary = report.summary();
    info!(
        event = "cli.run_completed",
        candidates = summary.candidates,
        deleted = summary.deleted,
        would_delete = summary.would_delete,
        failed = summary.failed,
        accounts_skipped = summary.accounts_skipped
    );

    if report.has_failures() {
        return Err(format!(
            "{} account(s) skipped, {} deletion(s) failed",
            summary.accounts_skipped, summary.failed
        )
        .into());
    }

    Ok(())
}
