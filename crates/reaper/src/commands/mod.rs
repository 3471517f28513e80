use clap::ArgMatches;
use tracing::error;

use reaper_core::events;

mod helpers;
mod run;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches, false),
        Some(("plan", sub_matches)) => run::handle_run_command(sub_matches, true),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
