use std::path::PathBuf;

use clap::ArgMatches;
use reaper_config::{ConfigLayer, PolicyLayer, SelectionLayer};

/// Translate command-line flags into the highest-priority config layer.
///
/// `plan` commands have no dry-run flags; their mode is fixed.
pub(crate) fn config_overrides(matches: &ArgMatches, plan: bool) -> ConfigLayer {
    let dry_run = if plan {
        None
    } else if matches.get_flag("execute") {
        Some(false)
    } else if matches.get_flag("dry-run") {
        Some(true)
    } else {
        None
    };

    ConfigLayer {
        accounts: matches
            .get_many::<String>("account")
            .map(|values| values.cloned().collect()),
        dry_run,
        selection: SelectionLayer {
            resource_group_prefix: matches.get_one::<String>("prefix").cloned(),
            resource_group_suffix: matches.get_one::<String>("suffix").cloned(),
        },
        policy: PolicyLayer {
            default_expiration_days: matches.get_one::<i64>("default-days").copied(),
            expiration_tag: matches.get_one::<String>("expiration-tag").cloned(),
            marker_tag: matches.get_one::<String>("marker-tag").cloned(),
            pinned_tag: matches.get_one::<String>("pinned-tag").cloned(),
        },
    }
}

/// Path given to `--write-inventory`, if the subcommand defines it.
pub(crate) fn write_inventory_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .try_get_one::<PathBuf>("write-inventory")
        .ok()
        .flatten()
        .cloned()
}
