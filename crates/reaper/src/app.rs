use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("reaper")
        .about("Delete cloud resource groups and resources that have outlived their TTL")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            with_selection_args(
                Command::new("run")
                    .about("Evaluate every account and delete expired entities (dry run unless --execute)"),
            )
            .arg(
                Arg::new("execute")
                    .long("execute")
                    .help("Actually delete candidates instead of reporting what would be deleted")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("dry-run"),
            )
            .arg(
                Arg::new("dry-run")
                    .long("dry-run")
                    .help("Report intended deletions without deleting (overrides dry_run = false in config)")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("write-inventory")
                    .long("write-inventory")
                    .help("After the run, write the updated inventory to this path")
                    .value_name("PATH")
                    .value_parser(value_parser!(std::path::PathBuf)),
            ),
        )
        .subcommand(with_selection_args(
            Command::new("plan").about("Evaluate every account and list candidates without a deletion pass"),
        ))
}

fn with_selection_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("inventory")
                .long("inventory")
                .short('i')
                .help("JSON inventory of accounts, resource groups, and resources")
                .value_name("PATH")
                .required(true)
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file layered over ~/.reaper/config.toml and ./.reaper/config.toml")
                .value_name("PATH")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("account")
                .long("account")
                .short('a')
                .help("Account to process (repeatable, replaces configured accounts)")
                .value_name("ID")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Resource group name prefix for the name-pattern strategy")
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .help("Resource group name suffix for the name-pattern strategy")
                .value_name("SUFFIX"),
        )
        .arg(
            Arg::new("default-days")
                .long("default-days")
                .help("Lifetime in days when the expiration tag is missing or invalid")
                .value_name("DAYS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("expiration-tag")
                .long("expiration-tag")
                .help("Tag holding a per-entity lifetime in days")
                .value_name("TAG"),
        )
        .arg(
            Arg::new("marker-tag")
                .long("marker-tag")
                .help("Tag marking an entity as managed by the reaper")
                .value_name("TAG"),
        )
        .arg(
            Arg::new("pinned-tag")
                .long("pinned-tag")
                .help("Tag exempting an entity from deletion")
                .value_name("TAG"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the run report as JSON")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_run_parses_overrides() {
        let matches = build_cli()
            .try_get_matches_from([
                "reaper",
                "run",
                "-i",
                "inv.json",
                "--account",
                "sub-a",
                "--account",
                "sub-b",
                "--default-days",
                "-1",
                "--execute",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        let accounts: Vec<&String> = sub.get_many::<String>("account").unwrap().collect();
        assert_eq!(accounts, vec!["sub-a", "sub-b"]);
        assert_eq!(sub.get_one::<i64>("default-days"), Some(&-1));
        assert!(sub.get_flag("execute"));
    }

    #[test]
    fn test_execute_conflicts_with_dry_run() {
        let result = build_cli().try_get_matches_from([
            "reaper",
            "run",
            "-i",
            "inv.json",
            "--execute",
            "--dry-run",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inventory_required() {
        let result = build_cli().try_get_matches_from(["reaper", "plan"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_has_no_execute_flag() {
        let result =
            build_cli().try_get_matches_from(["reaper", "plan", "-i", "inv.json", "--execute"]);
        assert!(result.is_err());
    }
}
