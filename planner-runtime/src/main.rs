mod inputs;
mod logging;
mod session;

use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use planner_algorithms::{generate_items, solve};
use planner_structs::{Capacity, SolveMode};
use planner_utils::{jsonify, jsonify_pretty};
use serde_json::json;
use std::{fs, io, path::PathBuf};
use tracing::info;

fn cli() -> Command {
    Command::new("planner")
        .about("Plans charity shipments with 0/1 and fractional knapsack")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "Log level (trace, debug, info, warn, error)")
                .default_value("warn")
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Computes the best selection for a capacity")
                .arg(
                    arg!(<CAPACITY> "Knapsack capacity")
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true),
                )
                .arg(arg!([MODE] "Knapsack type: '01' or 'fractional' (default from config)"))
                .arg(arg!(--items [ITEMS] "Items json string, path to json file, or '-' for stdin"))
                .arg(arg!(--config [CONFIG] "Config json string or path to json file"))
                .arg(
                    arg!(--json "Print the selection as json")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the selection json is also saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Lists the items a solve would use")
                .arg(arg!(--items [ITEMS] "Items json string, path to json file, or '-' for stdin"))
                .arg(arg!(--config [CONFIG] "Config json string or path to json file")),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a reproducible random item list as json")
                .arg(arg!(<SEED> "Random seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-weight" [MAX_WEIGHT] "Largest item weight")
                        .default_value("20")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--"max-value" [MAX_VALUE] "Largest item value")
                        .default_value("100")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("session")
                .about("Starts an interactive planner session on stdin")
                .arg(arg!(--items [ITEMS] "Items json string or path to json file"))
                .arg(arg!(--config [CONFIG] "Config json string or path to json file")),
        )
}

fn main() {
    let matches = cli().get_matches();
    logging::init_tracing(
        matches
            .get_one::<String>("log-level")
            .map(String::as_str)
            .unwrap_or("warn"),
    );

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve_command(sub_m),
        Some(("list", sub_m)) => list_command(sub_m),
        Some(("generate", sub_m)) => generate_command(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("max-weight").unwrap(),
            *sub_m.get_one::<u32>("max-value").unwrap(),
        ),
        Some(("session", sub_m)) => session_command(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve_command(sub_m: &ArgMatches) -> Result<()> {
    let config = inputs::load_config(sub_m.get_one::<String>("config"))?;
    let repository = inputs::load_items(sub_m.get_one::<String>("items"), &config)?;

    let capacity = Capacity::checked(
        *sub_m.get_one::<i64>("CAPACITY").unwrap(),
        config.max_capacity,
    )?;
    let mode = match sub_m.get_one::<String>("MODE") {
        Some(mode) => mode.parse::<SolveMode>()?,
        None => config.default_mode,
    };

    let selection = solve(mode, repository.list(), capacity);
    info!(
        %mode,
        %capacity,
        total_value = selection.total_value(),
        "selection computed"
    );

    let report = json!({
        "mode": selection.mode,
        "capacity": selection.capacity,
        "picks": selection.picks,
        "total_value": selection.total_value(),
        "total_weight": selection.total_weight(),
    });
    if let Some(path) = sub_m.get_one::<PathBuf>("output") {
        fs::write(path, jsonify(&report))?;
        info!("selection written to: {:?}", path);
    }
    if sub_m.get_flag("json") {
        println!("{}", jsonify(&report));
    } else {
        print!("{}", selection);
    }
    Ok(())
}

fn list_command(sub_m: &ArgMatches) -> Result<()> {
    let config = inputs::load_config(sub_m.get_one::<String>("config"))?;
    let repository = inputs::load_items(sub_m.get_one::<String>("items"), &config)?;
    for (index, item) in repository.list().iter().enumerate() {
        println!("{}: {}", index, item);
    }
    Ok(())
}

fn generate_command(seed: u64, num_items: usize, max_weight: u32, max_value: u32) -> Result<()> {
    if max_weight == 0 {
        return Err(anyhow!("--max-weight must be at least 1"));
    }
    let items = generate_items(seed, num_items, max_weight, max_value);
    println!("{}", jsonify_pretty(&items));
    Ok(())
}

fn session_command(sub_m: &ArgMatches) -> Result<()> {
    let config = inputs::load_config(sub_m.get_one::<String>("config"))?;
    let items = sub_m.get_one::<String>("items");
    if items.map(String::as_str) == Some("-") {
        return Err(anyhow!("A session reads commands from stdin, so --items cannot be '-'"));
    }
    let repository = inputs::load_items(items, &config)?;
    let mut session = session::Session::new(repository, config.max_capacity, config.default_mode);
    session.run(io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_parses_negative_capacity() {
        let matches = cli()
            .try_get_matches_from(["planner", "solve", "-5", "01"])
            .unwrap();
        let (_, sub_m) = matches.subcommand().unwrap();
        assert_eq!(*sub_m.get_one::<i64>("CAPACITY").unwrap(), -5);
        let config = planner_structs::PlannerConfig::default();
        assert!(Capacity::checked(-5, config.max_capacity).is_err());
    }

    #[test]
    fn test_cli_generate_defaults() {
        let matches = cli()
            .try_get_matches_from(["planner", "generate", "3", "10"])
            .unwrap();
        let (name, sub_m) = matches.subcommand().unwrap();
        assert_eq!(name, "generate");
        assert_eq!(*sub_m.get_one::<u32>("max-weight").unwrap(), 20);
        assert_eq!(*sub_m.get_one::<u32>("max-value").unwrap(), 100);
    }
}
