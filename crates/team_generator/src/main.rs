//! Team Generator CLI
//!
//! Split a roster into two balanced teams and inspect match history.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rand::thread_rng;
use std::env;
use std::path::Path;
use team_core::{BalanceMethod, Partition, PlayerId};
use team_generator::{
    filter_player_stats, filter_synergy, format_match, format_player_stats, format_synergy,
    format_teams, load_matches, partner_synergy, player_stats, MapPool, Roster, Settings,
    SettingsOverrides, TeamGenerator, Winner,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Team Generator");
    println!();
    println!("Usage:");
    println!("  team-generator generate <roster.json> [options]");
    println!("  team-generator swap <roster.json> <player-id> [options]");
    println!("  team-generator stats <matches.json> [--search TEXT]");
    println!();
    println!("Options:");
    println!("  --settings FILE     TOML settings file");
    println!("  --method M          basic | advanced | random");
    println!("  --multiplier N      Weight multiplier (1-10)");
    println!("  --names-only        Ignore skills, shuffle by name");
    println!("  --show-score        Show each player's score");
    println!("  --map NAME          Map to play (random from the pool if omitted)");
    println!("  --winner TEAM       Print a match record, TEAM is \"Team 1\" or \"Team 2\"");
    println!();
    println!("Examples:");
    println!("  team-generator generate players.json --method advanced --multiplier 3");
    println!("  team-generator swap players.json 4 --settings team.toml");
    println!("  team-generator stats matches.json --search alice");
}

/// Options shared by `generate` and `swap`
struct GenerateOptions {
    settings: Settings,
    map: Option<String>,
    winner: Option<Winner>,
}

fn parse_options(args: &[String]) -> Result<GenerateOptions> {
    let file = match find_flag(args, "--settings") {
        Some(path) => Settings::load(Path::new(path))?,
        None => Settings::default(),
    };
    let mut overrides = SettingsOverrides::default();
    let mut map = None;
    let mut winner = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => i += 1,
            "--method" | "-m" => {
                let value = flag_value(args, i)?;
                overrides.method = Some(value.parse::<BalanceMethod>()?);
                i += 1;
            }
            "--multiplier" | "-w" => {
                let value = flag_value(args, i)?;
                let multiplier: u32 = value
                    .parse()
                    .with_context(|| format!("invalid multiplier '{}'", value))?;
                overrides.weight_multiplier = Some(multiplier);
                i += 1;
            }
            "--map" => {
                map = Some(flag_value(args, i)?.to_string());
                i += 1;
            }
            "--winner" => {
                winner = Some(flag_value(args, i)?.parse::<Winner>()?);
                i += 1;
            }
            "--names-only" => overrides.use_only_name = true,
            "--show-score" => overrides.show_score = true,
            other => warn!("ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(GenerateOptions {
        settings: file.with_overrides(&overrides)?,
        map,
        winner,
    })
}

fn find_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value),
        None => bail!("{} requires a value", args[i]),
    }
}

fn load_roster(path: &str) -> Result<Roster> {
    Roster::load(Path::new(path)).with_context(|| format!("could not load roster {}", path))
}

fn print_teams(
    generator: &TeamGenerator,
    partition: &Partition,
    options: &GenerateOptions,
) -> Result<()> {
    let pool = MapPool::default();
    let map = match &options.map {
        Some(map) => map.clone(),
        None => pool
            .random(&mut thread_rng())
            .unwrap_or_default()
            .to_string(),
    };

    println!("Map: {}", map);
    println!();
    print!("{}", format_teams(partition, generator.settings()));

    if let Some(winner) = options.winner {
        let record = generator.record(partition, &map, winner, Utc::now());
        println!();
        println!("{}", format_match(&record));
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

fn run_generate(args: &[String]) -> Result<()> {
    let Some(roster_path) = args.first() else {
        print_usage();
        bail!("generate requires a roster file");
    };

    let roster = load_roster(roster_path)?;
    let options = parse_options(&args[1..])?;
    let generator = TeamGenerator::new(options.settings.clone());

    let partition = generator.generate(roster.players(), &mut thread_rng())?;
    print_teams(&generator, &partition, &options)
}

fn run_swap(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("swap requires a roster file and a player id");
    }

    let roster = load_roster(&args[0])?;
    let player_id: PlayerId = args[1]
        .parse()
        .with_context(|| format!("invalid player id '{}'", args[1]))?;
    let options = parse_options(&args[2..])?;
    let generator = TeamGenerator::new(options.settings.clone());

    let partition = generator.generate(roster.players(), &mut thread_rng())?;
    println!("--- Generated ---");
    print!("{}", format_teams(&partition, generator.settings()));
    println!();

    let moved = generator.swap(&partition, player_id)?;
    println!("--- After moving player {} ---", player_id);
    print_teams(&generator, &moved, &options)
}

fn run_stats(args: &[String]) -> Result<()> {
    let Some(matches_path) = args.first() else {
        print_usage();
        bail!("stats requires a matches file");
    };
    let search = find_flag(args, "--search").unwrap_or("");

    let mut matches = load_matches(Path::new(matches_path))
        .with_context(|| format!("could not load matches {}", matches_path))?;
    matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    println!("=== Matches ===");
    for record in &matches {
        println!("{}", format_match(record));
    }
    println!();

    let stats = player_stats(&matches);
    println!("=== Performance ===");
    print!("{}", format_player_stats(&filter_player_stats(&stats, search)));
    println!();

    let synergy = partner_synergy(&matches);
    println!("=== Partner Synergy ===");
    print!("{}", format_synergy(&filter_synergy(&synergy, search)));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "generate" | "gen" => run_generate(&args[2..]),
        "swap" => run_swap(&args[2..]),
        "stats" | "metrics" => run_stats(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}
