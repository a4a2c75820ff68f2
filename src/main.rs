// Crease entry point: form balanced teams for the next match.
//
// Run sequence:
// 1. Initialize tracing (stderr)
// 2. Load config
// 3. Import the player list and captain log
// 4. Filter to confirmed players, enforce the minimum
// 5. Balance the two sides
// 6. Pick a captain per side, honoring the rotation window
// 7. Print the team sheet (plain text, or JSON with --json)

use std::path::Path;

use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crease::config;
use crease::import;
use crease::team::{balance_teams, select_captain, BalancedTeams, Team};

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let json_output = std::env::args().any(|arg| arg == "--json");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "config loaded: min_players={}, rotation window={}",
        config.match_settings.min_players, config.rotation.window
    );

    // 3. Import data files
    let entries = import::load_players(Path::new(&config.data.players))
        .context("failed to load player list")?;
    let captain_log = import::load_captain_log(Path::new(&config.data.captains))
        .context("failed to load captain log")?;

    // 4. Confirmed players only
    let players = import::confirmed_players(&entries);
    info!(
        "{} of {} players confirmed going",
        players.len(),
        entries.len()
    );
    if players.len() < config.match_settings.min_players {
        bail!(
            "only {} confirmed players, need at least {}",
            players.len(),
            config.match_settings.min_players
        );
    }

    // 5. Balance
    let mut rng = match config.engine.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut teams = balance_teams(&players, &mut rng);

    // 6. Captains, one per side from the same rotation window
    let recent = captain_log.recent_captains(config.rotation.window);
    teams.red.captain_id = select_captain(&teams.red.players, &recent).map(|p| p.id.clone());
    teams.blue.captain_id = select_captain(&teams.blue.players, &recent).map(|p| p.id.clone());

    // 7. Output
    if json_output {
        print_json(&config, &teams)?;
    } else {
        print_team_sheet(&config, &teams);
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crease=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

#[derive(Serialize)]
struct TeamSheet<'a> {
    red_name: &'a str,
    blue_name: &'a str,
    teams: &'a BalancedTeams,
}

fn print_json(config: &config::Config, teams: &BalancedTeams) -> anyhow::Result<()> {
    let sheet = TeamSheet {
        red_name: &config.match_settings.red_name,
        blue_name: &config.match_settings.blue_name,
        teams,
    };
    let out = serde_json::to_string_pretty(&sheet).context("failed to serialize team sheet")?;
    println!("{out}");
    Ok(())
}

fn print_team_sheet(config: &config::Config, teams: &BalancedTeams) {
    print_side(&config.match_settings.red_name, &teams.red);
    println!();
    print_side(&config.match_settings.blue_name, &teams.blue);
}

fn print_side(name: &str, team: &Team) {
    println!(
        "{name} (total {:.0}, avg {:.1})",
        team.total_rating(),
        team.mean_rating()
    );
    for player in &team.players {
        let marker = match &team.captain_id {
            Some(id) if *id == player.id => " (c)",
            _ => "",
        };
        println!(
            "  {:<20}{marker:<5} {:>6.1}  {} / {}",
            player.name, player.rating, player.role, player.batting_position
        );
    }
}
