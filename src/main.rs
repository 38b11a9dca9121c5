use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use meal_arena::utils::{logger, validation};
use meal_arena::{
    ArenaToml, BattleArena, CliConfig, Difficulty, InMemoryMealStore, LeaderboardEntry,
    LeaderboardSort, MealStore, NewMeal, RandomOrgSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting meal-arena");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut endpoint = cli.random_endpoint.clone();
    let mut timeout = cli.timeout_seconds;
    let mut rounds = cli.rounds;
    let mut sort: LeaderboardSort = cli.sort.parse()?;
    let mut seeds = default_menu();

    if let Some(path) = &cli.config {
        let file = ArenaToml::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?;
        file.validate_config()?;
        endpoint = file.endpoint().to_string();
        timeout = file.timeout_seconds();
        rounds = file.rounds();
        sort = file.leaderboard_sort()?;
        if !file.meals.is_empty() {
            seeds = file.seed_meals()?;
        }
    }
    validation::validate_url("random.endpoint", &endpoint)?;

    let store = InMemoryMealStore::new();
    let mut menu = Vec::new();
    for seed in seeds {
        menu.push(store.create_meal(seed).await?);
    }
    anyhow::ensure!(menu.len() >= 2, "at least two meals are needed to battle");
    tracing::info!(meals = menu.len(), "menu seeded");

    let random = RandomOrgSource::new(endpoint, Duration::from_secs(timeout));
    let mut arena = BattleArena::new(random, store.clone());

    // King of the hill: the winner stays on for the next challenger.
    let mut contenders = menu.into_iter();
    let opener = contenders.next().context("empty menu")?;
    arena.prep(opener)?;

    let mut played = 0;
    for challenger in contenders {
        if played >= rounds {
            break;
        }
        arena.prep(challenger)?;
        let winner = arena.battle().await?;
        played += 1;
        tracing::info!(round = played, winner = %winner, "round complete");
    }

    let entries = store.leaderboard(sort).await?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_leaderboard(&entries);
    }

    tracing::info!("✅ {} rounds fought", played);
    Ok(())
}

fn default_menu() -> Vec<NewMeal> {
    [
        ("Margherita Pizza", "Italian", 11.50, Difficulty::Med),
        ("Pad Thai", "Thai", 9.25, Difficulty::Low),
        ("Beef Bourguignon", "French", 18.75, Difficulty::High),
        ("Tacos al Pastor", "Mexican", 8.50, Difficulty::Med),
    ]
    .into_iter()
    .map(|(name, cuisine, price, difficulty)| NewMeal {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        price,
        difficulty,
    })
    .collect()
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No battles fought yet.");
        return;
    }

    println!(
        "{:<4} {:<24} {:<12} {:>8} {:>10} {:>8} {:>6} {:>8}",
        "id", "meal", "cuisine", "price", "difficulty", "battles", "wins", "win_pct"
    );
    for entry in entries {
        println!(
            "{:<4} {:<24} {:<12} {:>8.2} {:>10} {:>8} {:>6} {:>7.1}%",
            entry.id,
            entry.name,
            entry.cuisine,
            entry.price,
            entry.difficulty.to_string(),
            entry.battles,
            entry.wins,
            entry.win_pct
        );
    }
}
