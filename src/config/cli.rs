use crate::adapters::random_org::DEFAULT_ENDPOINT;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "meal-arena")]
#[command(about = "Pit meals against each other in randomized battles")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub random_endpoint: String,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "3", help = "Number of battle rounds to run")]
    pub rounds: u32,

    #[arg(long, default_value = "wins", help = "Leaderboard sort: wins or win_pct")]
    pub sort: String,

    #[arg(long, help = "TOML file with arena settings and seed meals")]
    pub config: Option<String>,

    #[arg(long, help = "Print the leaderboard as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
