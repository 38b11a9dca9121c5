pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::memory::InMemoryMealStore;
pub use adapters::random_org::RandomOrgSource;
pub use config::ArenaToml;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use core::battle::BattleArena;
pub use core::roster::Roster;
pub use core::score::battle_score;
pub use domain::model::{Difficulty, LeaderboardEntry, LeaderboardSort, Meal, NewMeal, Outcome};
pub use domain::ports::{MealStore, RandomSource};
pub use utils::error::{ArenaError, Result};
