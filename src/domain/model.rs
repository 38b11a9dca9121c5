use crate::utils::error::ArenaError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preparation difficulty of a meal. Harder meals carry a smaller score penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    pub fn modifier(self) -> f64 {
        match self {
            Difficulty::High => 1.0,
            Difficulty::Med => 2.0,
            Difficulty::Low => 3.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            _ => Err(ArenaError::InvalidField {
                field: "difficulty".to_string(),
                value: s.to_string(),
                reason: "Expected LOW, MED or HIGH".to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// A stored meal record. Immutable once loaded into a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a meal; the store assigns id and creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

/// Result of a battle from one combatant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Sort key for leaderboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardSort {
    Wins,
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            _ => Err(ArenaError::InvalidField {
                field: "sort".to_string(),
                value: s.to_string(),
                reason: "Expected wins or win_pct".to_string(),
            }),
        }
    }
}

/// One leaderboard row. `win_pct` is a percentage rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u64,
    pub wins: u64,
    pub win_pct: f64,
}
