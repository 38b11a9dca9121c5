use crate::adapters::random_org::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::domain::model::{Difficulty, LeaderboardSort, NewMeal};
use crate::utils::error::{ArenaError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaToml {
    pub random: Option<RandomConfig>,
    pub battle: Option<BattleConfig>,
    #[serde(default)]
    pub meals: Vec<MealConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    pub rounds: Option<u32>,
    pub leaderboard_sort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealConfig {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
}

impl ArenaToml {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ArenaError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        toml::from_str(&processed_content).map_err(|e| ArenaError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn endpoint(&self) -> &str {
        self.random
            .as_ref()
            .and_then(|r| r.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.random
            .as_ref()
            .and_then(|r| r.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT.as_secs())
    }

    pub fn rounds(&self) -> u32 {
        self.battle.as_ref().and_then(|b| b.rounds).unwrap_or(1)
    }

    pub fn leaderboard_sort(&self) -> Result<LeaderboardSort> {
        self.battle
            .as_ref()
            .and_then(|b| b.leaderboard_sort.as_deref())
            .unwrap_or("wins")
            .parse()
    }

    pub fn seed_meals(&self) -> Result<Vec<NewMeal>> {
        self.meals
            .iter()
            .map(|m| {
                Ok(NewMeal {
                    name: m.name.clone(),
                    cuisine: m.cuisine.clone(),
                    price: m.price,
                    difficulty: m.difficulty.parse::<Difficulty>()?,
                })
            })
            .collect()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("random.endpoint", self.endpoint())?;
        self.leaderboard_sort()?;

        for meal in &self.meals {
            validation::validate_non_empty_string("meals.name", &meal.name)?;
            validation::validate_non_empty_string("meals.cuisine", &meal.cuisine)?;
            validation::validate_positive_price("meals.price", meal.price)?;
            meal.difficulty.parse::<Difficulty>()?;
        }

        Ok(())
    }
}

impl Validate for ArenaToml {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
