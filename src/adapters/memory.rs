use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::model::{LeaderboardEntry, LeaderboardSort, Meal, NewMeal, Outcome};
use crate::domain::ports::MealStore;
use crate::utils::error::{ArenaError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct StoredMeal {
    meal: Meal,
    deleted: bool,
    battles: u64,
    wins: u64,
}

#[derive(Debug, Default)]
struct Inner {
    meals: HashMap<u64, StoredMeal>,
    next_id: u64,
}

/// In-memory meal store. Cloning yields another handle to the same records,
/// so the CLI and the arena can share one instance.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn create_meal(&self, new: NewMeal) -> Result<Meal> {
        validation::validate_non_empty_string("name", &new.name)?;
        validation::validate_non_empty_string("cuisine", &new.cuisine)?;
        validation::validate_positive_price("price", new.price)?;

        let mut inner = self.inner.lock().await;
        // Name uniqueness holds among non-deleted meals only.
        if inner
            .meals
            .values()
            .any(|s| !s.deleted && s.meal.name == new.name)
        {
            return Err(ArenaError::DuplicateMealName { name: new.name });
        }

        inner.next_id += 1;
        let meal = Meal {
            id: inner.next_id,
            name: new.name,
            cuisine: new.cuisine,
            price: new.price,
            difficulty: new.difficulty,
            created_at: Utc::now(),
        };
        inner.meals.insert(
            meal.id,
            StoredMeal {
                meal: meal.clone(),
                deleted: false,
                battles: 0,
                wins: 0,
            },
        );
        tracing::debug!(id = meal.id, name = %meal.name, "meal created");
        Ok(meal)
    }

    async fn delete_meal(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .meals
            .get_mut(&id)
            .ok_or(ArenaError::MealNotFound { id })?;
        if stored.deleted {
            return Err(ArenaError::MealDeleted { id });
        }
        stored.deleted = true;
        tracing::debug!(id, "meal soft-deleted");
        Ok(())
    }

    async fn get_meal_by_id(&self, id: u64) -> Result<Meal> {
        let inner = self.inner.lock().await;
        let stored = inner
            .meals
            .get(&id)
            .ok_or(ArenaError::MealNotFound { id })?;
        if stored.deleted {
            return Err(ArenaError::MealDeleted { id });
        }
        Ok(stored.meal.clone())
    }

    async fn get_meal_by_name(&self, name: &str) -> Result<Meal> {
        let inner = self.inner.lock().await;
        if let Some(stored) = inner
            .meals
            .values()
            .find(|s| !s.deleted && s.meal.name == name)
        {
            return Ok(stored.meal.clone());
        }
        // A deleted holder of the name still reports as deleted, not missing.
        if let Some(stored) = inner.meals.values().find(|s| s.meal.name == name) {
            return Err(ArenaError::MealDeleted { id: stored.meal.id });
        }
        Err(ArenaError::MealNotFoundByName {
            name: name.to_string(),
        })
    }

    async fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<LeaderboardEntry> = inner
            .meals
            .values()
            .filter(|s| !s.deleted && s.battles > 0)
            .map(|s| LeaderboardEntry {
                id: s.meal.id,
                name: s.meal.name.clone(),
                cuisine: s.meal.cuisine.clone(),
                price: s.meal.price,
                difficulty: s.meal.difficulty,
                battles: s.battles,
                wins: s.wins,
                win_pct: (s.wins as f64 / s.battles as f64 * 1000.0).round() / 10.0,
            })
            .collect();

        match sort {
            LeaderboardSort::Wins => entries.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardSort::WinPct => entries.sort_by(|a, b| {
                b.win_pct
                    .partial_cmp(&a.win_pct)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        Ok(entries)
    }

    async fn update_stats(&self, id: u64, outcome: Outcome) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .meals
            .get_mut(&id)
            .ok_or(ArenaError::MealNotFound { id })?;
        if stored.deleted {
            return Err(ArenaError::MealDeleted { id });
        }
        stored.battles += 1;
        if outcome == Outcome::Win {
            stored.wins += 1;
        }
        tracing::debug!(id, ?outcome, "stats updated");
        Ok(())
    }
}
