use crate::domain::model::{LeaderboardEntry, LeaderboardSort, Meal, NewMeal, Outcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies one uniform sample in [0,1) per call.
#[async_trait]
pub trait RandomSource: Send + Sync {
    async fn sample(&self) -> Result<f64>;
}

/// Persistence for meal records and their battle statistics.
#[async_trait]
pub trait MealStore: Send + Sync {
    async fn create_meal(&self, new: NewMeal) -> Result<Meal>;

    /// Soft delete: the record stays behind a `deleted` flag.
    async fn delete_meal(&self, id: u64) -> Result<()>;

    async fn get_meal_by_id(&self, id: u64) -> Result<Meal>;

    async fn get_meal_by_name(&self, name: &str) -> Result<Meal>;

    /// Non-deleted meals with at least one battle, sorted descending.
    async fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>>;

    async fn update_stats(&self, id: u64, outcome: Outcome) -> Result<()>;
}
