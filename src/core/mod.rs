pub mod battle;
pub mod roster;
pub mod score;

pub use crate::domain::model::{Difficulty, Meal, NewMeal, Outcome};
pub use crate::domain::ports::{MealStore, RandomSource};
pub use crate::utils::error::Result;
