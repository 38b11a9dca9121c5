use crate::domain::model::Meal;

/// Deterministic battle strength of a meal:
/// `price * len(cuisine) - difficulty modifier`.
pub fn battle_score(meal: &Meal) -> f64 {
    let cuisine_len = meal.cuisine.chars().count() as f64;
    meal.price * cuisine_len - meal.difficulty.modifier()
}
