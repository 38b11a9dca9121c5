use crate::domain::model::Meal;
use crate::utils::error::{ArenaError, Result};

/// Maximum number of combatants held at once.
pub const ROSTER_CAPACITY: usize = 2;

/// Bounded holding area for meals awaiting battle, in insertion order.
#[derive(Debug, Default)]
pub struct Roster {
    combatants: Vec<Meal>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combatant. Fails once the roster holds two.
    pub fn prep(&mut self, meal: Meal) -> Result<()> {
        if self.combatants.len() >= ROSTER_CAPACITY {
            return Err(ArenaError::RosterFull);
        }
        tracing::debug!(meal = %meal.name, "combatant prepped");
        self.combatants.push(meal);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.combatants.clear();
    }

    pub fn combatants(&self) -> &[Meal] {
        &self.combatants
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub(crate) fn evict(&mut self, index: usize) -> Meal {
        self.combatants.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Difficulty;
    use chrono::Utc;

    fn meal(id: u64, name: &str) -> Meal {
        Meal {
            id,
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            price: 10.99,
            difficulty: Difficulty::Med,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_prep_adds_combatant() {
        let mut roster = Roster::new();
        roster.prep(meal(1, "Meal 1")).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.combatants()[0].name, "Meal 1");
    }

    #[test]
    fn test_prep_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.prep(meal(1, "Meal 1")).unwrap();
        roster.prep(meal(2, "Meal 2")).unwrap();
        let names: Vec<_> = roster.combatants().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Meal 1", "Meal 2"]);
    }

    #[test]
    fn test_prep_third_combatant_fails() {
        let mut roster = Roster::new();
        roster.prep(meal(1, "Meal 1")).unwrap();
        roster.prep(meal(2, "Meal 2")).unwrap();
        let err = roster.prep(meal(3, "Meal 3")).unwrap_err();
        assert!(matches!(err, ArenaError::RosterFull));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_clear_empties_roster() {
        let mut roster = Roster::new();
        roster.prep(meal(1, "Meal 1")).unwrap();
        roster.clear();
        assert!(roster.is_empty());
    }
}
