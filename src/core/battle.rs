use std::cmp::Ordering;

use crate::core::roster::Roster;
use crate::core::score::battle_score;
use crate::domain::model::{Meal, Outcome};
use crate::domain::ports::{MealStore, RandomSource};
use crate::utils::error::{ArenaError, Result};

/// Resolves battles between two prepped meals.
///
/// Owns the roster for one battle session; the random source and the store
/// are injected so the resolver stays deterministic under test.
pub struct BattleArena<R: RandomSource, S: MealStore> {
    roster: Roster,
    random: R,
    store: S,
}

impl<R: RandomSource, S: MealStore> BattleArena<R, S> {
    pub fn new(random: R, store: S) -> Self {
        Self {
            roster: Roster::new(),
            random,
            store,
        }
    }

    pub fn prep(&mut self, meal: Meal) -> Result<()> {
        self.roster.prep(meal)
    }

    pub fn clear(&mut self) {
        self.roster.clear();
    }

    pub fn combatants(&self) -> &[Meal] {
        self.roster.combatants()
    }

    /// Runs one battle between the two prepped combatants.
    ///
    /// The score gap, normalized by 100 and squashed through `tanh`, is the
    /// probability that the higher-scoring meal wins; one uniform sample
    /// decides the round. Equal scores leave a zero probability, so the
    /// second combatant always takes those. Stats are written winner first,
    /// then loser; a store failure propagates without touching the roster.
    pub async fn battle(&mut self) -> Result<String> {
        if self.roster.len() != 2 {
            return Err(ArenaError::InsufficientCombatants);
        }

        let score_a = battle_score(&self.roster.combatants()[0]);
        let score_b = battle_score(&self.roster.combatants()[1]);
        let delta = ((score_a - score_b).abs() / 100.0).tanh();
        tracing::debug!(score_a, score_b, delta, "battle scores computed");

        let sample = self.random.sample().await?;
        let first_wins = match score_a.partial_cmp(&score_b) {
            Some(Ordering::Greater) => sample < delta,
            Some(Ordering::Less) => sample >= delta,
            // Equal scores: the second combatant takes it.
            _ => false,
        };
        let (winner_index, loser_index) = if first_wins { (0, 1) } else { (1, 0) };

        let winner_id = self.roster.combatants()[winner_index].id;
        let loser_id = self.roster.combatants()[loser_index].id;
        self.store.update_stats(winner_id, Outcome::Win).await?;
        self.store.update_stats(loser_id, Outcome::Loss).await?;

        let loser = self.roster.evict(loser_index);
        let winner = &self.roster.combatants()[0];
        tracing::info!(winner = %winner.name, loser = %loser.name, sample, "battle resolved");
        Ok(winner.name.clone())
    }
}
