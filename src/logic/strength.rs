//! Strength model: who is stronger, team strength and partnership gap.

use crate::models::{Pair, Player};
use std::cmp::Ordering;

/// Strongest first: grade desc, then modifier desc.
/// Ties fall back to arrival order, name and id so sorting is reproducible.
pub fn compare_strength(a: &Player, b: &Player) -> Ordering {
    b.grade_value()
        .cmp(&a.grade_value())
        .then_with(|| b.plus_minus.rank().cmp(&a.plus_minus.rank()))
        .then_with(|| a.arrival_order.cmp(&b.arrival_order))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Copy of `players`, strongest first.
pub fn sort_by_strength(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(compare_strength);
    sorted
}

/// Sum of grades, each nudged by half a grade for a plus/minus modifier.
pub fn calculate_team_strength(team: &Pair) -> f32 {
    team.iter()
        .map(|p| p.grade_value() as f32 + p.plus_minus.offset())
        .sum()
}

/// Grade difference between the two partners (modifiers ignored).
pub fn calculate_partnership_gap(team: &Pair) -> u8 {
    team[0].grade_value().abs_diff(team[1].grade_value())
}
