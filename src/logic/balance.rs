//! Match balancing: one-swap repair of matches whose teams differ too much in strength.

use crate::logic::strength::calculate_team_strength;
use crate::models::{DoublesMatch, Pair};

/// Team strength gap at or above which a swap is attempted.
pub const BALANCE_THRESHOLD: f32 = 2.0;

/// Candidate swaps as (team 1 slot, team 2 slot).
const SWAPS: [(usize, usize); 3] = [(0, 0), (0, 1), (1, 0)];

pub fn team_strength_gap(team_1: &Pair, team_2: &Pair) -> f32 {
    (calculate_team_strength(team_1) - calculate_team_strength(team_2)).abs()
}

/// A male pair against a female pair.
pub fn is_prohibited_composition(team_1: &Pair, team_2: &Pair) -> bool {
    let males = |team: &Pair| team.iter().filter(|p| p.is_male()).count();
    matches!((males(team_1), males(team_2)), (2, 0) | (0, 2))
}

/// Try the three single-player swaps and keep the one with the smallest gap, if it beats the
/// current gap. Matches already within the threshold come back unchanged.
pub fn balance_match(m: &DoublesMatch) -> DoublesMatch {
    let original_gap = team_strength_gap(&m.team_1, &m.team_2);
    if original_gap < BALANCE_THRESHOLD {
        return m.clone();
    }

    let mut best: Option<(f32, Pair, Pair)> = None;
    for (i, j) in SWAPS {
        let mut team_1 = m.team_1.clone();
        let mut team_2 = m.team_2.clone();
        std::mem::swap(&mut team_1[i], &mut team_2[j]);
        if is_prohibited_composition(&team_1, &team_2) {
            continue;
        }
        let gap = team_strength_gap(&team_1, &team_2);
        let best_gap = best.as_ref().map_or(original_gap, |(g, _, _)| *g);
        if gap < best_gap {
            best = Some((gap, team_1, team_2));
        }
    }

    match best {
        Some((gap, team_1, team_2)) => {
            log::debug!("Rebalanced match: gap {} -> {}", original_gap, gap);
            m.with_teams(team_1, team_2)
        }
        None => m.clone(),
    }
}

pub fn balance_matches(matches: &[DoublesMatch]) -> Vec<DoublesMatch> {
    matches.iter().map(balance_match).collect()
}
