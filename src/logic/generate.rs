//! Match generation for one set: filter, form, balance, optimize, assign courts.

use crate::logic::balance::balance_matches;
use crate::logic::formation::{form_mixed_matches, form_same_sex_matches};
use crate::logic::optimize::optimize_competitiveness;
use crate::logic::rotation::perfect_sixteen_matches;
use crate::models::{
    Court, DoublesMatch, GenerationConfig, GenerationResult, MatchFormat, Player, PlayerId, Warning,
};
use std::collections::HashSet;

/// Need at least one full match.
pub const MIN_PLAYERS: usize = 4;

/// Courts the fixed 16-player schedule needs.
const PERFECT_SIXTEEN_COURTS: usize = 4;

/// Court label used when every court is taken by manual matches.
pub const UNASSIGNED_COURT: &str = "Unassigned";

/// Generate the matches for `config.set_number`.
///
/// 1. Keep eligible players for the set, minus anyone in a manual match.
/// 2. Fewer than 4 left: return the manual matches with a warning.
/// 3. Form matches (fixed 16-player schedule when it applies, else by format).
/// 4. Balance team strength, then repair uncompetitive partnerships.
/// 5. Assign courts left over after manual matches, reusing them cyclically.
///
/// Never fails; degraded outcomes are reported as warnings.
pub fn generate_matches(config: &GenerationConfig) -> GenerationResult {
    let mut warnings = Vec::new();
    let pool = eligible_players(config);
    log::debug!(
        "Set {}: {} eligible player(s), {} manual match(es)",
        config.set_number,
        pool.len(),
        config.manual_matches.len()
    );

    if pool.len() < MIN_PLAYERS {
        warnings.push(Warning::NotEnoughPlayers);
        return GenerationResult {
            matches: config.manual_matches.clone(),
            sit_out_players: Vec::new(),
            warnings,
        };
    }

    let formed = perfect_sixteen_for(config, &pool).unwrap_or_else(|| match config.format {
        MatchFormat::SameSex => form_same_sex_matches(&pool, config.set_number),
        MatchFormat::Mixed => form_mixed_matches(&pool, config.set_number),
    });
    // Balancer swaps must not run after partnership repair.
    let balanced = balance_matches(&formed);
    let optimized = optimize_competitiveness(&balanced);
    let generated = assign_courts(
        &optimized,
        &config.courts,
        config.manual_matches.len(),
        &mut warnings,
    );

    let mut matches = config.manual_matches.clone();
    matches.extend(generated);
    GenerationResult {
        matches,
        sit_out_players: Vec::new(),
        warnings,
    }
}

/// Roster players who can be scheduled automatically for the configured set.
pub fn eligible_players(config: &GenerationConfig) -> Vec<Player> {
    let pinned: HashSet<PlayerId> = config
        .manual_matches
        .iter()
        .flat_map(DoublesMatch::player_ids)
        .collect();
    config
        .players
        .iter()
        .filter(|p| p.is_eligible_for(config.set_number) && !pinned.contains(&p.id))
        .cloned()
        .collect()
}

fn perfect_sixteen_for(config: &GenerationConfig, pool: &[Player]) -> Option<Vec<DoublesMatch>> {
    if !config.manual_matches.is_empty() || config.courts.len() < PERFECT_SIXTEEN_COURTS {
        return None;
    }
    perfect_sixteen_matches(pool, config.set_number)
}

/// Stamp courts onto generated matches. The first `reserved` courts belong to manual matches;
/// the rest are handed out by position, wrapping around when matches outnumber courts.
pub fn assign_courts(
    matches: &[DoublesMatch],
    courts: &[Court],
    reserved: usize,
    warnings: &mut Vec<Warning>,
) -> Vec<DoublesMatch> {
    let free: Vec<&str> = courts
        .iter()
        .skip(reserved)
        .map(|c| c.name.as_str())
        .collect();

    if free.is_empty() {
        if !matches.is_empty() {
            warnings.push(Warning::NoCourtsLeft);
        }
        return matches
            .iter()
            .map(|m| DoublesMatch {
                court: Some(UNASSIGNED_COURT.to_string()),
                ..m.clone()
            })
            .collect();
    }

    if matches.len() > free.len() {
        warnings.push(Warning::CourtsReused {
            courts: free.len(),
            matches: matches.len(),
        });
    }
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| DoublesMatch {
            court: Some(free[i % free.len()].to_string()),
            ..m.clone()
        })
        .collect()
}
