//! Sit-off helpers: how many players must sit a set, and who.
//!
//! Not used by [`crate::generate_matches`]; callers that want to pick sit-offs up front run these
//! and mark the chosen players `sitting_out` before generating.

use crate::models::{Player, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Players needed per court.
const PLAYERS_PER_COURT: usize = 4;

/// Number of players who cannot play this set: the overflow beyond court capacity, or the
/// remainder that does not fill a match when everyone fits.
pub fn calculate_sit_offs(eligible: usize, courts: usize) -> usize {
    let capacity = courts * PLAYERS_PER_COURT;
    if eligible > capacity {
        eligible - capacity
    } else {
        eligible % PLAYERS_PER_COURT
    }
}

/// Choose `count` players to sit out.
///
/// 1. Players who have not sat out before go first.
/// 2. Then latest arrivals first.
/// 3. Remaining ties are broken randomly.
pub fn auto_select_sit_off_players<R: Rng + ?Sized>(
    players: &[Player],
    count: usize,
    rng: &mut R,
) -> Vec<PlayerId> {
    let mut candidates: Vec<&Player> = players.iter().collect();
    candidates.shuffle(rng);
    candidates.sort_by_key(|p| (p.previously_sat_out, std::cmp::Reverse(p.arrival_order)));
    candidates.into_iter().take(count).map(|p| p.id).collect()
}
