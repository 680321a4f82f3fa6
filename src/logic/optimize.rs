//! Competitiveness repair: fix matches where a partnership spans too many grades.

use crate::logic::strength::{calculate_partnership_gap, sort_by_strength};
use crate::models::{DoublesMatch, Player};

/// Partnership grade gap that makes a match uncompetitive.
pub const UNCOMPETITIVE_GAP: u8 = 2;

pub fn is_uncompetitive(m: &DoublesMatch) -> bool {
    calculate_partnership_gap(&m.team_1) >= UNCOMPETITIVE_GAP
        || calculate_partnership_gap(&m.team_2) >= UNCOMPETITIVE_GAP
}

/// Uncompetitive matches are repaired two at a time by pooling their eight players into a
/// strongest-four and a weakest-four match. An odd one out is repartnered on its own.
/// Other matches pass through untouched.
pub fn optimize_competitiveness(matches: &[DoublesMatch]) -> Vec<DoublesMatch> {
    let flagged: Vec<usize> = matches
        .iter()
        .enumerate()
        .filter(|(_, m)| is_uncompetitive(m))
        .map(|(i, _)| i)
        .collect();
    if flagged.is_empty() {
        return matches.to_vec();
    }
    log::debug!("{} uncompetitive match(es) to repair", flagged.len());

    let mut out = matches.to_vec();
    let mut pairs = flagged.chunks_exact(2);
    for pair in pairs.by_ref() {
        let (strong, weak) = regroup_pair(&matches[pair[0]], &matches[pair[1]]);
        out[pair[0]] = strong;
        out[pair[1]] = weak;
    }
    if let [last] = pairs.remainder() {
        out[*last] = repartner_single(&matches[*last]);
    }
    out
}

/// Pool two matches' players; the first match gets the top four (1st+2nd vs 3rd+4th), the
/// second gets the bottom four in the same pattern. Format and label follow the new players.
pub fn regroup_pair(first: &DoublesMatch, second: &DoublesMatch) -> (DoublesMatch, DoublesMatch) {
    let pooled: Vec<Player> = first.players().chain(second.players()).cloned().collect();
    let s = sort_by_strength(&pooled);
    let strong = first.regrouped([s[0].clone(), s[1].clone()], [s[2].clone(), s[3].clone()]);
    let weak = second.regrouped([s[4].clone(), s[5].clone()], [s[6].clone(), s[7].clone()]);
    (strong, weak)
}

/// Strongest with weakest against the middle two.
pub fn repartner_single(m: &DoublesMatch) -> DoublesMatch {
    let pooled: Vec<Player> = m.players().cloned().collect();
    let s = sort_by_strength(&pooled);
    m.regrouped([s[0].clone(), s[3].clone()], [s[1].clone(), s[2].clone()])
}
