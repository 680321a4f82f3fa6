//! Match formation: group the eligible pool into 2v2 matches for a set.

use crate::logic::rotation::mix_ab_smart;
use crate::logic::strength::sort_by_strength;
use crate::models::{DoublesMatch, Gender, MatchFormat, Player};
use std::collections::BTreeMap;

/// Players left over after a pairing pass: (men, women).
type Leftovers = (Vec<Player>, Vec<Player>);

/// Split the pool by gender, keeping input order. Players without a gender are dropped.
pub fn split_by_gender(pool: &[Player]) -> (Vec<Player>, Vec<Player>) {
    let men = pool.iter().filter(|p| p.gender == Some(Gender::Male)).cloned().collect();
    let women = pool.iter().filter(|p| p.gender == Some(Gender::Female)).cloned().collect();
    (men, women)
}

/// Same-sex matches per gender in blocks of 4; leftovers of both genders are then paired into
/// mixed matches. Anyone still left over sits this set out.
pub fn form_same_sex_matches(pool: &[Player], set_number: u8) -> Vec<DoublesMatch> {
    let (men, women) = split_by_gender(pool);
    let mut matches = Vec::new();
    let mut leftover_men = Vec::new();
    let mut leftover_women = Vec::new();

    for (gender, players, leftovers) in [
        (Gender::Male, men, &mut leftover_men),
        (Gender::Female, women, &mut leftover_women),
    ] {
        let rotated = mix_ab_smart(&sort_by_strength(&players), set_number);
        let mut blocks = rotated.chunks_exact(4);
        for block in blocks.by_ref() {
            matches.push(
                DoublesMatch::new(
                    [block[0].clone(), block[1].clone()],
                    [block[2].clone(), block[3].clone()],
                    MatchFormat::SameSex,
                )
                .with_label(MatchFormat::same_sex_label(gender)),
            );
        }
        leftovers.extend_from_slice(blocks.remainder());
    }

    let (mixed, (unused_men, unused_women)) = pair_mixed(&leftover_men, &leftover_women);
    if !unused_men.is_empty() || !unused_women.is_empty() {
        log::debug!(
            "Set {}: {} man/men and {} woman/women left without a match",
            set_number,
            unused_men.len(),
            unused_women.len()
        );
    }
    matches.extend(mixed);
    matches
}

/// Mixed matches tier by tier (highest grade first); per-tier leftovers get one more mixed
/// pairing pass at the end.
pub fn form_mixed_matches(pool: &[Player], set_number: u8) -> Vec<DoublesMatch> {
    let (men, women) = split_by_gender(pool);
    let mut tiers: BTreeMap<u8, Leftovers> = BTreeMap::new();
    for p in sort_by_strength(&men) {
        tiers.entry(p.grade_value()).or_default().0.push(p);
    }
    for p in sort_by_strength(&women) {
        tiers.entry(p.grade_value()).or_default().1.push(p);
    }

    let mut matches = Vec::new();
    let mut leftover_men = Vec::new();
    let mut leftover_women = Vec::new();
    for (_, (tier_men, tier_women)) in tiers.into_iter().rev() {
        let (formed, (men_left, women_left)) = pair_mixed(
            &mix_ab_smart(&tier_men, set_number),
            &mix_ab_smart(&tier_women, set_number),
        );
        matches.extend(formed);
        leftover_men.extend(men_left);
        leftover_women.extend(women_left);
    }

    let (formed, _) = pair_mixed(
        &sort_by_strength(&leftover_men),
        &sort_by_strength(&leftover_women),
    );
    matches.extend(formed);
    matches
}

/// Pair men and women into mixed matches: (m[i], w[i]) vs (m[i+1], w[i+1]).
/// Forms min(men/2, women/2) matches and returns the unused players.
pub fn pair_mixed(men: &[Player], women: &[Player]) -> (Vec<DoublesMatch>, Leftovers) {
    let count = (men.len() / 2).min(women.len() / 2);
    let matches = (0..count)
        .map(|i| {
            let (m, w) = (&men[2 * i..2 * i + 2], &women[2 * i..2 * i + 2]);
            DoublesMatch::new(
                [m[0].clone(), w[0].clone()],
                [m[1].clone(), w[1].clone()],
                MatchFormat::Mixed,
            )
        })
        .collect();
    (matches, (men[2 * count..].to_vec(), women[2 * count..].to_vec()))
}
