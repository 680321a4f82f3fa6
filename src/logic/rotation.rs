//! Cross-set rotation: AB-smart mixing and the fixed 16-player schedule.

use crate::logic::strength::sort_by_strength;
use crate::models::{DoublesMatch, Gender, MatchFormat, Player};

/// Player count the fixed schedule is built for.
pub const PERFECT_SIXTEEN: usize = 16;

/// Groups of four per set (indices into the strength-sorted pool). In each group the first two
/// partner against the last two.
///
/// The five sets are the parallel classes of the affine plane of order 4: every pair of the 16
/// players lands in the same group exactly once, so across five sets everyone meets everyone,
/// either as partner or as opponent.
const PERFECT_SIXTEEN_SCHEDULE: [[[usize; 4]; 4]; 5] = [
    [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]],
    [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]],
    [[0, 5, 10, 15], [1, 4, 11, 14], [2, 7, 8, 13], [3, 6, 9, 12]],
    [[0, 6, 11, 13], [1, 7, 10, 12], [2, 4, 9, 15], [3, 5, 8, 14]],
    [[0, 7, 9, 14], [1, 6, 8, 15], [2, 5, 11, 12], [3, 4, 10, 13]],
];

/// Split into halves A (first ceil(n/2)) and B, right-rotate A by `set - 1` and B by
/// `2 * (set - 1)`, then interleave A[0], B[0], A[1], B[1], ...
///
/// Set 1 is the plain interleave of the unrotated halves.
pub fn mix_ab_smart<T: Clone>(items: &[T], set_number: u8) -> Vec<T> {
    let split = items.len().div_ceil(2);
    let shift = usize::from(set_number.saturating_sub(1));

    let mut a = items[..split].to_vec();
    let mut b = items[split..].to_vec();
    rotate_right(&mut a, shift);
    rotate_right(&mut b, 2 * shift);

    let mut mixed = Vec::with_capacity(items.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => mixed.extend(x.into_iter().chain(y)),
        }
    }
    mixed
}

fn rotate_right<T>(items: &mut [T], by: usize) {
    if !items.is_empty() {
        let by = by % items.len();
        items.rotate_right(by);
    }
}

/// Schedule row for a set, or None when the table has no entry (sets outside 1..=5).
pub fn perfect_sixteen_groups(set_number: u8) -> Option<&'static [[usize; 4]; 4]> {
    usize::from(set_number)
        .checked_sub(1)
        .and_then(|i| PERFECT_SIXTEEN_SCHEDULE.get(i))
}

/// Matches from the fixed schedule when the pool is exactly 16 players of one gender and one
/// grade and the set has a table entry. None means "use the generic pipeline".
pub fn perfect_sixteen_matches(pool: &[Player], set_number: u8) -> Option<Vec<DoublesMatch>> {
    if pool.len() != PERFECT_SIXTEEN {
        return None;
    }
    let first = pool.first()?;
    let gender = first.gender?;
    let grade = first.grade?;
    if pool
        .iter()
        .any(|p| p.gender != Some(gender) || p.grade != Some(grade))
    {
        return None;
    }
    let groups = perfect_sixteen_groups(set_number)?;

    let sorted = sort_by_strength(pool);
    let label = MatchFormat::same_sex_label(gender);
    let matches = groups
        .iter()
        .map(|[a, b, c, d]| {
            DoublesMatch::new(
                [sorted[*a].clone(), sorted[*b].clone()],
                [sorted[*c].clone(), sorted[*d].clone()],
                MatchFormat::SameSex,
            )
            .with_label(label)
        })
        .collect();
    log::debug!(
        "Using fixed 16-player schedule for set {} ({})",
        set_number,
        if gender == Gender::Male { "men" } else { "women" }
    );
    Some(matches)
}
