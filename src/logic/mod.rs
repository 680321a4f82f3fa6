//! Match generation engine: strength model, rotation, formation, balancing, optimization.

mod balance;
mod formation;
mod generate;
mod optimize;
mod rotation;
mod sit_out;
mod strength;
mod validate;

pub use balance::{
    balance_match, balance_matches, is_prohibited_composition, team_strength_gap, BALANCE_THRESHOLD,
};
pub use formation::{form_mixed_matches, form_same_sex_matches, pair_mixed, split_by_gender};
pub use generate::{
    assign_courts, eligible_players, generate_matches, MIN_PLAYERS, UNASSIGNED_COURT,
};
pub use optimize::{
    is_uncompetitive, optimize_competitiveness, regroup_pair, repartner_single, UNCOMPETITIVE_GAP,
};
pub use rotation::{
    mix_ab_smart, perfect_sixteen_groups, perfect_sixteen_matches, PERFECT_SIXTEEN,
};
pub use sit_out::{auto_select_sit_off_players, calculate_sit_offs};
pub use strength::{
    calculate_partnership_gap, calculate_team_strength, compare_strength, sort_by_strength,
};
pub use validate::validate_config;
