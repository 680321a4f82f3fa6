//! Social doubles planner: library with models and the match generation engine.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{
    auto_select_sit_off_players, balance_match, balance_matches, calculate_partnership_gap,
    calculate_sit_offs, calculate_team_strength, compare_strength, form_mixed_matches,
    form_same_sex_matches, generate_matches, mix_ab_smart, optimize_competitiveness,
    perfect_sixteen_groups, sort_by_strength, validate_config,
};
pub use models::{
    ConfigError, Court, DoublesMatch, Gender, GenerationConfig, GenerationResult, Grade,
    MatchFormat, Pair, Player, PlayerId, PlusMinus, Surface, ValidationReport, Warning,
};
pub use roster::{load_roster, RosterError};
