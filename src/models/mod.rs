//! Data structures for the doubles planner: players, courts, matches, generation config.

mod config;
mod court;
mod doubles;
mod player;

pub use config::{ConfigError, GenerationConfig, GenerationResult, ValidationReport, Warning};
pub use court::{Court, Surface};
pub use doubles::{DoublesMatch, MatchFormat, Pair};
pub use player::{Gender, Grade, InvalidGrade, Player, PlayerId, PlusMinus, MAX_SETS};
