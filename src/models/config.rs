//! Generation input/output: config, result, warnings and validation errors.

use crate::models::court::Court;
use crate::models::doubles::{DoublesMatch, MatchFormat};
use crate::models::player::{Player, PlayerId, MAX_SETS};
use serde::{Deserialize, Serialize};

/// Everything needed to generate one set's matches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Full event roster; ineligible players are filtered out during generation.
    pub players: Vec<Player>,
    pub courts: Vec<Court>,
    /// 1-based set number.
    pub set_number: u8,
    pub format: MatchFormat,
    /// Caller-pinned matches, kept verbatim. Their players are not scheduled again.
    #[serde(default)]
    pub manual_matches: Vec<DoublesMatch>,
}

impl GenerationConfig {
    pub fn new(players: Vec<Player>, courts: Vec<Court>, set_number: u8, format: MatchFormat) -> Self {
        Self {
            players,
            courts,
            set_number,
            format,
            manual_matches: Vec::new(),
        }
    }

    pub fn with_manual_matches(mut self, manual_matches: Vec<DoublesMatch>) -> Self {
        self.manual_matches = manual_matches;
        self
    }
}

/// Non-fatal advisories raised while generating.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Warning {
    /// Fewer than 4 eligible players; only manual matches are returned.
    NotEnoughPlayers,
    /// More generated matches than free courts; courts are handed out again.
    CourtsReused { courts: usize, matches: usize },
    /// Every court is taken by a manual match. Raised instead of `CourtsReused`.
    NoCourtsLeft,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NotEnoughPlayers => write!(f, "Not enough players to generate matches"),
            Warning::CourtsReused { courts, matches } => write!(
                f,
                "Only {} court(s) available for {} matches; courts will be reused",
                courts, matches
            ),
            Warning::NoCourtsLeft => {
                write!(f, "No courts left after manual matches; generated matches have no court")
            }
        }
    }
}

/// Output of one generation call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Manual matches first, then generated ones.
    pub matches: Vec<DoublesMatch>,
    /// Reserved; generation does not choose sit-outs.
    pub sit_out_players: Vec<PlayerId>,
    pub warnings: Vec<Warning>,
}

impl GenerationResult {
    pub fn generated(&self) -> impl Iterator<Item = &DoublesMatch> {
        self.matches.iter().filter(|m| !m.is_manual)
    }

    pub fn has_warning(&self, warning: &Warning) -> bool {
        self.warnings.contains(warning)
    }
}

/// Problems found by config validation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigError {
    SetNumberOutOfRange(u8),
    NoCourts,
    NoPlayers,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SetNumberOutOfRange(n) => {
                write!(f, "Set number must be between 1 and {} (got {})", MAX_SETS, n)
            }
            ConfigError::NoCourts => write!(f, "At least one court is required"),
            ConfigError::NoPlayers => write!(f, "At least one player is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of [`crate::validate_config`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ConfigError>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<ConfigError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
