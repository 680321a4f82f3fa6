//! Doubles match and its format.

use crate::models::player::{Gender, Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Two players sharing one side of the net.
pub type Pair = [Player; 2];

/// How a match was composed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchFormat {
    #[default]
    #[serde(rename = "Same-Sex")]
    SameSex,
    #[serde(rename = "Mixed")]
    Mixed,
}

impl MatchFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchFormat::SameSex => "Same-Sex",
            MatchFormat::Mixed => "Mixed",
        }
    }

    /// Display label for a same-sex match of the given gender.
    pub fn same_sex_label(gender: Gender) -> &'static str {
        match gender {
            Gender::Male => "Same-Sex Doubles (Men)",
            Gender::Female => "Same-Sex Doubles (Women)",
        }
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same-sex" | "same_sex" | "samesex" => Ok(MatchFormat::SameSex),
            "mixed" => Ok(MatchFormat::Mixed),
            other => Err(format!("Unknown match format: {other}")),
        }
    }
}

/// A 2v2 match. Court is None until the orchestrator assigns one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DoublesMatch {
    pub court: Option<String>,
    pub team_1: Pair,
    pub team_2: Pair,
    pub format: MatchFormat,
    /// Free-text annotation for display, e.g. "Same-Sex Doubles (Women)".
    #[serde(default)]
    pub label: Option<String>,
    /// Pinned by the caller rather than generated.
    #[serde(default)]
    pub is_manual: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DoublesMatch {
    /// A generated match with no court yet.
    pub fn new(team_1: Pair, team_2: Pair, format: MatchFormat) -> Self {
        Self {
            court: None,
            team_1,
            team_2,
            format,
            label: None,
            is_manual: false,
            notes: None,
        }
    }

    /// A caller-pinned match on a given court.
    pub fn manual(court: impl Into<String>, team_1: Pair, team_2: Pair, format: MatchFormat) -> Self {
        Self {
            court: Some(court.into()),
            is_manual: true,
            ..Self::new(team_1, team_2, format)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Same match with the teams replaced; court, format and annotations are kept.
    pub fn with_teams(&self, team_1: Pair, team_2: Pair) -> Self {
        Self {
            team_1,
            team_2,
            ..self.clone()
        }
    }

    /// Teams drawn from a pool of other matches. Format and label follow the new players:
    /// same-sex when all four share a gender, otherwise mixed with no label.
    pub fn regrouped(&self, team_1: Pair, team_2: Pair) -> Self {
        let gender = team_1[0].gender;
        let same_sex = team_1.iter().chain(team_2.iter()).all(|p| p.gender == gender);
        let (format, label) = match gender {
            Some(g) if same_sex => (
                MatchFormat::SameSex,
                Some(MatchFormat::same_sex_label(g).to_string()),
            ),
            _ => (MatchFormat::Mixed, None),
        };
        Self {
            team_1,
            team_2,
            format,
            label,
            ..self.clone()
        }
    }

    /// All four players, team 1 first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_1.iter().chain(self.team_2.iter())
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players().map(|p| p.id).collect()
    }
}
