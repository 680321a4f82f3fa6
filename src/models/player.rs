//! Player, Grade, Gender and PlusMinus.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Number of sets in a session; availability is tracked per set.
pub const MAX_SETS: usize = 6;

/// A grade outside 1..=5 was supplied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidGrade(pub u8);

impl std::fmt::Display for InvalidGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grade must be between {} and {} (got {})", Grade::MIN, Grade::MAX, self.0)
    }
}

impl std::error::Error for InvalidGrade {}

/// Skill tier, 1 (weakest) to 5 (strongest).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidGrade> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidGrade(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Parse the roster shorthand ("M"/"F", or the full word). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Fine-grained strength adjustment within a grade.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlusMinus {
    Plus,
    #[default]
    Neutral,
    Minus,
}

impl PlusMinus {
    /// Ordinal used by the strength sort: stronger=3, neutral=2, weaker=1.
    pub fn rank(self) -> u8 {
        match self {
            PlusMinus::Plus => 3,
            PlusMinus::Neutral => 2,
            PlusMinus::Minus => 1,
        }
    }

    /// Offset added to the grade when summing team strength.
    pub fn offset(self) -> f32 {
        match self {
            PlusMinus::Plus => 0.5,
            PlusMinus::Neutral => 0.0,
            PlusMinus::Minus => -0.5,
        }
    }

    /// Lenient parse of the roster column. Anything unrecognised is neutral.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "plus" => PlusMinus::Plus,
            "-" | "minus" => PlusMinus::Minus,
            _ => PlusMinus::Neutral,
        }
    }
}

/// A player on the session roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// None when the roster entry is incomplete; such players are never scheduled.
    pub grade: Option<Grade>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub plus_minus: PlusMinus,
    /// Arrival rank for the session (lower = arrived earlier).
    #[serde(default)]
    pub arrival_order: u32,
    #[serde(default)]
    pub is_resting: bool,
    /// `unavailable[n - 1]` is set when the player cannot play set `n`.
    #[serde(default)]
    pub unavailable: [bool; MAX_SETS],
    /// Sat out an earlier set.
    #[serde(default)]
    pub previously_sat_out: bool,
    /// Sitting out the current set.
    #[serde(default)]
    pub sitting_out: bool,
}

impl Player {
    /// Create a new player with grade and gender. Other fields start at defaults.
    pub fn new(name: impl Into<String>, grade: Grade, gender: Gender) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            grade: Some(grade),
            gender: Some(gender),
            plus_minus: PlusMinus::Neutral,
            arrival_order: 0,
            is_resting: false,
            unavailable: [false; MAX_SETS],
            previously_sat_out: false,
            sitting_out: false,
        }
    }

    pub fn with_plus_minus(mut self, plus_minus: PlusMinus) -> Self {
        self.plus_minus = plus_minus;
        self
    }

    pub fn with_arrival_order(mut self, arrival_order: u32) -> Self {
        self.arrival_order = arrival_order;
        self
    }

    /// Numeric grade, 0 when unknown.
    pub fn grade_value(&self) -> u8 {
        self.grade.map_or(0, Grade::value)
    }

    pub fn is_male(&self) -> bool {
        self.gender == Some(Gender::Male)
    }

    /// Mark the player unavailable for a 1-based set number. Out-of-range sets are ignored.
    pub fn mark_unavailable(&mut self, set_number: u8) {
        if let Some(slot) = set_slot(set_number).and_then(|i| self.unavailable.get_mut(i)) {
            *slot = true;
        }
    }

    pub fn is_unavailable_for(&self, set_number: u8) -> bool {
        set_slot(set_number)
            .and_then(|i| self.unavailable.get(i).copied())
            .unwrap_or(false)
    }

    /// Can this player be put into an automatically generated match for the given set?
    pub fn is_eligible_for(&self, set_number: u8) -> bool {
        !self.name.trim().is_empty()
            && self.grade.is_some()
            && self.gender.is_some()
            && !self.is_resting
            && !self.sitting_out
            && !self.is_unavailable_for(set_number)
    }
}

fn set_slot(set_number: u8) -> Option<usize> {
    (set_number as usize).checked_sub(1).filter(|i| *i < MAX_SETS)
}
