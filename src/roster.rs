//! Roster loading from CSV.
//!
//! Columns: `name,grade,gender,plus_minus,arrival,resting,unavailable`. Blank grade or gender
//! cells load as `None` (the player is then never scheduled). `unavailable` is a `;`-separated
//! list of set numbers.

use crate::models::{Gender, Grade, Player, PlusMinus, MAX_SETS};
use serde::Deserialize;
use std::io::Read;
use uuid::Uuid;

#[derive(Debug)]
pub enum RosterError {
    Csv(csv::Error),
    InvalidGrade { row: usize, value: String },
    InvalidGender { row: usize, value: String },
    InvalidSet { row: usize, value: String },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv(e) => write!(f, "Could not read roster: {}", e),
            RosterError::InvalidGrade { row, value } => {
                write!(f, "Row {}: invalid grade '{}'", row, value)
            }
            RosterError::InvalidGender { row, value } => {
                write!(f, "Row {}: invalid gender '{}'", row, value)
            }
            RosterError::InvalidSet { row, value } => {
                write!(f, "Row {}: invalid unavailable set '{}'", row, value)
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    grade: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    plus_minus: String,
    #[serde(default)]
    arrival: Option<u32>,
    #[serde(default)]
    resting: Option<bool>,
    #[serde(default)]
    unavailable: String,
}

/// Read players from CSV with a header row. Row numbers in errors are 1-based data rows.
pub fn load_roster<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for (i, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        players.push(row_to_player(i + 1, record?)?);
    }
    log::debug!("Loaded {} player(s) from roster", players.len());
    Ok(players)
}

fn row_to_player(row: usize, r: RosterRow) -> Result<Player, RosterError> {
    let grade = match r.grade.as_str() {
        "" => None,
        s => Some(
            s.parse::<u8>()
                .ok()
                .and_then(|g| Grade::new(g).ok())
                .ok_or_else(|| RosterError::InvalidGrade {
                    row,
                    value: s.to_string(),
                })?,
        ),
    };
    let gender = match r.gender.as_str() {
        "" => None,
        s => Some(Gender::parse(s).ok_or_else(|| RosterError::InvalidGender {
            row,
            value: s.to_string(),
        })?),
    };

    let mut player = Player {
        id: Uuid::new_v4(),
        name: r.name,
        grade,
        gender,
        plus_minus: PlusMinus::parse(&r.plus_minus),
        arrival_order: r.arrival.unwrap_or(row as u32),
        is_resting: r.resting.unwrap_or(false),
        unavailable: [false; MAX_SETS],
        previously_sat_out: false,
        sitting_out: false,
    };
    for set in r.unavailable.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let n = set
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=MAX_SETS as u8).contains(n))
            .ok_or_else(|| RosterError::InvalidSet {
                row,
                value: set.to_string(),
            })?;
        player.mark_unavailable(n);
    }
    Ok(player)
}
