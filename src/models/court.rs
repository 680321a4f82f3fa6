//! Courts available to the session.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Grass,
    #[default]
    Hard,
}

/// A court. The order courts are supplied in is the order they are handed out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub name: String,
    #[serde(default)]
    pub surface: Surface,
}

impl Court {
    pub fn new(name: impl Into<String>, surface: Surface) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }

    /// Hard court with the given name.
    pub fn hard(name: impl Into<String>) -> Self {
        Self::new(name, Surface::Hard)
    }
}
