//! Advisory config validation. Generation does not call this itself.

use crate::models::{ConfigError, GenerationConfig, ValidationReport, MAX_SETS};

pub fn validate_config(config: &GenerationConfig) -> ValidationReport {
    let mut errors = Vec::new();
    if config.set_number == 0 || usize::from(config.set_number) > MAX_SETS {
        errors.push(ConfigError::SetNumberOutOfRange(config.set_number));
    }
    if config.courts.is_empty() {
        errors.push(ConfigError::NoCourts);
    }
    if config.players.is_empty() {
        errors.push(ConfigError::NoPlayers);
    }
    ValidationReport::from_errors(errors)
}
