//! Input validation utilities
//!
//! Payload structs carry derive-based rules; these helpers cover the inputs
//! that arrive outside a payload (filters, moderator notices, free text).

use crate::constants;

/// Validate a simulation difficulty level
pub fn validate_level(level: i32) -> Result<(), &'static str> {
    if level < constants::MIN_SIMULATION_LEVEL || level > constants::MAX_SIMULATION_LEVEL {
        return Err("Level must be between 1 and 3");
    }
    Ok(())
}

/// Validate a moderator notice before transmission
pub fn validate_notice(notice: &str) -> Result<(), &'static str> {
    if notice.len() as u64 > constants::MAX_NOTICE_LENGTH {
        return Err("Notice must be at most 2000 characters");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}
