//! Field-level validation shared by the aggregates.
//!
//! Limits mirror the column sizes of the store schema. Lengths are counted in
//! characters, not bytes.

/// Non-blank text no longer than `max` characters
pub fn required_text(value: &str, field: &str, max: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    max_length(value, field, max)
}

/// Optional text no longer than `max` characters
pub fn optional_text(value: Option<&str>, field: &str, max: usize) -> Result<(), String> {
    match value {
        Some(v) => max_length(v, field, max),
        None => Ok(()),
    }
}

pub fn max_length(value: &str, field: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must not exceed {} characters", field, max));
    }
    Ok(())
}

pub fn non_negative(value: i32, field: &str) -> Result<(), String> {
    if value < 0 {
        return Err(format!("{} must not be negative", field));
    }
    Ok(())
}
