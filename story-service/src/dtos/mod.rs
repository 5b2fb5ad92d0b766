use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Minimum length of a story theme, counted after trimming whitespace.
const MIN_THEME_CHARS: usize = 3;

#[derive(Debug, Deserialize, Validate)]
pub struct StoryRequest {
    /// Absent themes default to empty so they fail the same length rule
    /// as blank ones.
    #[serde(default)]
    #[validate(custom(function = "validate_theme"))]
    pub theme: String,

    #[serde(default = "default_genre")]
    pub genre: String,

    #[serde(default = "default_length")]
    pub length: String,
}

fn default_genre() -> String {
    "fantasy".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if theme.trim().chars().count() < MIN_THEME_CHARS {
        let mut err = ValidationError::new("theme_too_short");
        err.message = Some("The theme must be at least 3 characters long".into());
        return Err(err);
    }
    Ok(())
}
