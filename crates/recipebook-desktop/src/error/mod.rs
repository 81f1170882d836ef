//! Startup errors and their user-facing descriptions
//!
//! Recipe loading is the only fatal step; there is no recovery path, so the
//! error is reported once and the process exits.

use std::fmt;

use recipebook_core::{LoadError, MalformedData};
use thiserror::Error;

/// Errors that stop the app before the window opens
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load recipes: {0}")]
    Recipes(#[from] LoadError),
}

/// A user-friendly error with context and suggestions
#[derive(Debug, Clone)]
pub struct UserFacingError {
    /// Short title for the error
    pub title: String,
    /// Detailed description of what went wrong
    pub message: String,
    /// Suggestion for how to resolve the error
    pub suggestion: Option<String>,
}

impl UserFacingError {
    /// Create a new user-facing error
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for resolution
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for UserFacingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n{suggestion}")?;
        }
        Ok(())
    }
}

impl From<&StartupError> for UserFacingError {
    fn from(error: &StartupError) -> Self {
        match error {
            StartupError::Recipes(LoadError::ResourceNotFound { path }) => UserFacingError::new(
                "Recipes Not Found",
                format!("The recipe file at {} does not exist.", path.display()),
            )
            .with_suggestion("Reinstall the app, or point `recipes_path` in config.json at a recipe file."),

            StartupError::Recipes(LoadError::Read { path, source }) => UserFacingError::new(
                "Couldn't Read Recipes",
                format!("The recipe file at {} could not be read: {source}", path.display()),
            )
            .with_suggestion("Check the file's permissions and that it is UTF-8 text."),

            StartupError::Recipes(LoadError::MalformedData(malformed)) => {
                let message = match malformed.record_index() {
                    Some(index) => format!("Recipe #{} is invalid: {malformed}", index + 1),
                    None => malformed.to_string(),
                };
                let error = UserFacingError::new("Invalid Recipe File", message);
                match malformed {
                    MalformedData::Syntax(_) | MalformedData::NotAnArray { .. } => error
                        .with_suggestion("The recipe file must be a JSON array of recipe objects."),
                    MalformedData::InvalidRecord { .. } | MalformedData::EmptyTitle { .. } => error
                        .with_suggestion(
                            "Every recipe needs a non-empty \"title\" plus \"description\" and \"imageUrl\" strings.",
                        ),
                }
            }
        }
    }
}
