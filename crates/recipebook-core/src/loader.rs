//! Loading the bundled recipe file
//!
//! The recipe file is a UTF-8 JSON array of objects with string fields
//! `title`, `description` and `imageUrl`. A load either yields every record in
//! file order or fails as a whole: one bad record fails the entire load.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::recipe::Recipe;

/// Ways the recipe JSON can fail to describe a list of recipes
#[derive(Debug, Error)]
pub enum MalformedData {
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON array of recipes, found {found}")]
    NotAnArray { found: &'static str },

    #[error("recipe #{index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe #{index} has an empty title")]
    EmptyTitle { index: usize },
}

impl MalformedData {
    /// Index of the offending record, when the failure is tied to one
    pub fn record_index(&self) -> Option<usize> {
        match self {
            MalformedData::InvalidRecord { index, .. } | MalformedData::EmptyTitle { index } => {
                Some(*index)
            }
            MalformedData::Syntax(_) | MalformedData::NotAnArray { .. } => None,
        }
    }
}

/// Errors that can occur while loading recipes
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Recipe file not found at path: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to read recipe file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed recipe data: {0}")]
    MalformedData(#[from] MalformedData),
}

/// Load every recipe from the file at `path`, preserving file order.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, LoadError> {
    let recipes = parse_recipes(&read_source_file(path)?)?;
    tracing::info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

fn read_source_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Decode a JSON array of recipes.
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, MalformedData> {
    let value: Value = serde_json::from_str(json).map_err(MalformedData::Syntax)?;
    let Value::Array(items) = value else {
        return Err(MalformedData::NotAnArray {
            found: json_kind(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let recipe: Recipe = serde_json::from_value(item)
                .map_err(|source| MalformedData::InvalidRecord { index, source })?;
            if recipe.title().trim().is_empty() {
                return Err(MalformedData::EmptyTitle { index });
            }
            Ok(recipe)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
