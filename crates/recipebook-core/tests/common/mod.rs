//! Shared fixtures for recipebook-core integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// The two-recipe document used by the end-to-end scenarios
pub const PASTA_AND_SOUP: &str = r#"[
    {"title": "Pasta", "description": "Simple pasta", "imageUrl": "http://x/1.jpg"},
    {"title": "Soup", "description": "Hot soup", "imageUrl": "http://x/2.jpg"}
]"#;

/// Write `contents` to `recipes.json` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn write_recipe_file(contents: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Serialize `(title, description, image_url)` triples as a recipe document
pub fn recipes_json(records: &[(String, String, String)]) -> String {
    let values: Vec<serde_json::Value> = records
        .iter()
        .map(|(title, description, image_url)| {
            serde_json::json!({
                "title": title,
                "description": description,
                "imageUrl": image_url,
            })
        })
        .collect();
    serde_json::to_string(&values).unwrap()
}
