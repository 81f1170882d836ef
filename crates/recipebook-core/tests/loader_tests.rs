//! Loading recipe files from disk

mod common;

use common::{PASTA_AND_SOUP, recipes_json, write_recipe_file};
use proptest::prelude::*;
use recipebook_core::{LoadError, MalformedData, Recipe, day_number, load_recipes};
use tempfile::TempDir;

#[test]
fn test_load_pasta_and_soup_in_order() {
    let (_dir, path) = write_recipe_file(PASTA_AND_SOUP);
    let recipes = load_recipes(&path).unwrap();

    let labelled: Vec<(usize, &str, &str)> = recipes
        .iter()
        .enumerate()
        .map(|(i, r)| (day_number(i), r.title(), r.description()))
        .collect();
    assert_eq!(
        labelled,
        vec![(1, "Pasta", "Simple pasta"), (2, "Soup", "Hot soup")]
    );
}

#[test]
fn test_load_empty_array() {
    let (_dir, path) = write_recipe_file("[]");
    let recipes = load_recipes(&path).unwrap();
    assert!(recipes.is_empty());
}

#[test]
fn test_missing_file_is_resource_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_recipes(&path).unwrap_err();
    match err {
        LoadError::ResourceNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_fields_is_malformed_data() {
    let (_dir, path) = write_recipe_file(r#"{"title": "x"}"#);
    let err = load_recipes(&path).unwrap_err();
    assert!(matches!(err, LoadError::MalformedData(_)));

    let (_dir, path) = write_recipe_file(r#"[{"title": "x"}]"#);
    let err = load_recipes(&path).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedData(MalformedData::InvalidRecord { index: 0, .. })
    ));
}

#[test]
fn test_one_bad_record_fails_whole_load() {
    let json = r#"[
        {"title": "Pasta", "description": "Simple pasta", "imageUrl": "http://x/1.jpg"},
        {"title": "Soup", "description": "Hot soup"},
        {"title": "Salad", "description": "Green", "imageUrl": "http://x/3.jpg"}
    ]"#;
    let (_dir, path) = write_recipe_file(json);
    let err = load_recipes(&path).unwrap_err();
    let LoadError::MalformedData(malformed) = err else {
        panic!("expected MalformedData");
    };
    assert_eq!(malformed.record_index(), Some(1));
}

#[test]
fn test_invalid_utf8_is_read_error() {
    let (_dir, path) = write_recipe_file([0xff, 0xfe, b'[', b']']);
    let err = load_recipes(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn test_error_messages_mention_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    let err = load_recipes(&path).unwrap_err();
    assert!(err.to_string().contains("recipes.json"));
}

proptest! {
    #[test]
    fn prop_load_round_trips_fields_in_order(
        records in prop::collection::vec(
            ("[A-Za-z][A-Za-z ]{0,20}", ".{0,60}", "(https?://[a-z]{1,8}/[0-9]{1,4}\\.jpg)?"),
            0..40,
        )
    ) {
        let (_dir, path) = write_recipe_file(recipes_json(&records));
        let loaded = load_recipes(&path).unwrap();

        let expected: Vec<Recipe> = records
            .iter()
            .map(|(t, d, u)| Recipe::new(t.clone(), d.clone(), u.clone()))
            .collect();
        prop_assert_eq!(loaded, expected);
    }
}
