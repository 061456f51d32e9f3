use assert2::{check, let_assert};
use recipe_finder::{Catalog, CatalogError, MatchMode, search_by_ingredients};
use std::io::Write;
use tempfile::NamedTempFile;

const PANCAKES: &str = r#"[
  {
    "id": "p1",
    "name": "Pancakes",
    "description": "Fluffy breakfast pancakes",
    "ingredients": [
      { "name": "flour", "amount": "1", "unit": "cup" },
      { "name": "milk", "amount": "1", "unit": "cup" },
      { "name": "eggs", "amount": "1", "unit": "large" },
      { "name": "maple syrup", "amount": "2", "unit": "tbsp", "optional": true }
    ],
    "instructions": ["Whisk.", "Fry."],
    "cookingTime": 15,
    "prepTime": 5,
    "servings": 4,
    "difficulty": "Easy",
    "cuisine": "American",
    "tags": ["breakfast", "sweet"]
  }
]"#;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write catalog");
    file
}

#[test]
fn load_catalog_from_file_and_search_it() {
    let file = write_catalog(PANCAKES);

    let_assert!(Ok(catalog) = Catalog::load(file.path()));
    check!(catalog.len() == 1);

    let results = search_by_ingredients(catalog.recipes(), &["egg", "milk"], MatchMode::Some);
    check!(results.len() == 1);
    check!(results[0].match_score == 67);
    check!(results[0].missing_ingredients == vec!["flour"]);
}

#[test]
fn duplicate_ids_in_file_are_rejected() {
    let doubled = format!(
        "[{0}, {0}]",
        PANCAKES.trim().trim_start_matches('[').trim_end_matches(']')
    );
    let file = write_catalog(&doubled);

    let_assert!(Err(CatalogError::DuplicateId(id)) = Catalog::load(file.path()));
    check!(id == "p1");
}

#[test]
fn unknown_difficulty_is_a_parse_error() {
    let file = write_catalog(&PANCAKES.replace("\"Easy\"", "\"Trivial\""));
    let_assert!(Err(CatalogError::Parse(_)) = Catalog::load(file.path()));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let_assert!(Err(CatalogError::Io { path, .. }) = Catalog::load(&dir.path().join("missing.json")));
    check!(path.ends_with("missing.json"));
}
