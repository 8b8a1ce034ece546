use recipebox::app::filter::filter;
use recipebox::domain::{Field, RecipeDraft};
use recipebox::storage::{
    ExportSink, FileExportSink, FileStorage, MemoryStorage, RecipeStore, RECIPES_KEY,
};
use recipebox::RecipeBoxError;
use std::path::Path;

fn file_store(dir: &Path, require_culture: bool) -> RecipeStore {
    RecipeStore::open(Box::new(FileStorage::new(dir).unwrap()), require_culture)
}

fn titled(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

fn tagine() -> RecipeDraft {
    RecipeDraft {
        title: "Tagine".into(),
        difficulty: "Medium".into(),
        ingredients: "a\nb\n\nc".into(),
        steps: "s1\ns2".into(),
        culture: "ma".into(),
        culture_label: "Moroccan".into(),
        dietary: vec!["Vegan".into()],
        ..Default::default()
    }
}

#[test]
fn created_recipe_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let mut store = file_store(dir.path(), true);
        store.create(tagine()).unwrap().clone()
    };

    let reopened = file_store(dir.path(), true);
    assert_eq!(reopened.recipes().len(), 1);
    assert_eq!(reopened.recipes()[0], created);
}

#[test]
fn tagine_lines_are_split_and_blank_dropped() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), true);
    let recipe = store.create(tagine()).unwrap();

    assert_eq!(recipe.ingredients, vec!["a", "b", "c"]);
    assert_eq!(recipe.steps, vec!["s1", "s2"]);
    assert_eq!(recipe.culture_label, "Moroccan");
    assert_eq!(recipe.dietary, vec!["Vegan"]);
    assert!(!recipe.favorite);
    assert!(recipe.created_at > 0);
}

#[test]
fn short_title_rejected_without_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(dir.path(), false);
    store.create(titled("Pho")).unwrap();

    for title in ["", "ab", "  ab  "] {
        let err = store.create(titled(title)).unwrap_err();
        assert!(matches!(
            err,
            RecipeBoxError::Validation {
                field: Field::Title,
                ..
            }
        ));
    }

    assert_eq!(store.recipes().len(), 1);
    assert_eq!(file_store(dir.path(), false).recipes().len(), 1);
}

#[test]
fn culture_required_only_when_configured() {
    let mut strict = RecipeStore::open(Box::new(MemoryStorage::default()), true);
    let err = strict.create(titled("Tagine")).unwrap_err();
    assert!(matches!(
        err,
        RecipeBoxError::Validation {
            field: Field::Culture,
            ..
        }
    ));
    assert!(strict.recipes().is_empty());

    let mut relaxed = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    assert!(relaxed.create(titled("Tagine")).is_ok());
}

#[test]
fn collection_is_newest_first() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    for title in ["First", "Second", "Third"] {
        store.create(titled(title)).unwrap();
    }

    let titles: Vec<&str> = store.recipes().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[test]
fn ids_are_unique() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    for _ in 0..20 {
        store.create(titled("Same title")).unwrap();
    }
    let mut ids: Vec<&str> = store.recipes().iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn double_toggle_restores_favorite_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(dir.path(), false);
    let id = store.create(titled("Tagine")).unwrap().id.clone();

    assert_eq!(store.toggle_favorite(&id), Some(true));
    assert!(file_store(dir.path(), false).recipes()[0].favorite);

    assert_eq!(store.toggle_favorite(&id), Some(false));
    assert!(!file_store(dir.path(), false).recipes()[0].favorite);
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    store.create(titled("Tagine")).unwrap();
    store.create(titled("Pho")).unwrap();
    let before = store.recipes().to_vec();

    assert!(store.delete("missing").is_none());
    assert_eq!(store.toggle_favorite("missing"), None);
    assert_eq!(store.recipes(), before.as_slice());
}

#[test]
fn delete_removes_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(dir.path(), false);
    let id = store.create(titled("Tagine")).unwrap().id.clone();
    store.create(titled("Pho")).unwrap();

    let removed = store.delete(&id).unwrap();
    assert_eq!(removed.title, "Tagine");

    let reopened = file_store(dir.path(), false);
    assert_eq!(reopened.recipes().len(), 1);
    assert_eq!(reopened.recipes()[0].title, "Pho");
}

#[test]
fn corrupt_or_missing_data_loads_empty() {
    let store = RecipeStore::open(Box::new(MemoryStorage::with_value(RECIPES_KEY, "{not json")), false);
    assert!(store.recipes().is_empty());

    let store = RecipeStore::open(Box::new(MemoryStorage::with_value(RECIPES_KEY, "{}")), false);
    assert!(store.recipes().is_empty());

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("recipes.json"), b"\x00garbage").unwrap();
    assert!(file_store(dir.path(), false).recipes().is_empty());
}

#[test]
fn older_records_without_optional_fields_load() {
    let raw = r#"[{"id":"r1","title":"Pho"}]"#;
    let store = RecipeStore::open(Box::new(MemoryStorage::with_value(RECIPES_KEY, raw)), false);
    let recipe = &store.recipes()[0];
    assert_eq!(recipe.title, "Pho");
    assert!(recipe.ingredients.is_empty());
    assert!(!recipe.favorite);
}

#[test]
fn persisted_shape_uses_camel_case_keys() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), true);
    store.create(tagine()).unwrap();

    let raw = store.storage().get(RECIPES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value[0];
    for key in [
        "id",
        "title",
        "difficulty",
        "ingredients",
        "steps",
        "sourceName",
        "sourceUrl",
        "culture",
        "cultureLabel",
        "dietary",
        "favorite",
        "createdAt",
    ] {
        assert!(record.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn export_is_pretty_printed_and_read_only() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    store.create(titled("Tagine")).unwrap();
    let before = store.recipes().to_vec();

    let payload = store.export();
    let text = String::from_utf8(payload.clone()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\""));
    assert_eq!(store.recipes(), before.as_slice());

    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileExportSink::new(dir.path().join("out"));
    let path = sink.save("recipes.json", &payload).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), payload);
}

#[test]
fn filter_empty_query_keeps_order() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    store.create(titled("Tagine")).unwrap();
    store.create(titled("Pho")).unwrap();

    let all: Vec<&str> = filter(store.recipes(), "")
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(all, vec!["Pho", "Tagine"]);
    assert!(filter(store.recipes(), "lasagna").is_empty());
}

#[test]
fn filter_matches_title_culture_and_dietary_case_insensitively() {
    let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), true);
    store.create(tagine()).unwrap();
    store
        .create(RecipeDraft {
            title: "Pho".into(),
            culture: "vn".into(),
            culture_label: "Vietnamese".into(),
            dietary: vec!["Gluten-free".into(), "Dairy-free".into()],
            ..Default::default()
        })
        .unwrap();

    for query in ["pho", "PHO", "Pho"] {
        let hits = filter(store.recipes(), query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pho");
    }

    assert_eq!(filter(store.recipes(), "moroc")[0].title, "Tagine");
    assert_eq!(filter(store.recipes(), "vegan")[0].title, "Tagine");
    // joined tags match across the boundary
    assert_eq!(filter(store.recipes(), "free dairy")[0].title, "Pho");
}
