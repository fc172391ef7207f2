use test_fixtures::{fixture_exists, list_fixtures, load_backend_fixture, load_fixture_value};

#[test]
fn every_backend_fixture_parses() {
    let paths = list_fixtures("retrieval");
    assert!(paths.len() >= 4, "expected at least 4 fixtures, got {}", paths.len());
    for path in paths {
        let name = path.file_stem().unwrap().to_str().unwrap().to_string();
        let fixture = load_backend_fixture(&name);
        assert!(!fixture.description.is_empty(), "{name} has no description");
        assert!(!fixture.question.is_empty(), "{name} has no question");
    }
}

#[test]
fn raw_values_load() {
    assert!(fixture_exists("retrieval/structured_answer.json"));
    let value = load_fixture_value("retrieval/structured_answer.json");
    assert!(value.get("payload").is_some());
}
