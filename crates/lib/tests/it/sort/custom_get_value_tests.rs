//! Custom value extraction hooks.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use semisort::{
    Doc, doc,
    doc::Value,
    sort::{Criterion, SortOptions, sort},
};

use crate::helpers::*;

fn authors() -> Vec<Doc> {
    vec![
        doc! { "id" => 1, "author" => doc! { "firstname" => "William", "lastname" => "Thompson" } },
        doc! { "id" => 2, "author" => doc! { "firstname" => "John", "lastname" => "Smith" } },
        doc! { "id" => 3, "author" => doc! { "firstname" => "Daniel", "lastname" => "Wilson" } },
    ]
}

#[test]
fn test_hook_replaces_field_access() {
    let documents = authors();
    let criteria = vec![Criterion::new("firstname").priorities(["John", "Daniel"])];
    let options = SortOptions::new().custom_get_value(|doc: &Doc, field: &str| {
        Ok(doc
            .get("author")
            .and_then(|author| author.as_doc())
            .and_then(|author| author.get(field))
            .cloned()
            .unwrap_or_default())
    });

    let sorted = sort(&documents, &criteria, &options).unwrap();
    assert_eq!(field_of(sorted, "id"), ["2", "3", "1"]);
}

#[test]
fn test_hook_is_used_for_every_criterion() {
    let documents = authors();
    let criteria = vec![
        Criterion::new("first").priorities(["nobody"]),
        Criterion::new("second").priorities(["Wilson"]),
    ];
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let options = SortOptions::new().custom_get_value(move |doc: &Doc, _field: &str| {
        seen.fetch_add(1, Ordering::Relaxed);
        Ok(doc.get_path("author.lastname").cloned().unwrap_or_default())
    });

    let sorted = sort(&documents, &criteria, &options).unwrap();
    assert_eq!(field_of(sorted, "id"), ["3", "1", "2"]);
    assert!(calls.load(Ordering::Relaxed) > 0);
}

#[test]
fn test_hook_bypasses_based_on() {
    let documents = vec![
        Doc::new().with("t", "Magazine").with("id", 1),
        Doc::new().with("t", "Newspaper").with("id", 2),
    ];
    let criteria = vec![
        Criterion::new("t")
            .based_on("t", "Magazine")
            .priorities(["Newspaper"]),
    ];
    let options =
        SortOptions::new().custom_get_value(|doc: &Doc, field: &str| {
            Ok(doc.get(field).cloned().unwrap_or_default())
        });

    let sorted = sort(&documents, &criteria, &options).unwrap();
    assert_eq!(field_of(sorted, "id"), ["2", "1"]);
}

#[test]
fn test_nested_fields() {
    let documents = authors();
    let criteria = vec![Criterion::new("author.firstname").priorities(["Daniel", "William"])];

    let sorted = sort(&documents, &criteria, &SortOptions::new().nested_fields()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["3", "1", "2"]);

    // Without the hook the dotted name is a literal key and matches nothing
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["1", "2", "3"]);
}

#[test]
fn test_hook_error_aborts_sort() {
    let documents = players();
    let criteria = vec![Criterion::new("shirtNumber").priorities([10])];
    let options = SortOptions::new().custom_get_value(|doc: &Doc, field: &str| {
        match doc.get("playerName").and_then(Value::as_text) {
            Some("Pirlo") => Err(format!("cannot read {field}").into()),
            _ => Ok(doc.get(field).cloned().unwrap_or_default()),
        }
    });

    let err = sort(&documents, &criteria, &options).unwrap_err();
    assert!(err.is_unexpected());
    assert!(err.is_get_value_error());
    assert!(!err.is_invalid_input());
    assert_eq!(err.module(), "sort");
    assert!(err.to_string().contains("shirtNumber"));
}

#[test]
fn test_hook_error_leaves_input_untouched() {
    let documents = players();
    let before = documents.clone();
    let criteria = vec![Criterion::new("club").priorities(["Juventus"])];
    let options = SortOptions::new()
        .custom_get_value(|_: &Doc, _: &str| Err("extraction failed".into()));

    assert!(sort(&documents, &criteria, &options).is_err());
    assert_eq!(documents, before);
}
