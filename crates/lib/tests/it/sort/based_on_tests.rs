//! `basedOn` overlay behavior.
//!
//! The overlay is keyed by presence by default. The legacy truthiness rule,
//! under which `0`, `false` and `""` overlay values are ignored, is kept
//! behind `OverlayMode::Truthy` and both are pinned down here.

use std::cmp::Ordering;

use semisort::{
    Doc,
    sort::{Comparator, Criterion, OverlayMode, SortOptions, sort},
};

use crate::helpers::*;

#[test]
fn test_based_on_does_not_gate_other_fields() {
    let documents = players();
    let criteria = vec![
        Criterion::new("shirtNumber").priorities([10]),
        Criterion::new("club")
            .based_on("shirtNumber", 10)
            .priorities(["Juventus"]),
    ];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(
        field_of(sorted, "playerName"),
        ["Del Piero", "Totti", "Baggio", "Pirlo"]
    );
}

#[test]
fn test_based_on_substitutes_its_own_field() {
    let documents = vec![
        Doc::new().with("t", "Magazine").with("id", 1),
        Doc::new().with("t", "Newspaper").with("id", 2),
    ];
    // Both documents resolve `t` to "Magazine", so the criterion cannot decide
    let criteria = vec![
        Criterion::new("t")
            .based_on("t", "Magazine")
            .priorities(["Newspaper"]),
    ];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["1", "2"]);
}

#[test]
fn test_based_on_applies_to_later_criteria() {
    let documents = vec![
        Doc::new().with("t", "Magazine").with("id", 1),
        Doc::new().with("t", "Newspaper").with("id", 2),
    ];
    let criteria = vec![
        Criterion::new("id").based_on("t", "Newspaper"),
        Criterion::new("t").priorities(["Newspaper"]),
    ];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["1", "2"]);

    let without_overlay = vec![Criterion::new("t").priorities(["Newspaper"])];
    let sorted = sort(&documents, &without_overlay, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["2", "1"]);
}

#[test]
fn test_overlay_does_not_leak_between_pairs() {
    let criteria = vec![
        Criterion::new("t").priorities(["Magazine", "Newspaper"]),
        Criterion::new("k").based_on("t", "Newspaper"),
    ];
    let options = SortOptions::new();
    let comparator = Comparator::new(&criteria, &options);

    let magazine = Doc::new().with("t", "Magazine");
    let newspaper = Doc::new().with("t", "Newspaper");

    // Reaches the second criterion and stores t = Newspaper in its overlay
    assert_eq!(
        comparator.compare(&magazine, &magazine).unwrap(),
        Ordering::Equal
    );
    // A fresh pair still reads t from the documents
    assert_eq!(
        comparator.compare(&newspaper, &magazine).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        comparator.compare(&magazine, &newspaper).unwrap(),
        Ordering::Less
    );
}

fn zero_overlay_criteria() -> Vec<Criterion> {
    vec![Criterion::new("n").based_on("n", 0).priorities([0])]
}

#[test]
fn test_present_overlay_honors_zero() {
    let documents = vec![Doc::new().with("n", 5), Doc::new().with("n", 0)];
    let options = SortOptions::new().overlay(OverlayMode::Present);
    let sorted = sort(&documents, &zero_overlay_criteria(), &options).unwrap();
    // Both documents resolve n = 0 through the overlay and tie
    assert_eq!(field_of(sorted, "n"), ["5", "0"]);
}

#[test]
fn test_truthy_overlay_ignores_zero() {
    let documents = vec![Doc::new().with("n", 5), Doc::new().with("n", 0)];
    let options = SortOptions::new().overlay(OverlayMode::Truthy);
    let sorted = sort(&documents, &zero_overlay_criteria(), &options).unwrap();
    // The overlay is skipped and the documents' own values are ranked
    assert_eq!(field_of(sorted, "n"), ["0", "5"]);
}

#[test]
fn test_truthy_overlay_ignores_false_and_empty_text() {
    let documents = vec![
        Doc::new().with("flag", true).with("s", "b"),
        Doc::new().with("flag", false).with("s", ""),
    ];
    let criteria = vec![
        Criterion::new("flag").based_on("flag", false).priorities([false]),
        Criterion::new("s").based_on("s", "").priorities([""]),
    ];

    let truthy = SortOptions::new().overlay(OverlayMode::Truthy);
    let sorted = sort(&documents, &criteria, &truthy).unwrap();
    assert_eq!(field_of(sorted, "flag"), ["false", "true"]);

    let present = SortOptions::new();
    let sorted = sort(&documents, &criteria, &present).unwrap();
    assert_eq!(field_of(sorted, "flag"), ["true", "false"]);
}
