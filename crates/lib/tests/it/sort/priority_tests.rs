//! Priority ordering through the public `sort` entry point.

use semisort::{
    Doc,
    sort::{Criterion, SortOptions, sort},
};

use crate::helpers::*;

#[test]
fn test_empty_input_sorts_to_empty() {
    let documents: Vec<Doc> = Vec::new();
    let sorted = sort(&documents, &[], &SortOptions::new()).unwrap();
    assert!(sorted.is_empty());
}

#[test]
fn test_empty_criteria_keep_input_order() {
    let documents = newspaper_documents();
    let sorted = sort(&documents, &[], &SortOptions::new()).unwrap();
    for (input, output) in documents.iter().zip(&sorted) {
        assert!(std::ptr::eq(input, *output));
    }
}

#[test]
fn test_sort_does_not_mutate_input() {
    let documents = newspaper_documents();
    let before = documents.clone();
    let criteria = vec![Criterion::new("newspaperType").priorities(["Magazine"])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(documents, before);
    assert_permutation(&documents, &sorted);
}

#[test]
fn test_newspaper_before_magazine() {
    let documents = vec![
        Doc::new().with("t", "Magazine").with("a", "Y"),
        Doc::new().with("t", "Newspaper").with("a", "X"),
    ];
    let criteria = vec![Criterion::new("t").priorities(["Newspaper", "Magazine"])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "t"), ["Newspaper", "Magazine"]);
}

#[test]
fn test_multi_level_priorities() {
    let documents = newspaper_documents();
    let criteria = vec![
        Criterion::new("newspaperType").priorities(["Newspaper", "Magazine"]),
        Criterion::new("authorName")
            .based_on("newspaperType", "Newspaper")
            .priorities(["John Smith", "Daniel Wilson", "William Thompson"]),
        Criterion::new("authorName")
            .based_on("newspaperType", "Magazine")
            .priorities([
                "Emily Johnson",
                "Sarah Thompson",
                "Jennifer Adams",
                "Olivia Roberts",
                "Sophia Clark",
            ]),
        Criterion::new("articleTitle")
            .based_on("newspaperType", "Newspaper")
            .priorities(["Sports Section", "Breaking News"]),
    ];

    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();

    assert_eq!(
        field_of(sorted.iter().copied(), "articleTitle"),
        [
            "Sports Section",
            "Breaking News",
            "Local Events",
            "Opinion Piece",
            "Business News",
            "Fashion Trends",
            "Healthy Living",
            "Travel Guide",
            "Art and Culture",
            "Entertainment Buzz",
        ]
    );
    assert_permutation(&documents, &sorted);
}

#[test]
fn test_unmatched_documents_sort_last() {
    let documents = vec![
        Doc::new().with("t", "Flyer"),
        Doc::new().with("t", "Magazine"),
        Doc::new(),
        Doc::new().with("t", "Newspaper"),
    ];
    let criteria = vec![Criterion::new("t").priorities(["Newspaper", "Magazine"])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "t"), ["Newspaper", "Magazine", "Flyer", "null"]);
}

#[test]
fn test_numeric_priorities() {
    let documents = players();
    let criteria = vec![Criterion::new("shirtNumber").priorities([10])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(
        field_of(sorted, "playerName"),
        ["Totti", "Del Piero", "Baggio", "Pirlo"]
    );
}

#[test]
fn test_repeated_values_keep_identity() {
    let documents = vec![
        Doc::new().with("n", 10),
        Doc::new().with("n", 21),
        Doc::new().with("n", 10),
    ];
    let criteria = vec![Criterion::new("n").priorities([10])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();

    assert_eq!(field_of(sorted.iter().copied(), "n"), ["10", "10", "21"]);
    assert!(std::ptr::eq(sorted[0], &documents[0]));
    assert!(std::ptr::eq(sorted[1], &documents[2]));
    assert!(std::ptr::eq(sorted[2], &documents[1]));
}

#[test]
fn test_case_insensitive_option() {
    let documents = vec![
        article("Newspaper", "John Smith", "Sports Section"),
        article("Magazine", "Sarah Thompson", "Fashion Trends"),
        article("Newspaper", "William Thompson", "Opinion Piece"),
        article("Magazine", "Emily Johnson", "Travel Guide"),
    ];
    let criteria = vec![
        Criterion::new("newspaperType").priorities(["newspaper", "magazine"]),
        Criterion::new("authorName")
            .based_on("newspaperType", "Newspaper")
            .priorities(["william Thompson", "john smith  "]),
    ];

    let options = SortOptions::new().case_insensitive(true);
    let sorted = sort(&documents, &criteria, &options).unwrap();
    assert_eq!(
        field_of(sorted, "authorName"),
        ["William Thompson", "John Smith", "Sarah Thompson", "Emily Johnson"]
    );

    // Case-sensitive, none of the lower-case priorities match
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(
        field_of(sorted, "authorName"),
        ["John Smith", "Sarah Thompson", "William Thompson", "Emily Johnson"]
    );
}

#[test]
fn test_missing_fields_are_inconclusive() {
    let documents = vec![
        Doc::new().with("authorName", "Daniel Wilson"),
        Doc::new().with("newspaperType", "Magazine"),
        Doc::new()
            .with("newspaperType", "Newspaper")
            .with("authorName", "John Smith"),
    ];
    let criteria = vec![
        Criterion::new("newspaperType").priorities(["Newspaper", "Magazine"]),
        Criterion::new("authorName").priorities(["John Smith", "Daniel Wilson"]),
    ];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(
        field_of(sorted, "authorName"),
        ["John Smith", "null", "Daniel Wilson"]
    );
}

#[test]
fn test_criterion_without_priorities_is_skipped() {
    let documents = players();
    let criteria = vec![
        Criterion::new("club"),
        Criterion::new("shirtNumber").priorities([21]),
    ];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "playerName")[0], "Pirlo");
}

#[test]
fn test_multi_valued_fields() {
    let documents = vec![
        Doc::new().with("name", "a").with("tags", vec!["local", "weather"]),
        Doc::new().with("name", "b").with("tags", vec!["Sports", "local"]),
        Doc::new().with("name", "c").with("tags", Vec::<String>::new()),
    ];
    let criteria = vec![Criterion::new("tags").priorities(["sports", "weather"])];

    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "name"), ["a", "b", "c"]);

    let options = SortOptions::new().case_insensitive(true);
    let sorted = sort(&documents, &criteria, &options).unwrap();
    assert_eq!(field_of(sorted, "name"), ["b", "a", "c"]);
}
