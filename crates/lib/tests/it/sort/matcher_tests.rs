//! Priority matching through the public API.

use semisort::{
    Doc,
    doc::{Scalar, Value},
    sort::{Criterion, PriorityList, Rank, SortOptions, match_rank, sort},
};

use crate::helpers::*;

fn fruit() -> Vec<Scalar> {
    vec!["apple".into(), "banana".into(), "cherry".into(), "orange".into()]
}

#[test]
fn test_match_rank() {
    let priorities = fruit();
    assert_eq!(match_rank(&Value::from("banana"), &priorities, true), Rank::Found(1));
    assert_eq!(match_rank(&Value::from("Cherry"), &priorities, true), Rank::Found(2));
    assert_eq!(match_rank(&Value::from("grape"), &priorities, true), Rank::NotFound);
    assert_eq!(match_rank(&Value::from("kiwi"), &priorities, false), Rank::NotFound);
    assert_eq!(match_rank(&Value::Int(10), &priorities, true), Rank::NotFound);
    assert_eq!(match_rank(&Value::Null, &priorities, true), Rank::NotFound);
}

#[test]
fn test_documents_never_match() {
    let priorities = fruit();
    let nested = Value::from(Doc::new().with("name", "apple"));
    assert_eq!(match_rank(&nested, &priorities, true), Rank::NotFound);
}

#[test]
fn test_priority_list_reuse() {
    let priorities = fruit();
    let list = PriorityList::new(&priorities, true);
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());

    let ranks: Vec<Rank> = ["ORANGE", " apple ", "Banana", "plum"]
        .into_iter()
        .map(|name| list.rank(&Value::from(name)))
        .collect();
    assert_eq!(
        ranks,
        [Rank::Found(3), Rank::Found(0), Rank::Found(1), Rank::NotFound]
    );
}

#[test]
fn test_case_insensitive_ties_whitespace_and_case_variants() {
    let documents = vec![
        Doc::new().with("t", " Newspaper ").with("id", 1),
        Doc::new().with("t", "NEWSPAPER").with("id", 2),
        Doc::new().with("t", "Magazine").with("id", 3),
    ];
    let criteria = vec![Criterion::new("t").priorities(["newspaper", "magazine"])];

    let sorted = sort(&documents, &criteria, &SortOptions::new().case_insensitive(true)).unwrap();
    assert_eq!(field_of(sorted, "id"), ["1", "2", "3"]);

    // Case-sensitive matching finds none of them
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["1", "2", "3"]);
}

#[test]
fn test_boolean_priorities() {
    let documents = vec![
        Doc::new().with("active", false).with("id", 1),
        Doc::new().with("id", 2),
        Doc::new().with("active", true).with("id", 3),
    ];
    let criteria = vec![Criterion::new("active").priorities([true, false])];
    let sorted = sort(&documents, &criteria, &SortOptions::new()).unwrap();
    assert_eq!(field_of(sorted, "id"), ["3", "1", "2"]);
}
