//! Priority matching.
//!
//! A priority list is normalized once when the comparator is built. Each
//! lookup then normalizes only the document value and scans the list; the
//! first equal entry wins and its index is the rank.
//!
//! Normalization trims text and, in case-insensitive mode, lower-cases it.
//! Numbers compare numerically, so `10` matches `10.0`. Booleans compare as
//! booleans. Multi-valued fields match the first priority equal to any of
//! their elements, and each element is normalized like a scalar value.

use std::borrow::Cow;

use crate::doc::{Scalar, Value};

/// Position of a value within a priority list.
///
/// The derived ordering is the ordering the comparator wants: any found rank
/// sorts before `NotFound`, and lower ranks sort before higher ones.
///
/// ```
/// # use semisort::sort::Rank;
/// assert!(Rank::Found(0) < Rank::Found(1));
/// assert!(Rank::Found(7) < Rank::NotFound);
/// assert_eq!(Rank::NotFound.index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Matched the priority at this 0-based index
    Found(usize),
    /// Matched no priority
    NotFound,
}

impl Rank {
    /// Returns true if the value matched a priority
    pub fn is_found(self) -> bool {
        matches!(self, Rank::Found(_))
    }

    /// Returns the matched index, if any
    pub fn index(self) -> Option<usize> {
        match self {
            Rank::Found(index) => Some(index),
            Rank::NotFound => None,
        }
    }
}

impl From<Option<usize>> for Rank {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Rank::NotFound, Rank::Found)
    }
}

/// A leaf value after normalization.
#[derive(Debug, Clone)]
enum Needle<'a> {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
}

impl<'a> Needle<'a> {
    fn text(s: &'a str, case_insensitive: bool) -> Self {
        let trimmed = s.trim();
        if case_insensitive {
            Needle::Text(Cow::Owned(trimmed.to_lowercase()))
        } else {
            Needle::Text(Cow::Borrowed(trimmed))
        }
    }

    fn from_scalar(scalar: &'a Scalar, case_insensitive: bool) -> Self {
        match scalar {
            Scalar::Bool(b) => Needle::Bool(*b),
            Scalar::Int(n) => Needle::Int(*n),
            Scalar::Float(f) => Needle::Float(*f),
            Scalar::Text(s) => Needle::text(s, case_insensitive),
        }
    }

    /// Normalizes a leaf value; `None` for null and branch values.
    fn from_value(value: &'a Value, case_insensitive: bool) -> Option<Self> {
        Some(match value {
            Value::Bool(b) => Needle::Bool(*b),
            Value::Int(n) => Needle::Int(*n),
            Value::Float(f) => Needle::Float(*f),
            Value::Text(s) => Needle::text(s, case_insensitive),
            Value::Null | Value::List(_) | Value::Doc(_) => return None,
        })
    }
}

impl PartialEq for Needle<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Needle::Bool(a), Needle::Bool(b)) => a == b,
            (Needle::Int(a), Needle::Int(b)) => a == b,
            (Needle::Float(a), Needle::Float(b)) => a == b,
            (Needle::Int(a), Needle::Float(b)) | (Needle::Float(b), Needle::Int(a)) => {
                *a as f64 == *b
            }
            (Needle::Text(a), Needle::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// A normalized priority list, ready for repeated lookups.
#[derive(Debug, Clone)]
pub struct PriorityList<'p> {
    needles: Vec<Needle<'p>>,
    case_insensitive: bool,
}

impl<'p> PriorityList<'p> {
    /// Normalizes `priorities` for matching
    pub fn new(priorities: &'p [Scalar], case_insensitive: bool) -> Self {
        Self {
            needles: priorities
                .iter()
                .map(|priority| Needle::from_scalar(priority, case_insensitive))
                .collect(),
            case_insensitive,
        }
    }

    /// Number of priorities in the list
    pub fn len(&self) -> usize {
        self.needles.len()
    }

    /// Returns true if the list has no priorities
    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Ranks a resolved value against the list.
    ///
    /// `Null` and nested documents never match. Lists match the first
    /// priority equal to any of their normalized elements.
    pub fn rank(&self, value: &Value) -> Rank {
        if self.needles.is_empty() {
            return Rank::NotFound;
        }
        match value {
            Value::Null | Value::Doc(_) => Rank::NotFound,
            Value::List(items) => {
                let elements: Vec<Needle<'_>> = items
                    .iter()
                    .filter_map(|item| Needle::from_value(item, self.case_insensitive))
                    .collect();
                self.needles
                    .iter()
                    .position(|needle| elements.contains(needle))
                    .into()
            }
            leaf => match Needle::from_value(leaf, self.case_insensitive) {
                Some(needle) => self.needles.iter().position(|n| *n == needle).into(),
                None => Rank::NotFound,
            },
        }
    }
}

/// Ranks `value` against `priorities` in one call.
///
/// Prefer [`PriorityList`] when the same list is used many times.
///
/// ```
/// # use semisort::doc::{Scalar, Value};
/// # use semisort::sort::{Rank, match_rank};
/// let priorities: Vec<Scalar> = vec!["apple".into(), "banana".into(), "cherry".into()];
///
/// assert_eq!(match_rank(&Value::from("Cherry"), &priorities, true), Rank::Found(2));
/// assert_eq!(match_rank(&Value::from("Cherry"), &priorities, false), Rank::NotFound);
/// assert_eq!(match_rank(&Value::Null, &priorities, true), Rank::NotFound);
/// ```
pub fn match_rank(value: &Value, priorities: &[Scalar], case_insensitive: bool) -> Rank {
    PriorityList::new(priorities, case_insensitive).rank(value)
}
