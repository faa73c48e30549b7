//! The criterion comparator chain.
//!
//! A [`Comparator`] is compiled once per sort call. Each pairwise comparison
//! walks the criteria in order with a fresh [`Overlay`], and stops at the
//! first criterion that decides the pair.

use std::cmp::Ordering;

use super::{
    criterion::Criterion,
    errors::CompareError,
    matcher::PriorityList,
    options::{GetValueFn, OverlayMode, SortOptions, SortOrder},
    resolver::{Overlay, resolve},
};
use crate::doc::{Document, Value};

/// One compiled criterion.
#[derive(Debug)]
struct Step<'c> {
    criterion: &'c Criterion,
    priorities: Option<PriorityList<'c>>,
}

/// A pairwise ordering function compiled from criteria and options.
///
/// ```
/// use std::cmp::Ordering;
/// use semisort::doc;
/// use semisort::sort::{Comparator, Criterion, SortOptions};
///
/// let criteria = vec![Criterion::new("t").priorities(["Newspaper", "Magazine"])];
/// let options = SortOptions::new();
/// let comparator = Comparator::new(&criteria, &options);
///
/// let newspaper = doc! { "t" => "Newspaper" };
/// let magazine = doc! { "t" => "Magazine" };
/// assert_eq!(comparator.compare(&newspaper, &magazine).unwrap(), Ordering::Less);
/// assert_eq!(comparator.compare(&magazine, &magazine).unwrap(), Ordering::Equal);
/// ```
pub struct Comparator<'c, D: ?Sized> {
    steps: Vec<Step<'c>>,
    custom_get_value: Option<&'c GetValueFn<D>>,
    order: Option<SortOrder>,
    overlay_mode: OverlayMode,
}

impl<'c, D: Document + ?Sized> Comparator<'c, D> {
    /// Compiles `criteria` under `options`.
    ///
    /// Priority lists are normalized here, once, rather than per comparison.
    pub fn new(criteria: &'c [Criterion], options: &'c SortOptions<D>) -> Self {
        let case_insensitive = options.config.case_insensitive;
        let steps = criteria
            .iter()
            .map(|criterion| Step {
                criterion,
                priorities: criterion
                    .priorities
                    .as_deref()
                    .map(|priorities| PriorityList::new(priorities, case_insensitive)),
            })
            .collect();

        Self {
            steps,
            custom_get_value: options.get_value_hook(),
            order: options.config.order,
            overlay_mode: options.config.overlay,
        }
    }

    /// Orders `a` relative to `b`.
    ///
    /// Never fails on missing or oddly typed fields; those are inconclusive.
    /// Fails if the extraction hook fails, or if the fallback order has to
    /// compare a number with text.
    pub fn compare(&self, a: &D, b: &D) -> Result<Ordering, CompareError> {
        if self.steps.is_empty() {
            return self.compare_whole(a, b);
        }

        let mut overlay = Overlay::new(self.overlay_mode);
        for (index, step) in self.steps.iter().enumerate() {
            let criterion = step.criterion;
            if let Some(based_on) = &criterion.based_on {
                overlay.apply(based_on);
            }

            let field = criterion.field.as_str();
            let left = resolve(a, field, &overlay, self.custom_get_value)?;
            let right = resolve(b, field, &overlay, self.custom_get_value)?;

            if let Some(priorities) = &step.priorities {
                let left_rank = priorities.rank(&left);
                let right_rank = priorities.rank(&right);
                let decision = left_rank.cmp(&right_rank);
                if decision.is_ne() {
                    tracing::trace!(
                        criterion = index,
                        field,
                        ?left_rank,
                        ?right_rank,
                        "Decided by priority"
                    );
                    return Ok(decision);
                }
            }

            if let Some(order) = self.order {
                if let Some(decision) = fallback_order(field, &left, &right, order)? {
                    tracing::trace!(
                        criterion = index,
                        field,
                        ?decision,
                        "Decided by fallback order"
                    );
                    return Ok(decision);
                }
            }
        }

        Ok(Ordering::Equal)
    }

    /// With no criteria, only the fallback order can separate two records,
    /// and only when the records are themselves orderable values.
    fn compare_whole(&self, a: &D, b: &D) -> Result<Ordering, CompareError> {
        let (Some(order), Some(left), Some(right)) = (self.order, a.as_value(), b.as_value())
        else {
            return Ok(Ordering::Equal);
        };
        Ok(fallback_order("", left, right, order)?.unwrap_or(Ordering::Equal))
    }
}

/// Compares two resolved values under the fallback order.
///
/// Returns `None` when the pair is not orderable (missing values, booleans,
/// lists, documents), which leaves the criterion undecided. A number paired
/// with text is an error. NaN sorts after every other number in both
/// directions and ties with NaN.
pub fn fallback_order(
    field: &str,
    left: &Value,
    right: &Value,
    order: SortOrder,
) -> Result<Option<Ordering>, CompareError> {
    let ascending = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => collate(a, b),
        (l, r) if l.is_number() && r.is_number() => {
            let (a, b) = (l.as_f64().unwrap_or(f64::NAN), r.as_f64().unwrap_or(f64::NAN));
            match (a.is_nan(), b.is_nan()) {
                (true, true) => return Ok(Some(Ordering::Equal)),
                (true, false) => return Ok(Some(Ordering::Greater)),
                (false, true) => return Ok(Some(Ordering::Less)),
                // Without NaN the comparison is total; 0.0 ties with -0.0
                (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            }
        }
        (Value::Text(_), r) if r.is_number() => return Err(incomparable(field, left, right)),
        (l, Value::Text(_)) if l.is_number() => return Err(incomparable(field, left, right)),
        _ => return Ok(None),
    };

    Ok(Some(match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }))
}

fn incomparable(field: &str, left: &Value, right: &Value) -> CompareError {
    CompareError::IncomparableTypes {
        field: field.to_string(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

/// Locale-style text ordering.
///
/// Text is compared case-folded first, so `apple` sorts next to `Apple`
/// rather than after `Zebra`. Strings that differ only in case put the
/// lower-case form first.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}
