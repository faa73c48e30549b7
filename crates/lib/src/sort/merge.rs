//! Stable merge sort for comparators that are not total orders.
//!
//! Criteria that fall through on missing fields make the pairwise order
//! intransitive, which the standard library sorts reject with a panic. The
//! merge sort here only ever asks "is the left element greater", so any
//! comparator produces some permutation of the input.

use std::cmp::Ordering;

/// Sorts `items` stably with a fallible comparator.
///
/// Stops at the first error and returns it; `items` is then still a
/// permutation of its original contents.
///
/// ```
/// # use std::cmp::Ordering;
/// # use semisort::sort::merge_sort_by;
/// let mut items = vec![3, 1, 2];
/// merge_sort_by(&mut items, |a, b| Ok::<_, ()>(a.cmp(b))).unwrap();
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn merge_sort_by<T, E, F>(items: &mut [T], mut compare: F) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = items.len();
    let mut buffer: Vec<T> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        buffer.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(&items[start..mid], &items[mid..end], &mut buffer, &mut compare)?;
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }

    Ok(())
}

/// Appends the merge of two adjacent runs to `out`, preferring `left` on ties.
fn merge_runs<T, E, F>(left: &[T], right: &[T], out: &mut Vec<T>, compare: &mut F) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j])? == Ordering::Greater {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    Ok(())
}
