use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::projection::DataPoint;
use crate::core::value::parse_number;

/// Compares two category labels.
///
/// When both labels parse as numbers they compare numerically, otherwise as
/// collated text. The choice is made per pair, so mixed label sets are not
/// guaranteed a transitive order.
#[must_use]
pub fn compare_labels(left: &str, right: &str) -> Ordering {
    match (parse_number(left), parse_number(right)) {
        (Some(l), Some(r)) => OrderedFloat(l).cmp(&OrderedFloat(r)),
        _ => collate(left, right),
    }
}

/// Base letters first (case and accents folded), then unaccented before
/// accented, then lowercase before uppercase, then code points.
fn collate(left: &str, right: &str) -> Ordering {
    let primary = base_letters(left).cmp(base_letters(right));
    if primary != Ordering::Equal {
        return primary;
    }

    let accents = left
        .nfd()
        .flat_map(char::to_lowercase)
        .cmp(right.nfd().flat_map(char::to_lowercase));
    if accents != Ordering::Equal {
        return accents;
    }

    for (l, r) in left.chars().zip(right.chars()) {
        match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) if r.is_uppercase() => return Ordering::Less,
            (false, true) if l.is_uppercase() => return Ordering::Greater,
            _ => {}
        }
    }
    left.cmp(right)
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Sorts points by label with [`compare_labels`].
pub fn sort_data_points(points: &mut Vec<DataPoint>) {
    merge_sort_by(points, |a, b| compare_labels(&a.label, &b.label));
}

/// Stable top-down merge sort driven only by `compare`.
///
/// `slice::sort_by` may panic when the comparator is not a total order,
/// which [`compare_labels`] does not guarantee.
pub fn merge_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let taken = std::mem::take(items);
    *items = merge_sort_owned(taken, &mut compare);
}

fn merge_sort_owned<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_owned(items, compare);
    let right = merge_sort_owned(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) != Ordering::Less,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}
