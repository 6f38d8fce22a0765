//! Slice helpers: aggregates, set-like operations, shuffling and reshaping.
//!
//! ## Set semantics
//!
//! The four set-like helpers deliberately come in two flavours:
//!
//! - [`array_intersection`] and [`array_difference`] are *filters* over the
//!   first slice. They keep its order and its duplicates and test membership
//!   with a linear scan of the second slice (quadratic overall).
//! - [`array_union`] and [`array_symmetric_difference`] return *sets*: every
//!   value appears once. Elements come out in first-seen order, but callers
//!   should not rely on any particular order.
//!
//! ```rust
//! use tacklebox_core::arrays::{array_intersection, array_union};
//!
//! assert_eq!(array_intersection(&[1, 1, 2], &[1]), vec![1, 1]);
//! assert_eq!(array_union(&[1, 1], &[1]), vec![1]);
//! ```

use crate::value::Value;
use crate::{Error, Result};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Median of a slice of numbers.
///
/// Sorts a copy of the input; for an even count the two middle values are
/// averaged.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `values` is empty.
///
/// ```rust
/// use tacklebox_core::arrays::array_median;
///
/// assert_eq!(array_median(&[3.0, 1.0, 2.0])?, 2.0);
/// assert_eq!(array_median(&[1.0, 2.0, 3.0, 4.0])?, 2.5);
/// assert!(array_median(&[]).is_err());
/// # Ok::<(), tacklebox_core::Error>(())
/// ```
pub fn array_median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput("array must not be empty".to_string()));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Ok(sorted[middle])
    }
}

/// Smallest element of a slice. Ties keep the earliest element.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `values` is empty.
pub fn find_min<T: PartialOrd + Copy>(values: &[T]) -> Result<T> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| Error::EmptyInput("array must not be empty".to_string()))?;
    Ok(rest
        .iter()
        .fold(*first, |min, &v| if v < min { v } else { min }))
}

/// Largest element of a slice. Ties keep the earliest element.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `values` is empty.
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Result<T> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| Error::EmptyInput("array must not be empty".to_string()))?;
    Ok(rest
        .iter()
        .fold(*first, |max, &v| if v > max { v } else { max }))
}

/// Keep only the values that occur exactly once, in input order.
///
/// Unlike [`unique_array`], every copy of a repeated value is dropped.
///
/// ```rust
/// use tacklebox_core::arrays::remove_duplicates;
///
/// assert_eq!(remove_duplicates(&[1, 2, 2, 3, 1, 4]), vec![3, 4]);
/// ```
pub fn remove_duplicates<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    values
        .iter()
        .filter(|value| counts.get(value) == Some(&1))
        .cloned()
        .collect()
}

/// Drop every falsy value (see [`Value::is_truthy`]).
pub fn remove_falsy_values(values: &[Value]) -> Vec<Value> {
    values.iter().filter(|v| v.is_truthy()).cloned().collect()
}

/// Values present in exactly one of the two slices, each reported once.
pub fn array_symmetric_difference<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let left: HashSet<&T> = first.iter().collect();
    let right: HashSet<&T> = second.iter().collect();

    let only_left = first.iter().filter(|v| !right.contains(v));
    let only_right = second.iter().filter(|v| !left.contains(v));
    dedupe(only_left.chain(only_right))
}

/// Every distinct value from either slice, each reported once.
pub fn array_union<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    dedupe(first.iter().chain(second))
}

/// Elements of `first` that also appear in `second`.
///
/// Keeps the order and the duplicates of `first`.
pub fn array_intersection<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .filter(|v| second.contains(v))
        .cloned()
        .collect()
}

/// Elements of `first` that do not appear in `second`.
///
/// Keeps the order and the duplicates of `first`.
pub fn array_difference<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .filter(|v| !second.contains(v))
        .cloned()
        .collect()
}

/// Shuffle a slice in place with the thread-local RNG and return it.
pub fn shuffle_array<T>(values: &mut [T]) -> &mut [T] {
    shuffle_array_with(values, &mut rand::thread_rng())
}

/// Fisher-Yates shuffle driven by a caller-supplied RNG.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tacklebox_core::arrays::shuffle_array_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut cards = [1, 2, 3, 4, 5];
/// shuffle_array_with(&mut cards, &mut rng);
///
/// let mut sorted = cards;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_array_with<'a, T, R: Rng + ?Sized>(values: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
    values
}

/// Distinct values, keeping the first occurrence of each.
pub fn unique_array<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    dedupe(values.iter())
}

/// Recursively flatten nested sequences into one level.
///
/// Mappings and primitives are leaves and are kept as they are.
///
/// ```rust
/// use tacklebox_core::{Value, arrays::flatten_array};
/// use serde_json::json;
///
/// let nested = Value::from(json!([1, [2, [3, [4]]], {"k": [5]}]));
/// let flat = flatten_array(nested.as_sequence().unwrap());
/// assert_eq!(flat.len(), 5);
/// ```
pub fn flatten_array(values: &[Value]) -> Vec<Value> {
    fn walk(values: &[Value], out: &mut Vec<Value>) {
        for value in values {
            match value {
                Value::Sequence(inner) => walk(inner, out),
                leaf => out.push(leaf.clone()),
            }
        }
    }

    let mut out = Vec::with_capacity(values.len());
    walk(values, &mut out);
    out
}

/// Split a slice into consecutive chunks of `size`; the last chunk may be shorter.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `size` is zero.
pub fn chunk_array<T: Clone>(values: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    Ok(values.chunks(size).map(<[T]>::to_vec).collect())
}

fn dedupe<'a, T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}
