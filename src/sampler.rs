//! Uniform and weighted selection driven by an explicit random value.
//!
//! Every pick is a pure function of the items and `r`, so callers that need
//! determinism pass their own value and everyone else draws one from a
//! [`RandomSource`](crate::random::RandomSource).

use crate::errors::{Error, Result};
use crate::versions::WeightedVersion;

/// Keeps `r = 1` from indexing past the end.
pub const EPSILON: f64 = 1e-6;

/// Items carrying a relative selection weight.
pub trait Weighted {
    /// The raw weight. Negative and NaN weights count as zero.
    fn weight(&self) -> f64;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

impl<V> Weighted for (V, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

#[inline]
fn effective_weight<T: Weighted + ?Sized>(item: &T) -> f64 {
    let w = item.weight();
    if w > 0.0 {
        w
    } else {
        0.0
    }
}

/// Clamp `r` into `[0, 1 - EPSILON]`. NaN maps to zero.
#[inline]
pub fn clamp_random(r: f64) -> f64 {
    if r.is_nan() {
        0.0
    } else {
        r.clamp(0.0, 1.0 - EPSILON)
    }
}

/// Pick `items[floor(r * len)]`.
pub fn pick_uniform<T>(items: &[T], r: f64) -> Result<&T> {
    if items.is_empty() {
        return Err(Error::invalid_input("array is empty or undefined"));
    }
    let r = clamp_random(r);
    let index = ((r * items.len() as f64).floor() as usize).min(items.len() - 1);
    Ok(&items[index])
}

/// Pick an item with probability proportional to its weight.
///
/// A single item always wins. All-zero weights fall back to the last item.
/// `r = 0` lands on the first item with a positive weight.
pub fn pick_weighted<T: Weighted>(items: &[T], r: f64) -> Result<&T> {
    let last = match items.last() {
        Some(last) => last,
        None => return Err(Error::invalid_input("array is empty or undefined")),
    };

    if items.len() == 1 {
        return Ok(last);
    }

    let total: f64 = items.iter().map(effective_weight).sum();

    if total <= 0.0 {
        return Ok(last);
    }

    let r = clamp_random(r);

    if r == 0.0 {
        if let Some(first) = items.iter().find(|item| effective_weight(*item) > 0.0) {
            return Ok(first);
        }
    }

    let target = r * total;
    let mut cumulative = 0.0;

    for item in items {
        cumulative += effective_weight(item);
        if cumulative >= target {
            return Ok(item);
        }
    }

    Ok(items
        .iter()
        .rev()
        .find(|item| effective_weight(*item) > 0.0)
        .unwrap_or(last))
}

/// Pick a weighted bucket, then one of its sub-variants with the same `r`.
pub fn pick_weighted_with_sub_variant(items: &[WeightedVersion], r: f64) -> Result<&str> {
    let selected = pick_weighted(items, r)?;

    let record = items
        .iter()
        .find(|item| item.value == selected.value)
        .unwrap_or(selected);

    match record.sub_variants.as_deref() {
        Some(sub_variants) if !sub_variants.is_empty() => {
            Ok(pick_uniform(sub_variants, r)?.value.as_str())
        }
        _ => Err(Error::invalid_input(format!(
            "sub-variant list is empty for version: {}",
            record.value
        ))),
    }
}
