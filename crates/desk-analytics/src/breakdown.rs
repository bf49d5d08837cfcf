//! Count maps and the arithmetic shared by every aggregation.
//!
//! Count maps preserve insertion order. Top-category selection walks that
//! order and replaces the leader only on a strictly greater count, so the
//! earliest-inserted key wins ties.

use indexmap::IndexMap;

/// Occurrences per key, in first-seen order.
pub type CountMap = IndexMap<String, usize>;

pub fn increment(map: &mut CountMap, key: &str) {
    if let Some(count) = map.get_mut(key) {
        *count += 1;
    } else {
        map.insert(key.to_string(), 1);
    }
}

/// Count keys in iteration order.
pub fn tally<'a>(keys: impl IntoIterator<Item = &'a str>) -> CountMap {
    let mut map = CountMap::new();
    for key in keys {
        increment(&mut map, key);
    }
    map
}

/// Key with the highest count; the earliest-inserted key wins ties.
#[must_use]
pub fn top_entry(map: &CountMap) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (key, &count) in map {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key.as_str(), count)),
        }
    }
    best
}

/// `part / total`, or 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Whole percent of `part` in `total`, rounded half-up; 0 when `total` is 0.
#[must_use]
pub fn share_percent(part: usize, total: usize) -> u32 {
    percent(ratio(part, total))
}

/// Convert a `0.0..=1.0` rate to a whole percent, rounded half-up.
#[must_use]
pub fn percent(rate: f64) -> u32 {
    u32::try_from(round_half_up(rate * 100.0)).unwrap_or(u32::MAX)
}

/// Round to the nearest integer with halves going up (`92.5 → 93`).
///
/// Negative, NaN, and infinite inputs collapse to 0.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn round_half_up(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u64::MAX as f64) as u64
}

/// Replace NaN and infinities with 0.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
