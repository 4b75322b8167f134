// weight arithmetic: tier value spread evenly over matches, rolled up by type
use std::collections::BTreeMap;

use crate::core::mapping::MatchedIndicator;
use crate::core::types::WeightTier;

/// Round to 4 decimal places, the precision carried by all report weights.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Per-indicator weight: the tier value distributed evenly across matches.
///
/// The divisor floor of 1 keeps a zero-match category well defined (the value
/// is simply never attached to anything).
pub fn per_indicator_weight(tier: WeightTier, matched_count: usize) -> f64 {
    round4(tier.value() / matched_count.max(1) as f64)
}

/// Sum mapping weights per indicator type. Each bucket is re-rounded so the
/// serialized report never carries accumulation noise.
pub fn rollup_by_type(indicators: &[MatchedIndicator]) -> BTreeMap<String, f64> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for ind in indicators {
        *buckets.entry(ind.indicator_type.clone()).or_insert(0.0) += ind.mapping_weight;
    }
    for value in buckets.values_mut() {
        *value = round4(*value);
    }
    buckets
}

/// Merge per-category rollups into one aggregate map.
pub fn merge_rollups<'a, I>(rollups: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a BTreeMap<String, f64>>,
{
    let mut total: BTreeMap<String, f64> = BTreeMap::new();
    for rollup in rollups {
        for (kind, weight) in rollup {
            *total.entry(kind.clone()).or_insert(0.0) += weight;
        }
    }
    for value in total.values_mut() {
        *value = round4(*value);
    }
    total
}
