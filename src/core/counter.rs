//! Frequency counting that keeps first-seen order for ties.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts `items` and sorts by count, highest first.
///
/// Items with equal counts stay in the order they were first seen.
pub(crate) fn ranked<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    // sort_by is stable, which preserves first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
