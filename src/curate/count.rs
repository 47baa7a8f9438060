// src/curate/count.rs
//
// Frequency counting over normalized street names.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RegionRules;
use crate::config::consts::MIN_NAME_CHARS;
use crate::data::FrequencyEntry;

use super::normalize::normalize;

/// Count how many distinct city/street pairs carry each normalized name.
///
/// A name repeated within one city counts once, so a long street tagged in
/// segments cannot inflate its person's popularity. Names shorter than
/// MIN_NAME_CHARS and names seen fewer than `min_frequency` times are
/// dropped. Output is sorted by count descending, then name ascending.
pub fn count_streets(
    pairs: &[(String, String)],
    rules: &RegionRules,
    min_frequency: u32,
) -> Vec<FrequencyEntry> {
    let mut seen = BTreeSet::new();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for (city, street) in pairs {
        let name = normalize(street, rules);
        if name.chars().count() < MIN_NAME_CHARS { continue; }
        if !seen.insert((city.clone(), name.clone())) { continue; }
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut out: Vec<FrequencyEntry> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_frequency)
        .map(|(name, count)| FrequencyEntry { name, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}
