// src/curate/worldwide.rs
//
// Cross-region aggregation: one row per person link across every country
// dataset, ranked by reach.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::{RegionDataset, WorldwideEntry};

/// Merge linked rows from every country dataset into one ranking.
///
/// Unlinked rows are skipped: without a link there is no identity to merge
/// on. region_count counts distinct datasets naming the person, so two
/// spellings linked to one article inside the same country count that
/// country once; street_count sums all their streets. Sorted by
/// region_count descending, then street_count descending, then link.
pub fn aggregate_worldwide(datasets: &[RegionDataset]) -> Vec<WorldwideEntry> {
    let mut street_counts: BTreeMap<&str, u32> = BTreeMap::new();
    let mut region_counts: BTreeMap<&str, u32> = BTreeMap::new();

    for ds in datasets {
        let mut named_here: BTreeSet<&str> = BTreeSet::new();
        for e in ds.linked() {
            if let Some(link) = e.link.as_deref() {
                *street_counts.entry(link).or_insert(0) += e.count;
                named_here.insert(link);
            }
        }
        for link in named_here {
            *region_counts.entry(link).or_insert(0) += 1;
        }
    }

    let mut out: Vec<WorldwideEntry> = street_counts
        .into_iter()
        .map(|(link, street_count)| WorldwideEntry {
            link: s!(link),
            region_count: region_counts.get(link).copied().unwrap_or(0),
            street_count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.region_count
            .cmp(&a.region_count)
            .then_with(|| b.street_count.cmp(&a.street_count))
            .then_with(|| a.link.cmp(&b.link))
    });
    out
}
