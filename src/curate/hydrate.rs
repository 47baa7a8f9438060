// src/curate/hydrate.rs
//
// Carry confirmed links forward from the previous dataset.
//
// Re-running curation rebuilds counts from scratch, which would wipe the
// hand-confirmed wikipedia links. Hydration reattaches them: each fresh
// row takes the link its name carried in the previous dataset, if any.

use std::collections::HashMap;

use crate::data::{Eponym, FrequencyEntry, RegionDataset};

/// Attach previous links to freshly counted rows, by exact name match.
///
/// Row order and counts pass through untouched. Links arrive
/// percent-encoded when the article title needed it; hydration decodes
/// them for the curated file. A row with no previous match, or whose
/// previous link was empty, comes out unlinked.
pub fn hydrate(fresh: Vec<FrequencyEntry>, previous: Option<&RegionDataset>) -> Vec<Eponym> {
    let mut links: HashMap<&str, &str> = HashMap::new();
    if let Some(prev) = previous {
        for e in &prev.eponyms {
            if let Some(link) = e.link.as_deref() {
                if !link.is_empty() {
                    // first row with the name wins
                    links.entry(e.name.as_str()).or_insert(link);
                }
            }
        }
    }

    fresh
        .into_iter()
        .map(|f| {
            let link = links.get(f.name.as_str()).map(|l| decode_link(l));
            Eponym { name: f.name, count: f.count, link }
        })
        .collect()
}

/// Percent-decode a stored link; anything undecodable stays as written.
fn decode_link(link: &str) -> String {
    match urlencoding::decode(link) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s!(link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, count: u32) -> FrequencyEntry {
        FrequencyEntry { name: s!(name), count }
    }

    fn prev(rows: &[(&str, u32, Option<&str>)]) -> RegionDataset {
        RegionDataset {
            date: s!("2026-08-01"),
            eponyms: rows
                .iter()
                .map(|(n, c, l)| Eponym { name: s!(*n), count: *c, link: l.map(|l| s!(l)) })
                .collect(),
        }
    }

    #[test]
    fn carries_link_by_exact_name() {
        let previous = prev(&[("Eminescu", 5, Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu"))]);
        let out = hydrate(vec![entry("Eminescu", 7)], Some(&previous));
        assert_eq!(out[0].count, 7);
        assert_eq!(
            out[0].link.as_deref(),
            Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu")
        );
    }

    #[test]
    fn unknown_name_comes_out_unlinked() {
        let previous = prev(&[("Eminescu", 5, Some("https://x/y"))]);
        let out = hydrate(vec![entry("Creanga", 2)], Some(&previous));
        assert_eq!(out[0].link, None);
    }

    #[test]
    fn no_previous_dataset_means_no_links() {
        let out = hydrate(vec![entry("Eminescu", 7)], None);
        assert_eq!(out[0].link, None);
    }

    #[test]
    fn empty_previous_link_stays_none() {
        let previous = prev(&[("Eminescu", 5, Some(""))]);
        let out = hydrate(vec![entry("Eminescu", 7)], Some(&previous));
        assert_eq!(out[0].link, None);
    }

    #[test]
    fn link_is_percent_decoded() {
        let previous = prev(&[("Andre", 4, Some("https://fr.wikipedia.org/wiki/Andr%C3%A9"))]);
        let out = hydrate(vec![entry("Andre", 4)], Some(&previous));
        assert_eq!(out[0].link.as_deref(), Some("https://fr.wikipedia.org/wiki/Andr\u{e9}"));
    }

    #[test]
    fn order_and_counts_pass_through() {
        let fresh = vec![entry("B", 9), entry("A", 9), entry("C", 1)];
        let out = hydrate(fresh, None);
        let got: Vec<(&str, u32)> = out.iter().map(|e| (e.name.as_str(), e.count)).collect();
        assert_eq!(got, vec![("B", 9), ("A", 9), ("C", 1)]);
    }
}
