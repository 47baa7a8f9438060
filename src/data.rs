// src/data.rs
//
// Canonical data shapes shared across the pipeline.
//
// - RawStreets:    extracted (city, street) pairs for one country, as
//                  written by extraction; curation reads but never edits.
// - Eponym:        one curated row of a region dataset.
// - RegionDataset: date header plus ranked eponym rows for one country.
// - PersonRecord:  biography store entry, keyed externally by wikipedia link.
//
// On disk the dataset files keep a compact positional layout (arrays, not
// objects); src/store.rs owns that encoding. In memory everything is a
// named struct.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw extraction output for one country: the date it was pulled and the
/// deduplicated (city, street) pairs, exactly as tagged upstream.
#[derive(Clone, Debug, Default)]
pub struct RawStreets {
    pub date: String,
    pub pairs: Vec<(String, String)>,
}

impl RawStreets {
    pub fn len(&self) -> usize { self.pairs.len() }
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }
}

/// One normalized name and the number of distinct city/street pairs
/// that carried it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub name: String,
    pub count: u32,
}

/// A curated row of a region dataset. `link` is the confirmed wikipedia
/// article once a curator attaches one; until then the row is unverified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eponym {
    pub name: String,
    pub count: u32,
    pub link: Option<String>,
}

impl Eponym {
    pub fn is_linked(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Per-country curated dataset: extraction date plus eponyms ranked by
/// street count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionDataset {
    pub date: String,
    pub eponyms: Vec<Eponym>,
}

impl RegionDataset {
    /// Total streets across all rows. Curation steps must preserve this.
    pub fn total_streets(&self) -> u64 {
        self.eponyms.iter().map(|e| e.count as u64).sum()
    }

    /// Rows that carry a confirmed link.
    pub fn linked(&self) -> impl Iterator<Item = &Eponym> {
        self.eponyms.iter().filter(|e| e.is_linked())
    }
}

/// Biography store entry. `occupations` is machine-derived and rebuilt
/// wholesale on refetch; `occupations_extra` is curator-maintained and
/// never touched by automation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub image: String,
    pub summary: String,
    #[serde(default)]
    pub occupations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occupations_extra: Vec<String>,
}

/// The whole biography store, keyed by wikipedia link. BTreeMap keeps the
/// persisted file diff-friendly.
pub type PersonStore = BTreeMap<String, PersonRecord>;

/// Cross-region aggregation row for one identity link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldwideEntry {
    pub link: String,
    /// Number of distinct country datasets naming this person.
    pub region_count: u32,
    /// Streets across all of them.
    pub street_count: u32,
}

/// One occupation keyword and how many stored persons carry it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
}
