// src/checks.rs
//
// Advisory consistency checks over curated datasets and rules files.
// Findings are reports for the curator to act on, never failures: a
// duplicate link usually means two spellings belong in the equivalence
// table, a percent escape means a link was pasted encoded.

use std::collections::BTreeMap;
use std::error::Error;

use crate::config::rules;
use crate::data::RegionDataset;
use crate::store;

/// Everything the `check` command has to say about one country.
#[derive(Clone, Debug, Default)]
pub struct CountryReport {
    /// spellings claimed by more than one canonical form in the rules
    pub duplicate_variants: Vec<String>,
    /// links attached to more than one dataset row, with the row names
    pub duplicate_links: Vec<(String, Vec<String>)>,
    /// links with percent escapes or not pointing at wikipedia
    pub inconsistent_links: Vec<String>,
}

impl CountryReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_variants.is_empty()
            && self.duplicate_links.is_empty()
            && self.inconsistent_links.is_empty()
    }
}

/// Run all checks for one country. Works before the first curation run
/// too; the dataset checks just come back empty then.
pub fn check_country(country: &str) -> Result<CountryReport, Box<dyn Error>> {
    let ds = store::read_dataset(&store::dataset_file(country))?;
    let (duplicate_links, inconsistent_links) = match &ds {
        Some(ds) => (link_dups(ds), links_consistency(ds)),
        None => (Vec::new(), Vec::new()),
    };
    Ok(CountryReport {
        duplicate_variants: rules::variant_duplicates(country)?,
        duplicate_links,
        inconsistent_links,
    })
}

/// Sweep every country with a dataset; keep only the unclean ones.
pub fn check_all() -> Result<Vec<(String, CountryReport)>, Box<dyn Error>> {
    let mut out = Vec::new();
    for country in store::countries_with_datasets()? {
        let report = check_country(&country)?;
        if !report.is_clean() {
            out.push((country, report));
        }
    }
    Ok(out)
}

/// Links shared by more than one row. Such rows name the same person
/// under different spellings and belong in the equivalence table.
pub fn link_dups(ds: &RegionDataset) -> Vec<(String, Vec<String>)> {
    let mut by_link: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for e in ds.linked() {
        if let Some(link) = e.link.as_deref() {
            by_link.entry(link).or_default().push(e.name.clone());
        }
    }
    by_link
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(link, names)| (s!(link), names))
        .collect()
}

/// Links that still carry percent escapes or point outside wikipedia.
pub fn links_consistency(ds: &RegionDataset) -> Vec<String> {
    ds.linked()
        .filter_map(|e| e.link.as_deref())
        .filter(|l| l.contains('%') || !l.contains("wikipedia"))
        .map(|l| s!(l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Eponym;

    fn dataset(rows: &[(&str, Option<&str>)]) -> RegionDataset {
        RegionDataset {
            date: s!("2026-08-01"),
            eponyms: rows
                .iter()
                .map(|(n, l)| Eponym { name: s!(*n), count: 1, link: l.map(|l| s!(l)) })
                .collect(),
        }
    }

    #[test]
    fn duplicate_links_come_back_with_their_names() {
        let ds = dataset(&[
            ("Eminescu", Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu")),
            ("M. Eminescu", Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu")),
            ("Creanga", Some("https://ro.wikipedia.org/wiki/Ion_Creanga")),
        ]);
        let dups = link_dups(&ds);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].1, vec!["Eminescu", "M. Eminescu"]);
    }

    #[test]
    fn unlinked_rows_cannot_collide() {
        let ds = dataset(&[("A", None), ("B", None), ("C", Some(""))]);
        assert!(link_dups(&ds).is_empty());
    }

    #[test]
    fn flags_percent_escapes_and_foreign_links() {
        let ds = dataset(&[
            ("Ok", Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu")),
            ("Encoded", Some("https://bg.wikipedia.org/wiki/%D0%98%D0%B2")),
            ("Elsewhere", Some("https://example.org/person")),
        ]);
        let bad = links_consistency(&ds);
        assert_eq!(bad.len(), 2);
        assert!(bad.iter().any(|l| l.contains('%')));
        assert!(bad.iter().any(|l| l.contains("example.org")));
    }
}
