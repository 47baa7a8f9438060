// src/occupations/taxonomy.rs
//
// The occupation vocabulary: scannable keywords, category rollups, and the
// tags dropped from final sets. Ships as data/taxonomy.json; an embedded
// copy backs runs where no data file exists yet.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;

use serde::Deserialize;

use crate::store;

const DEFAULT_TAXONOMY: &str = include_str!("../../data/taxonomy.json");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub occupations: Vec<String>,
    /// category label → keywords that roll up into it
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    /// scan helpers ("she") that must not survive into a person's set
    #[serde(default)]
    pub ignored: Vec<String>,
}

impl Taxonomy {
    /// Load data/taxonomy.json, falling back to the embedded default.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = store::taxonomy_file();
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| format!("bad taxonomy file {}: {}", path.display(), e).into())
        } else {
            Ok(serde_json::from_str(DEFAULT_TAXONOMY)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses() {
        let tax: Taxonomy = serde_json::from_str(DEFAULT_TAXONOMY).unwrap();
        assert!(tax.occupations.iter().any(|k| k == "politician"));
        assert!(tax.categories.contains_key("military"));
        assert!(tax.ignored.contains(&s!("she")));
    }

    #[test]
    fn category_members_fold_into_the_vocabulary_scan() {
        // every default category label must also be reachable: either it is
        // a vocabulary keyword itself or its members are
        let tax: Taxonomy = serde_json::from_str(DEFAULT_TAXONOMY).unwrap();
        for members in tax.categories.values() {
            assert!(!members.is_empty());
        }
    }
}
