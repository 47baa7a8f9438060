// src/config/rules.rs
//
// Per-region normalization rules: the affix tokens (street-type words and
// abbreviations) to strip, and the equivalence table collapsing spelling
// variants, honorifics and abbreviations onto one canonical form.
//
// These are data, not code: they live in data/rules/<country>.json and are
// curated by hand as a country's tagging quirks surface. A country without
// a rules file gets empty rules; normalization still works, it just has
// nothing to strip or collapse.
//
// File shape:
// {
//   "affixes": ["strada", "str.", "bulevardul"],
//   "equivalents": { "Mihai Eminescu": ["M. Eminescu", "Eminescu"] }
// }
// Equivalents are authored canonical-first (all variants of one person under
// a single key); lookups go the other way, so the table is inverted on load.

use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::store;

#[derive(Deserialize)]
struct RulesFile {
    #[serde(default)]
    affixes: Vec<String>,
    #[serde(default)]
    equivalents: BTreeMap<String, Vec<String>>,
}

pub struct RegionRules {
    // One pattern over all affixes, longest first so no affix can eat a
    // prefix of a longer one. None when there are no affixes at all.
    affix_re: Option<Regex>,
    // lowercased variant → canonical form, exactly as authored
    equivalents: HashMap<String, String>,
}

impl RegionRules {
    /// Rules that strip and collapse nothing.
    pub fn empty() -> Self {
        Self { affix_re: None, equivalents: HashMap::new() }
    }

    pub fn new(
        affixes: Vec<String>,
        by_canonical: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, Box<dyn Error>> {
        let mut equivalents = HashMap::new();
        for (canonical, variants) in by_canonical {
            for v in variants {
                equivalents.insert(v.trim().to_lowercase(), canonical.clone());
            }
        }
        Ok(Self { affix_re: build_affix_re(affixes)?, equivalents })
    }

    /// Load the rules for `country`. A missing file is the normal case for
    /// most countries and yields empty rules; a file that exists but does
    /// not parse is a config error worth failing on.
    pub fn load(country: &str) -> Result<Self, Box<dyn Error>> {
        let path = store::rules_file(country);
        if !Path::new(&path).exists() {
            return Ok(Self::empty());
        }
        let text = fs::read_to_string(&path)?;
        let file: RulesFile = serde_json::from_str(&text)
            .map_err(|e| format!("bad rules file {}: {}", path.display(), e))?;
        Self::new(file.affixes, file.equivalents)
    }

    /// The compiled affix pattern, if any affixes are configured.
    pub fn affix_pattern(&self) -> Option<&Regex> {
        self.affix_re.as_ref()
    }

    /// Canonical form for an already-lowercased stripped name, if the
    /// equivalence table knows it.
    pub fn canonical_for(&self, lowercased: &str) -> Option<&str> {
        self.equivalents.get(lowercased).map(|c| c.as_str())
    }
}

/// Variants listed more than once across a country's equivalence table,
/// case-insensitive. Each spelling should map to exactly one canonical
/// form; a duplicate means two canonicals are fighting over it.
pub fn variant_duplicates(country: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let path = store::rules_file(country);
    if !Path::new(&path).exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path)?;
    let file: RulesFile = serde_json::from_str(&text)
        .map_err(|e| format!("bad rules file {}: {}", path.display(), e))?;

    let mut seen: BTreeMap<String, u32> = BTreeMap::new();
    for variants in file.equivalents.values() {
        for v in variants {
            *seen.entry(v.trim().to_lowercase()).or_insert(0) += 1;
        }
    }
    Ok(seen
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(v, _)| v)
        .collect())
}

fn build_affix_re(mut affixes: Vec<String>) -> Result<Option<Regex>, Box<dyn Error>> {
    affixes.retain(|a| !a.trim().is_empty());
    if affixes.is_empty() {
        return Ok(None);
    }
    // Longest first. Matters for affixes sharing a stem ("bulevardul" vs
    // "bulevard"): the alternation tries left to right.
    affixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

    let alternation = affixes
        .iter()
        .map(|a| bounded(a.trim()))
        .collect::<Vec<_>>()
        .join("|");

    Ok(Some(Regex::new(&format!("(?i){}", alternation))?))
}

// \b only works next to word characters; affixes like "str." end in
// punctuation, so each side gets its boundary only when it can hold one.
fn bounded(affix: &str) -> String {
    let mut pat = s!();
    if affix.chars().next().is_some_and(is_word_char) {
        pat.push_str(r"\b");
    }
    pat.push_str(&regex::escape(affix));
    if affix.chars().last().is_some_and(is_word_char) {
        pat.push_str(r"\b");
    }
    pat
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
