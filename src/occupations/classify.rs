// src/occupations/classify.rs
//
// Keyword classifier over biography summaries.
//
// A summary like "was a Romanian poet, novelist and journalist" carries
// the occupations in plain sight; the classifier scans for the taxonomy's
// vocabulary as whole words, folds in the curator's manual extras, then
// rolls matched keywords up into their categories (a poet is a writer).
// Rollup runs one level: labels added by it are not rolled up again.

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;

use regex::Regex;

use crate::data::{KeywordCount, PersonStore};

use super::taxonomy::Taxonomy;

pub struct Classifier {
    // None when the vocabulary is empty
    vocab_re: Option<Regex>,
    categories: BTreeMap<String, BTreeSet<String>>,
    ignored: BTreeSet<String>,
}

impl Classifier {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, Box<dyn Error>> {
        let unique: BTreeSet<String> = taxonomy
            .occupations
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        // Longest first so "film director" is tried before any keyword
        // sharing its prefix.
        let mut vocab: Vec<String> = unique.into_iter().collect();
        vocab.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

        let vocab_re = if vocab.is_empty() {
            None
        } else {
            let alternation = vocab
                .iter()
                .map(|k| format!(r"\b{}\b", regex::escape(k)))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("(?i){}", alternation))?)
        };

        let categories = taxonomy
            .categories
            .iter()
            .map(|(label, members)| {
                let members = members.iter().map(|m| m.trim().to_lowercase()).collect();
                (label.trim().to_lowercase(), members)
            })
            .collect();
        let ignored = taxonomy.ignored.iter().map(|t| t.trim().to_lowercase()).collect();

        Ok(Self { vocab_re, categories, ignored })
    }

    /// Occupation set for one summary plus its manual extras.
    ///
    /// Keywords match as whole words, case-insensitively, so "general"
    /// never fires on "generally". Extras join the set lowercased whether
    /// or not the vocabulary knows them, and roll up like scanned
    /// keywords. Ignored tags are dropped last.
    pub fn classify(&self, summary: &str, extras: &[String]) -> BTreeSet<String> {
        let mut set: BTreeSet<String> = BTreeSet::new();

        if let Some(re) = &self.vocab_re {
            for m in re.find_iter(summary) {
                set.insert(m.as_str().to_lowercase());
            }
        }
        for extra in extras {
            let extra = extra.trim().to_lowercase();
            if !extra.is_empty() {
                set.insert(extra);
            }
        }

        // one rollup level: labels added here do not recurse
        let mut labels = Vec::new();
        for (label, members) in &self.categories {
            if set.iter().any(|k| members.contains(k)) {
                labels.push(label.clone());
            }
        }
        set.extend(labels);

        for tag in &self.ignored {
            set.remove(tag);
        }
        set
    }
}

/// Rebuild every stored person's occupation set from its summary and
/// extras. Run after editing the taxonomy; nothing else changes.
pub fn reclassify_all(persons: &mut PersonStore, classifier: &Classifier) {
    for record in persons.values_mut() {
        record.occupations = classifier
            .classify(&record.summary, &record.occupations_extra)
            .into_iter()
            .collect();
    }
}

/// Keyword usage across the whole person store: for every vocabulary
/// keyword and category label, how many persons carry it. Zero counts stay
/// in so dead vocabulary is visible. Sorted count desc, then keyword.
pub fn occupation_frequency(persons: &PersonStore, taxonomy: &Taxonomy) -> Vec<KeywordCount> {
    let mut labels: BTreeSet<String> =
        taxonomy.occupations.iter().map(|k| k.trim().to_lowercase()).collect();
    labels.extend(taxonomy.categories.keys().map(|k| k.trim().to_lowercase()));
    labels.remove("");

    let mut out: Vec<KeywordCount> = labels
        .into_iter()
        .map(|keyword| {
            let count = persons
                .values()
                .filter(|p| {
                    p.occupations
                        .iter()
                        .chain(p.occupations_extra.iter())
                        .any(|o| o == &keyword)
                })
                .count() as u32;
            KeywordCount { keyword, count }
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    out
}
