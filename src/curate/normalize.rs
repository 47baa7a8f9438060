// src/curate/normalize.rs
//
// Street name → person name.
//
// Raw street names bury the person under street-type words ("Strada Mihai
// Eminescu", "Calle de Cervantes"). Normalization strips the region's affix
// tokens wherever they appear as whole words, collapses the leftover
// whitespace, then folds known spelling variants onto a single canonical
// form through the region's equivalence table.

use crate::config::RegionRules;

/// Normalize one raw street name under the region's rules.
///
/// Stripping is case-insensitive; the surviving text keeps its original
/// case. The equivalence lookup is case-insensitive on the stripped form
/// and, on a hit, replaces it with the canonical spelling as authored.
/// Can come back empty when the whole name was affixes.
pub fn normalize(raw: &str, rules: &RegionRules) -> String {
    let stripped = match rules.affix_pattern() {
        Some(re) => normalize_ws(&re.replace_all(raw, " ")),
        None => normalize_ws(raw),
    };
    match rules.canonical_for(&stripped.to_lowercase()) {
        Some(canonical) => s!(canonical),
        None => stripped,
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rules(affixes: &[&str], equivalents: &[(&str, &[&str])]) -> RegionRules {
        let by_canonical: BTreeMap<String, Vec<String>> = equivalents
            .iter()
            .map(|(c, vs)| (s!(*c), vs.iter().map(|v| s!(*v)).collect()))
            .collect();
        RegionRules::new(affixes.iter().map(|a| s!(*a)).collect(), by_canonical).unwrap()
    }

    #[test]
    fn strips_affixes_case_insensitively() {
        let r = rules(&["strada", "str."], &[]);
        assert_eq!(normalize("Strada Mihai Eminescu", &r), "Mihai Eminescu");
        assert_eq!(normalize("STRADA Mihai Eminescu", &r), "Mihai Eminescu");
        assert_eq!(normalize("str. Mihai Eminescu", &r), "Mihai Eminescu");
    }

    #[test]
    fn affix_must_match_whole_word() {
        // "strada" the affix must not eat the "str" inside "Stradivari"
        let r = rules(&["str"], &[]);
        assert_eq!(normalize("Stradivari", &r), "Stradivari");
        assert_eq!(normalize("str Stradivari", &r), "Stradivari");
    }

    #[test]
    fn longest_affix_wins_over_shared_stem() {
        let r = rules(&["bulevard", "bulevardul"], &[]);
        assert_eq!(normalize("Bulevardul Unirii", &r), "Unirii");
    }

    #[test]
    fn equivalence_folds_variants_onto_canonical() {
        let r = rules(&["strada"], &[("Mihai Eminescu", &["M. Eminescu", "eminescu"])]);
        assert_eq!(normalize("Strada M. Eminescu", &r), "Mihai Eminescu");
        assert_eq!(normalize("Eminescu", &r), "Mihai Eminescu");
        assert_eq!(normalize("Strada Eminescu", &r), "Mihai Eminescu");
    }

    #[test]
    fn all_affix_name_goes_empty() {
        let r = rules(&["strada", "veche"], &[]);
        assert_eq!(normalize("Strada Veche", &r), "");
    }

    #[test]
    fn empty_rules_only_tidy_whitespace() {
        let r = RegionRules::empty();
        assert_eq!(normalize("  Ion   Creang\u{103} ", &r), "Ion Creang\u{103}");
    }
}
