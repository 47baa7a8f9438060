// tests/curation.rs
//
// Full curation runs through the public API: normalize, count, hydrate
// and the dataset store, composed the way the update command composes
// them. No network.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use eponyms::config::RegionRules;
use eponyms::config::rules::variant_duplicates;
use eponyms::curate::{count_streets, hydrate, normalize};
use eponyms::data::{Eponym, RegionDataset};
use eponyms::store;

fn tmp(path: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(path);
    p
}

fn pair(city: &str, street: &str) -> (String, String) {
    (city.to_string(), street.to_string())
}

fn romanian_rules() -> RegionRules {
    let mut equivalents = BTreeMap::new();
    equivalents.insert(
        "Mihai Eminescu".to_string(),
        vec!["M. Eminescu".to_string(), "Eminescu".to_string()],
    );
    RegionRules::new(
        vec!["strada".into(), "str.".into(), "bulevardul".into()],
        equivalents,
    )
    .unwrap()
}

#[test]
fn shipped_rules_files_load_and_are_clean() {
    // cargo runs tests from the package root, where data/rules/ lives
    let rules = RegionRules::load("romania").unwrap();
    assert_eq!(normalize("Bulevardul Mihail Eminescu", &rules), "Mihai Eminescu");
    assert!(variant_duplicates("romania").unwrap().is_empty());

    let rules = RegionRules::load("spain").unwrap();
    assert_eq!(normalize("Calle de Cervantes", &rules), "Miguel de Cervantes");
    assert!(variant_duplicates("spain").unwrap().is_empty());

    // a country with no rules file still normalizes, untouched
    let rules = RegionRules::load("mongolia").unwrap();
    assert_eq!(normalize("Natsagdorj  Gudamj", &rules), "Natsagdorj Gudamj");
}

#[test]
fn designator_variants_collapse_to_one_ranked_name() {
    // Three spellings of the same honoree across three towns.
    let pairs = vec![
        pair("Cluj", "Strada Mihai Eminescu"),
        pair("Iasi", "Str. M. Eminescu"),
        pair("Brasov", "Bulevardul Eminescu"),
    ];
    let counted = count_streets(&pairs, &romanian_rules(), 2);
    assert_eq!(counted.len(), 1);
    assert_eq!(counted[0].name, "Mihai Eminescu");
    assert_eq!(counted[0].count, 3);
}

#[test]
fn two_char_names_never_rank_no_matter_how_common() {
    let pairs: Vec<(String, String)> = (0..50)
        .map(|i| pair(&format!("city{i}"), "Ny"))
        .collect();
    let counted = count_streets(&pairs, &RegionRules::empty(), 1);
    assert!(counted.is_empty());
}

#[test]
fn second_run_keeps_links_and_takes_fresh_counts() {
    // First run: count, no previous dataset, write to disk, then attach
    // a link by hand the way a curator would.
    let path = tmp("eponyms_curation_second_run.json");
    let _ = fs::remove_file(&path);

    let rules = romanian_rules();
    let first = vec![
        pair("Cluj", "Strada Mihai Eminescu"),
        pair("Iasi", "Str. Mihai Eminescu"),
        pair("Cluj", "Strada Avram Iancu"),
        pair("Iasi", "Strada Avram Iancu"),
    ];
    let counted = count_streets(&first, &rules, 2);
    let mut ds = RegionDataset { date: "2026-07-01".into(), eponyms: hydrate(counted, None) };
    assert!(ds.eponyms.iter().all(|e| e.link.is_none()));

    for e in &mut ds.eponyms {
        if e.name == "Mihai Eminescu" {
            e.link = Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu".into());
        }
    }
    store::write_dataset(&path, &ds).unwrap();

    // Second run: one more Eminescu street appeared upstream.
    let mut second = first.clone();
    second.push(pair("Brasov", "Bulevardul Eminescu"));
    let counted = count_streets(&second, &rules, 2);
    let previous = store::read_dataset(&path).unwrap();
    let ds2 = RegionDataset {
        date: "2026-08-01".into(),
        eponyms: hydrate(counted, previous.as_ref()),
    };

    let eminescu = ds2.eponyms.iter().find(|e| e.name == "Mihai Eminescu").unwrap();
    assert_eq!(eminescu.count, 3);
    assert_eq!(
        eminescu.link.as_deref(),
        Some("https://ro.wikipedia.org/wiki/Mihai_Eminescu")
    );

    // The row never curated stays unlinked, with its count refreshed.
    let iancu = ds2.eponyms.iter().find(|e| e.name == "Avram Iancu").unwrap();
    assert_eq!(iancu.count, 2);
    assert!(iancu.link.is_none());

    let _ = fs::remove_file(&path);
}

#[test]
fn counting_an_already_counted_list_changes_nothing() {
    let rules = romanian_rules();
    let pairs = vec![
        pair("Cluj", "Strada Mihai Eminescu"),
        pair("Iasi", "Str. M. Eminescu"),
        pair("Brasov", "Bulevardul Eminescu"),
        pair("Cluj", "Strada Avram Iancu"),
        pair("Iasi", "Strada Avram Iancu"),
    ];
    let counted = count_streets(&pairs, &rules, 2);

    // Expand every entry back into synthetic one-per-city pairs and
    // count again; the ranking must come out identical.
    let expanded: Vec<(String, String)> = counted
        .iter()
        .flat_map(|e| (0..e.count).map(move |i| pair(&format!("city{i}"), &e.name)))
        .collect();
    assert_eq!(count_streets(&expanded, &rules, 2), counted);
}

#[test]
fn curation_preserves_street_totals() {
    let rules = romanian_rules();
    let pairs = vec![
        pair("Cluj", "Strada Mihai Eminescu"),
        pair("Iasi", "Str. M. Eminescu"),
        pair("Cluj", "Strada Avram Iancu"),
        pair("Iasi", "Strada Avram Iancu"),
        pair("Brasov", "Strada Avram Iancu"),
    ];
    let counted = count_streets(&pairs, &rules, 1);
    let total: u64 = counted.iter().map(|e| e.count as u64).sum();
    assert_eq!(total, 5);

    // Hydration reshapes rows but never the counts.
    let previous = RegionDataset {
        date: "2026-07-01".into(),
        eponyms: vec![Eponym {
            name: "Avram Iancu".into(),
            count: 1,
            link: Some("https://ro.wikipedia.org/wiki/Avram_Iancu".into()),
        }],
    };
    let ds = RegionDataset {
        date: "2026-08-01".into(),
        eponyms: hydrate(counted, Some(&previous)),
    };
    assert_eq!(ds.total_streets(), 5);
}
