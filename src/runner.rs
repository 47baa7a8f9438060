// src/runner.rs
//
// Command implementations: wire the store, the curation engine, the
// classifier and the wiki fetcher together, and print the human-facing
// reports. Everything here is composition; the policy lives in the
// modules it calls.

use std::error::Error;

use crate::checks;
use crate::config::{RegionRules, regions};
use crate::curate;
use crate::data::RegionDataset;
use crate::occupations::{self, Classifier, Taxonomy};
use crate::progress::Progress;
use crate::store;
use crate::wiki;

/// Progress sink that prints one line per event.
pub struct CliProgress {
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("fetching {} persons", total);
    }
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn item_done(&mut self, idx: usize, label: &str) {
        println!("[{}/{}] {}", idx + 1, self.total, label);
    }
    fn item_failed(&mut self, idx: usize, label: &str) {
        println!("[{}/{}] FAILED {}", idx + 1, self.total, label);
    }
}

/* ---------- commands ---------- */

/// Rebuild the curated dataset for one country from its raw extraction.
pub fn update(country: &str) -> Result<(), Box<dyn Error>> {
    let raw = store::read_raw(&store::raw_file(country))?;
    let rules = RegionRules::load(country)?;
    let min = regions::min_street_frequency(country)
        .ok_or_else(|| format!("no frequency threshold configured for {}", country))?;

    let counted = curate::count_streets(&raw.pairs, &rules, min);
    let previous = store::read_dataset(&store::dataset_file(country))?;
    let eponyms = curate::hydrate(counted, previous.as_ref());

    // the dataset is as fresh as the extraction it came from
    let ds = RegionDataset { date: raw.date, eponyms };
    store::write_dataset(&store::dataset_file(country), &ds)?;

    logf!("update {}: {} pairs -> {} eponyms", country, raw.pairs.len(), ds.eponyms.len());
    println!(
        "{}: {} eponyms ({} linked), {} streets",
        regions::display_name(country),
        ds.eponyms.len(),
        ds.linked().count(),
        ds.total_streets()
    );
    Ok(())
}

/// Fetch or refresh biographies for every linked person of one country.
pub fn wiki(country: &str) -> Result<(), Box<dyn Error>> {
    let ds = store::read_dataset(&store::dataset_file(country))?
        .ok_or_else(|| format!("no dataset for {}; run `update {}` first", country, country))?;
    let taxonomy = Taxonomy::load()?;
    let classifier = Classifier::new(&taxonomy)?;
    let mut persons = store::read_persons(&store::persons_file())?;

    let mut progress = CliProgress::new();
    let report = wiki::update_persons(&ds, &mut persons, &classifier, &mut progress)?;
    store::write_persons(&store::persons_file(), &persons)?;

    println!(
        "{}: {} fetched, {} failed, store holds {} persons",
        regions::display_name(country),
        report.fetched,
        report.failed,
        persons.len()
    );
    Ok(())
}

/// Print the consistency findings for one country.
pub fn check(country: &str) -> Result<(), Box<dyn Error>> {
    let report = checks::check_country(country)?;
    if report.is_clean() {
        println!("{}: ok", country);
        return Ok(());
    }
    print_section("Duplicate equivalents", &report.duplicate_variants);
    let dup_lines: Vec<String> = report
        .duplicate_links
        .iter()
        .map(|(link, names)| format!("{} ({})", link, names.join(", ")))
        .collect();
    print_section("Duplicate links", &dup_lines);
    print_section("Inconsistent links", &report.inconsistent_links);
    Ok(())
}

/// Sweep all countries with datasets and name the ones failing a check.
pub fn check_all() -> Result<(), Box<dyn Error>> {
    let failing = checks::check_all()?;
    if failing.is_empty() {
        println!("all countries ok");
        return Ok(());
    }
    let mut dup_equivalents = Vec::new();
    let mut dup_links = Vec::new();
    let mut bad_links = Vec::new();
    for (country, r) in &failing {
        if !r.duplicate_variants.is_empty() {
            dup_equivalents.push(s!(country));
        }
        if !r.duplicate_links.is_empty() {
            dup_links.push(s!(country));
        }
        if !r.inconsistent_links.is_empty() {
            bad_links.push(s!(country));
        }
    }
    print_section("Countries with duplicate equivalents", &dup_equivalents);
    print_section("Countries with duplicate links", &dup_links);
    print_section("Countries with inconsistent links", &bad_links);
    Ok(())
}

/// Aggregate every country dataset into the worldwide ranking.
pub fn worldwide() -> Result<(), Box<dyn Error>> {
    let countries = store::countries_with_datasets()?;
    let mut datasets = Vec::with_capacity(countries.len());
    for country in &countries {
        if let Some(ds) = store::read_dataset(&store::dataset_file(country))? {
            datasets.push(ds);
        }
    }
    let entries = curate::aggregate_worldwide(&datasets);

    println!("regions  streets  person");
    for e in &entries {
        println!(
            "{:>7}  {:>7}  {} ({})",
            e.region_count,
            e.street_count,
            wiki::display_name(&e.link),
            e.link
        );
    }
    println!("{} persons across {} datasets", entries.len(), datasets.len());
    Ok(())
}

/// Print keyword usage over the whole person store.
pub fn occupations() -> Result<(), Box<dyn Error>> {
    let taxonomy = Taxonomy::load()?;
    let persons = store::read_persons(&store::persons_file())?;
    for e in occupations::occupation_frequency(&persons, &taxonomy) {
        println!("{:>6}  {}", e.count, e.keyword);
    }
    Ok(())
}

/// Rebuild every stored person's occupations from the current taxonomy.
pub fn occupations_update() -> Result<(), Box<dyn Error>> {
    let taxonomy = Taxonomy::load()?;
    let classifier = Classifier::new(&taxonomy)?;
    let mut persons = store::read_persons(&store::persons_file())?;
    occupations::reclassify_all(&mut persons, &classifier);
    store::write_persons(&store::persons_file(), &persons)?;
    println!("reclassified {} persons", persons.len());
    Ok(())
}

/// List all configured countries; a star marks a curated dataset on disk.
pub fn countries() -> Result<(), Box<dyn Error>> {
    let have = store::countries_with_datasets()?;
    for country in regions::all_countries() {
        let marker = if have.iter().any(|c| c == country) { "*" } else { " " };
        let region = regions::country_region(country).unwrap_or("-");
        let min = regions::min_street_frequency(country).unwrap_or(0);
        println!("{} {:<34} {:<18} min {}", marker, country, region, min);
    }
    println!("\n* = curated dataset on disk ({} of {})", have.len(), regions::all_countries().len());
    Ok(())
}

/* ---------- helpers ---------- */

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("{}:", title);
    for line in lines {
        println!("  {}", line);
    }
    println!();
}
