// src/wiki.rs
//
// Biography fetch from the wikipedia REST API.
//
// Every linked eponym points at a wikipedia article; the page summary
// endpoint gives the person's display name, a thumbnail and a short
// extract, which the classifier then mines for occupations. Fetches run
// sequentially with a long randomized pause between requests. One bad
// link or flaky response never aborts the batch; the caller persists
// whatever was fetched.

use std::collections::BTreeSet;
use std::error::Error;
use std::thread;
use std::time::Duration;

use rand::Rng;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::{JITTER_MS, REQUEST_PAUSE_MS, REQUEST_TIMEOUT_SECS};
use crate::data::{PersonRecord, PersonStore, RegionDataset};
use crate::occupations::Classifier;
use crate::progress::Progress;

#[derive(Deserialize)]
struct PageSummary {
    title: Option<String>,
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

/// Outcome counts for one fetch batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub fetched: usize,
    pub failed: usize,
}

/// Fetch or refresh biography records for every linked row of `dataset`.
///
/// Each distinct link is fetched once. An existing record is overwritten
/// with the fresh name, image and summary and its occupations are
/// reclassified; `occupations_extra` always survives the refresh.
pub fn update_persons(
    dataset: &RegionDataset,
    persons: &mut PersonStore,
    classifier: &Classifier,
    progress: &mut dyn Progress,
) -> Result<FetchReport, Box<dyn Error>> {
    let mut seen = BTreeSet::new();
    let links: Vec<&str> = dataset
        .linked()
        .filter_map(|e| e.link.as_deref())
        .filter(|l| seen.insert(*l))
        .collect();

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("eponyms/", env!("CARGO_PKG_VERSION")))
        .build()?;

    progress.begin(links.len());
    logf!("wiki: fetching {} persons", links.len());

    let mut report = FetchReport::default();
    let mut rng = rand::thread_rng();
    for (i, link) in links.iter().enumerate() {
        pause(&mut rng);
        match fetch_person(&client, link) {
            Ok(mut record) => {
                record.occupations_extra = persons
                    .get(*link)
                    .map(|prev| prev.occupations_extra.clone())
                    .unwrap_or_default();
                record.occupations = classifier
                    .classify(&record.summary, &record.occupations_extra)
                    .into_iter()
                    .collect();
                logd!("wiki: {} -> {}", link, record.name);
                progress.item_done(i, &record.name);
                persons.insert(s!(*link), record);
                report.fetched += 1;
            }
            Err(e) => {
                loge!("wiki: {} failed: {}", link, e);
                progress.item_failed(i, link);
                report.failed += 1;
            }
        }
    }
    progress.finish();
    logf!("wiki: done, {} fetched, {} failed", report.fetched, report.failed);
    Ok(report)
}

// Poor man's rate limiter. The API would allow much more, but nobody is
// waiting on this batch.
fn pause(rng: &mut impl Rng) {
    let jitter = rng.gen_range(0..JITTER_MS);
    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter));
}

fn fetch_person(client: &Client, link: &str) -> Result<PersonRecord, Box<dyn Error>> {
    let (lang, page) = page_parts(link)
        .ok_or_else(|| format!("not a wikipedia article link: {}", link))?;
    let url = format!(
        "https://{}.wikipedia.org/api/rest_v1/page/summary/{}",
        lang, page
    );
    let summary: PageSummary = client.get(&url).send()?.error_for_status()?.json()?;

    // pages with no title are error payloads the endpoint serves with 200
    let name = match summary.title {
        Some(n) => n,
        None => return Err(format!("no page summary at {}", url).into()),
    };
    Ok(PersonRecord {
        name,
        image: summary.thumbnail.and_then(|t| t.source).unwrap_or_default(),
        summary: summary.extract.unwrap_or_default(),
        occupations: Vec::new(),
        occupations_extra: Vec::new(),
    })
}

/// "https://ro.wikipedia.org/wiki/Mihai_Eminescu" → ("ro", "Mihai_Eminescu")
fn page_parts(link: &str) -> Option<(&str, &str)> {
    let rest = link.split("//").nth(1)?;
    let host = rest.split('/').next()?;
    let lang = host.split('.').next()?;
    let page = rest.rsplit('/').next()?;
    if lang.is_empty() || page.is_empty() || page == host || !host.contains("wikipedia") {
        return None;
    }
    Some((lang, page))
}

/// Human name as the article link spells it: last path segment,
/// percent-decoded, underscores to spaces.
pub fn display_name(link: &str) -> String {
    let page = link.rsplit('/').next().unwrap_or(link);
    let page = match urlencoding::decode(page) {
        Ok(d) => d.into_owned(),
        Err(_) => s!(page),
    };
    page.replace('_', " ")
}
