// src/store.rs
//
// File locations and persistence for everything under data/:
//
//   osm/raw/<country>.json   raw extraction: [["<date>"], ["city","street"], ...]
//   eponyms/<country>.json   curated: [["<date>"], ["name", count, "link"], ...]
//   rules/<country>.json     normalization rules (affixes + equivalents)
//   persons.json             biography store keyed by wikipedia link
//   taxonomy.json            occupation vocabulary
//
// Dataset files keep the positional row layout with one row per line, so
// a regeneration shows up in version control as a clean row diff.

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::config::consts::{
    DATA_DIR, EPONYMS_SUBDIR, PERSONS_FILE, RAW_SUBDIR, RULES_SUBDIR, TAXONOMY_FILE,
};
use crate::data::{Eponym, PersonStore, RawStreets, RegionDataset};

/* ---------- locations ---------- */

pub fn data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}
pub fn raw_file(country: &str) -> PathBuf {
    data_dir().join(RAW_SUBDIR).join(format!("{}.json", country))
}
pub fn dataset_file(country: &str) -> PathBuf {
    data_dir().join(EPONYMS_SUBDIR).join(format!("{}.json", country))
}
pub fn rules_file(country: &str) -> PathBuf {
    data_dir().join(RULES_SUBDIR).join(format!("{}.json", country))
}
pub fn persons_file() -> PathBuf {
    data_dir().join(PERSONS_FILE)
}
pub fn taxonomy_file() -> PathBuf {
    data_dir().join(TAXONOMY_FILE)
}

/// Countries that already have a curated dataset on disk, sorted.
pub fn countries_with_datasets() -> Result<Vec<String>, Box<dyn Error>> {
    let dir = data_dir().join(EPONYMS_SUBDIR);
    let mut out = Vec::new();
    if !dir.exists() {
        return Ok(out);
    }
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            out.push(s!(stem));
        }
    }
    out.sort();
    Ok(out)
}

/* ---------- raw extraction files ---------- */

/// Read a raw extraction file: the date header plus (city, street) pairs.
/// The file is produced by the external extraction step; its absence is a
/// usage error, not a first-run state.
pub fn read_raw(path: &Path) -> Result<RawStreets, Box<dyn Error>> {
    let text = fs::read_to_string(path).map_err(|e| {
        format!(
            "cannot read raw file {}: {} (run the osm extraction first)",
            path.display(),
            e
        )
    })?;
    let rows: Vec<Vec<String>> = serde_json::from_str(&text)
        .map_err(|e| format!("bad raw file {}: {}", path.display(), e))?;

    let mut rows = rows.into_iter();
    let date = rows
        .next()
        .and_then(|header| header.into_iter().next())
        .ok_or_else(|| format!("bad raw file {}: missing date header", path.display()))?;

    let mut pairs = Vec::new();
    for (i, row) in rows.enumerate() {
        let mut cells = row.into_iter();
        match (cells.next(), cells.next()) {
            (Some(city), Some(street)) => pairs.push((city, street)),
            // rows are numbered as they appear in the file
            _ => {
                return Err(
                    format!("bad raw file {}: row {} is not a pair", path.display(), i + 2).into()
                );
            }
        }
    }
    Ok(RawStreets { date, pairs })
}

/* ---------- curated dataset files ---------- */

/// Read a curated dataset. A missing file is the normal state before the
/// first curation run and comes back as `None`.
pub fn read_dataset(path: &Path) -> Result<Option<RegionDataset>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let rows: Vec<Value> = serde_json::from_str(&text)
        .map_err(|e| format!("bad dataset file {}: {}", path.display(), e))?;

    let bad = |what: &str| -> Box<dyn Error> {
        format!("bad dataset file {}: {}", path.display(), what).into()
    };

    let mut rows = rows.into_iter();
    let date = match rows.next() {
        Some(Value::Array(header)) => match header.into_iter().next() {
            Some(Value::String(d)) => d,
            _ => return Err(bad("date header")),
        },
        _ => return Err(bad("date header")),
    };

    let mut eponyms = Vec::new();
    for row in rows {
        let cells = match row {
            Value::Array(c) => c,
            _ => return Err(bad("row is not an array")),
        };
        let mut cells = cells.into_iter();
        let name = match cells.next() {
            Some(Value::String(n)) => n,
            _ => return Err(bad("row name")),
        };
        let count = match cells.next().as_ref().and_then(Value::as_u64) {
            Some(c) => c as u32,
            None => return Err(bad("row count")),
        };
        // two-cell rows predate links and read as unlinked
        let link = match cells.next() {
            Some(Value::String(l)) => {
                if l.is_empty() {
                    None
                } else {
                    Some(l)
                }
            }
            None => None,
            Some(_) => return Err(bad("row link")),
        };
        eponyms.push(Eponym { name, count, link });
    }
    Ok(Some(RegionDataset { date, eponyms }))
}

/// Write a curated dataset, one row per line.
pub fn write_dataset(path: &Path, ds: &RegionDataset) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let file = fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    write!(w, "[{}", json!([ds.date]))?;
    for e in &ds.eponyms {
        let row = json!([e.name, e.count, e.link.as_deref().unwrap_or("")]);
        write!(w, ",\n{}", row)?;
    }
    writeln!(w, "]")?;
    w.flush()?;
    Ok(())
}

/* ---------- person store ---------- */

/// Read the person store. An absent file means nothing has been fetched
/// yet and comes back as an empty store.
pub fn read_persons(path: &Path) -> Result<PersonStore, Box<dyn Error>> {
    if !path.exists() {
        return Ok(PersonStore::new());
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| format!("bad persons file {}: {}", path.display(), e).into())
}

pub fn write_persons(path: &Path, persons: &PersonStore) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(persons)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/* ---------- helpers ---------- */

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
