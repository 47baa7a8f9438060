// src/config/consts.rs

// Local data layout
pub const DATA_DIR: &str = "data";
pub const RAW_SUBDIR: &str = "osm/raw";
pub const EPONYMS_SUBDIR: &str = "eponyms";
pub const RULES_SUBDIR: &str = "rules";
pub const PERSONS_FILE: &str = "persons.json";
pub const TAXONOMY_FILE: &str = "taxonomy.json";
pub const LOG_FILE: &str = "data/debug.log";

// Curation policy. Street names shorter than this many characters almost
// never designate a person; the per-region frequency floor lives in
// `config::regions`.
pub const MIN_NAME_CHARS: usize = 3;

// Biography fetch pacing. The Wikipedia REST API rate limit is generous,
// but we are a batch tool with no deadline; stay far below it.
pub const REQUEST_PAUSE_MS: u64 = 5_000;
pub const JITTER_MS: u64 = 200;
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
