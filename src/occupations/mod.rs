// src/occupations/mod.rs
mod taxonomy;
mod classify;

pub use taxonomy::Taxonomy;
pub use classify::Classifier;
pub use classify::occupation_frequency;
pub use classify::reclassify_all;
