// src/config/mod.rs

pub mod consts;
pub mod regions;
pub mod rules;

pub use rules::RegionRules;
