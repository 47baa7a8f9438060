// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod checks;
pub mod cli;
pub mod config;
pub mod curate;
pub mod data;
pub mod occupations;
pub mod progress;
pub mod runner;
pub mod store;
pub mod wiki;
