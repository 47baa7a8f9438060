// src/curate/mod.rs
mod normalize;
mod count;
mod hydrate;
mod worldwide;

pub use normalize::normalize;
pub use normalize::normalize_ws;
pub use count::count_streets;
pub use hydrate::hydrate;
pub use worldwide::aggregate_worldwide;
