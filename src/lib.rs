//! caseharvest — browser-driven harvester for public missing-person case records.
//!
//! Drives Chromium through a state-by-state search flow on the source site,
//! opens every case detail page in the result list, and extracts structured
//! fields (identity, circumstances, physical characteristics, photos,
//! contacts, investigating agency) into one JSON document per state, keyed
//! by case identifier.

pub mod browser;
pub mod cli;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod records;
pub mod sink;
