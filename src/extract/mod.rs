//! Field extraction from rendered case-page sections.
//!
//! The core of the tool: turn a section's table rows into a normalized
//! key/value field map, and the photo strip into an index-keyed URL map.
//! Everything here is synchronous and content-addressed; the browser only
//! supplies rendered text.

pub mod dom;
pub mod keys;
pub mod photos;
pub mod rows;
