//! Flat JSON document store
//!
//! Holds the full application state in memory and optionally mirrors it to a
//! single JSON file, rewriting the whole document on every mutation. There is
//! no journaling and no partial write: the in-memory copy is the source of
//! truth and the file is a best-effort mirror for restarts.

mod json_store;

pub use json_store::{JsonStore, StoreData, StoreError, VolunteerOutcome};
