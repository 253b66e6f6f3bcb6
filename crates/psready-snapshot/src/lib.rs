//! Namespace snapshot parsing for psready.
//!
//! This crate is intentionally IO-free: it turns a JSON document provided as
//! a string into a `ClusterSnapshot` the engine can evaluate, so the domain
//! crate never sees wire formats.

#![forbid(unsafe_code)]

mod parse;

pub use parse::{parse_snapshot, ParsedSnapshot};
