//! Use case orchestration for psready.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, snapshot, domain, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use psready_render::render_markdown;
pub use render::{parse_report_json, serialize_report, serialize_status};
