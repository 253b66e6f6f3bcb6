//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::PsreadyConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `psready.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PsreadyConfigV1> {
    let cfg: PsreadyConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by a run (file config + CLI overrides).
pub fn resolve_config(
    cfg: PsreadyConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
