use crate::model::PsreadyConfigV1;
use anyhow::Context;
use psready_domain::policy::{EffectiveConfig, FailOn, SnapshotFormat};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub fail_on: Option<String>,
    pub format: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PsreadyConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on).context("resolve fail_on")?;
    }

    if let Some(format) = overrides.format.as_deref().or(cfg.format.as_deref()) {
        effective.format = parse_format(format).context("resolve format")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "violations" => Ok(FailOn::Violations),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected 'violations' or 'never')"),
    }
}

fn parse_format(v: &str) -> anyhow::Result<SnapshotFormat> {
    match v {
        "auto" => Ok(SnapshotFormat::Auto),
        "descriptors" => Ok(SnapshotFormat::Descriptors),
        "namespace-list" => Ok(SnapshotFormat::NamespaceList),
        other => {
            anyhow::bail!("unknown format: {other} (expected auto|descriptors|namespace-list)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn defaults_apply_when_config_is_empty() {
        let resolved = resolve_config(PsreadyConfigV1::default(), Overrides::default()).unwrap();
        assert_eq!(resolved.effective.fail_on, FailOn::Violations);
        assert_eq!(resolved.effective.format, SnapshotFormat::Auto);
    }

    #[test]
    fn file_values_are_used() {
        let cfg = parse_config_toml(
            r#"
schema = "psready.config.v1"
fail_on = "never"
format = "namespace-list"
"#,
        )
        .unwrap();

        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.effective.fail_on, FailOn::Never);
        assert_eq!(resolved.effective.format, SnapshotFormat::NamespaceList);
    }

    #[test]
    fn overrides_beat_the_file() {
        let cfg = parse_config_toml("fail_on = \"never\"").unwrap();
        let overrides = Overrides {
            fail_on: Some("violations".to_string()),
            format: Some("descriptors".to_string()),
        };

        let resolved = resolve_config(cfg, overrides).unwrap();
        assert_eq!(resolved.effective.fail_on, FailOn::Violations);
        assert_eq!(resolved.effective.format, SnapshotFormat::Descriptors);
    }

    #[test]
    fn unknown_values_are_errors() {
        let cfg = parse_config_toml("fail_on = \"warn\"").unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());

        let cfg = parse_config_toml("format = \"yaml\"").unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }
}
