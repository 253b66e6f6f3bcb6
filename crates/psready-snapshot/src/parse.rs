use anyhow::Context;
use psready_domain::model::{ClusterSnapshot, NamespaceDescriptor};
use psready_domain::policy::SnapshotFormat;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A parsed snapshot plus the format it was actually parsed as.
#[derive(Clone, Debug)]
pub struct ParsedSnapshot {
    pub snapshot: ClusterSnapshot,
    /// Never `Auto`; sniffing resolves to a concrete format.
    pub format: SnapshotFormat,
}

#[derive(Debug, Deserialize)]
struct DescriptorDoc {
    name: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct NamespaceListDoc {
    #[serde(default)]
    items: Vec<NamespaceItemDoc>,
}

#[derive(Debug, Deserialize)]
struct NamespaceItemDoc {
    #[serde(default)]
    metadata: ObjectMetaDoc,
}

#[derive(Debug, Default, Deserialize)]
struct ObjectMetaDoc {
    #[serde(default)]
    name: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

/// Parse snapshot JSON into the domain model.
///
/// `Auto` sniffs the top-level shape: an array parses as a descriptor list,
/// an object with `items` as a `kubectl get namespaces -o json` namespace
/// list. Missing label maps parse as empty.
pub fn parse_snapshot(text: &str, format: SnapshotFormat) -> anyhow::Result<ParsedSnapshot> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("parse snapshot json")?;

    let format = match format {
        SnapshotFormat::Auto => sniff_format(&value)?,
        concrete => concrete,
    };

    let snapshot = match format {
        SnapshotFormat::Descriptors => {
            let docs: Vec<DescriptorDoc> =
                serde_json::from_value(value).context("parse descriptor list")?;
            ClusterSnapshot {
                namespaces: docs
                    .into_iter()
                    .map(|doc| NamespaceDescriptor {
                        name: doc.name,
                        labels: doc.labels,
                    })
                    .collect(),
            }
        }
        SnapshotFormat::NamespaceList => {
            let doc: NamespaceListDoc =
                serde_json::from_value(value).context("parse namespace list")?;
            ClusterSnapshot {
                namespaces: doc
                    .items
                    .into_iter()
                    .map(|item| NamespaceDescriptor {
                        name: item.metadata.name,
                        labels: item.metadata.labels,
                    })
                    .collect(),
            }
        }
        SnapshotFormat::Auto => unreachable!("auto resolved above"),
    };

    Ok(ParsedSnapshot { snapshot, format })
}

fn sniff_format(value: &serde_json::Value) -> anyhow::Result<SnapshotFormat> {
    if value.is_array() {
        return Ok(SnapshotFormat::Descriptors);
    }
    if value.get("items").is_some() {
        return Ok(SnapshotFormat::NamespaceList);
    }
    anyhow::bail!("unrecognized snapshot shape (expected a top-level array or an object with items)")
}
