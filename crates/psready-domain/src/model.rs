use std::collections::BTreeMap;

/// A namespace as seen by one evaluation pass.
///
/// Read-only input; the evaluation never mutates it.
#[derive(Clone, Debug, Default)]
pub struct NamespaceDescriptor {
    pub name: String,
    pub labels: BTreeMap<String, String>,
}

impl NamespaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        NamespaceDescriptor {
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn has_label_value(&self, key: &str, value: &str) -> bool {
        self.labels.get(key).is_some_and(|v| v == value)
    }
}

/// All namespaces supplied for one evaluation pass.
#[derive(Clone, Debug, Default)]
pub struct ClusterSnapshot {
    pub namespaces: Vec<NamespaceDescriptor>,
}
