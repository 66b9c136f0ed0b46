//! Ordered label dictionary with closed key set.

use indexmap::IndexMap;
use serde::Serialize;

/// What happened when an override was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelEvent {
    /// Known label, value replaced
    Found { key: String, value: String },
    /// Label not in the dictionary, ignored
    Unknown { key: String, value: String },
}

impl LabelEvent {
    pub fn key(&self) -> &str {
        match self {
            LabelEvent::Found { key, .. } | LabelEvent::Unknown { key, .. } => key,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, LabelEvent::Unknown { .. })
    }
}

/// Label identifier to display string, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDictionary {
    labels: IndexMap<String, String>,
}

impl LabelDictionary {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            labels: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Replace the value of an existing label. Unknown keys leave the
    /// dictionary untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> LabelEvent {
        match self.labels.get_mut(key) {
            Some(current) => {
                tracing::info!("Found Label: {} - {}", key, value);
                *current = value.to_string();
                LabelEvent::Found {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            None => {
                tracing::warn!("Unknown Label Found: {} - {}", key, value);
                LabelEvent::Unknown {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
