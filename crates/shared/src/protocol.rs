use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Scenario;

/// Per-thesis namespace of the aggregates document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl Namespace {
    pub const ALL: [Namespace; 5] = [
        Namespace::T1,
        Namespace::T2,
        Namespace::T3,
        Namespace::T4,
        Namespace::T5,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 => "t3",
            Self::T4 => "t4",
            Self::T5 => "t5",
        }
    }

    /// Chart sections a namespace carries in the mock document.
    pub fn sections(self) -> [&'static str; 2] {
        match self {
            Self::T1 => ["treemap", "sankey"],
            Self::T2 => ["pareto", "suppliers"],
            Self::T3 => ["compliance", "heatmap"],
            Self::T4 => ["boxplot", "control"],
            Self::T5 => ["histogram", "waterfall"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub generated: String,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Aggregates document: `metadata` plus one object per namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDocument {
    pub metadata: DocumentMetadata,
    #[serde(flatten)]
    pub namespaces: BTreeMap<String, Value>,
}

impl DataDocument {
    pub fn namespace(&self, namespace: Namespace) -> Option<&Value> {
        self.namespaces.get(namespace.key())
    }

    pub fn missing_namespaces(&self) -> Vec<Namespace> {
        Namespace::ALL
            .into_iter()
            .filter(|ns| self.namespace(*ns).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_namespaces().is_empty()
    }
}
