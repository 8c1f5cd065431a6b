use serde::{Deserialize, Serialize};

/// One record from the sheet, coerced to strings by the row source.
/// `group` carries the raw comma-separated rollout group definitions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Row {
    pub key: String,
    pub value: String,
    pub group: String,
}

impl Row {
    pub fn new(key: &str, value: &str, group: &str) -> Row {
        Row {
            key: key.to_string(),
            value: value.to_string(),
            group: group.to_string(),
        }
    }
}

/// A named cohort and how broadly the toggle applies within it.
/// `rollout_percentage` is always within 0..=100, the parser clamps
/// whatever the sheet held.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloutGroup {
    pub name: String,
    pub rollout_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    pub name: String,
    pub value: String,
    pub groups: Vec<RolloutGroup>,
}
