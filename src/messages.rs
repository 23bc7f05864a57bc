use serde::{Deserialize, Serialize};

/// One line of input in stream mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    #[serde(default)]
    pub left: Vec<i64>,
    #[serde(default)]
    pub right: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub merged: Vec<i64>,
    /// False if either input broke the non-decreasing precondition.
    pub sorted_inputs: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MergeResponse {
    Merged(MergeResult),
    Error(String),
}
