use serde::{Deserialize, Serialize};

/// Body of `POST /api/consistency`.
///
/// Fields are optional on the wire so that an absent key and a blank value
/// both end up as the same client error instead of a serde rejection.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ConsistencyIn {
    pub briefing: Option<String>,
    #[serde(rename = "brandRules")]
    pub brand_rules: Option<String>,
    pub task: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub format: String,
    pub layout: Vec<String>,
    pub safe_area: String,
    pub typography: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyOut {
    pub ok: bool, // always true; failures go through ApiError
    pub image_prompt: String,
    pub applied_rules: Vec<String>,
    pub violations: Vec<String>,
    pub score: u8,
    pub layout_spec: LayoutSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}
