//! Input gate in front of the scorer and composer.

use crate::error::ConsistencyError;
use crate::serializers::consistency::ConsistencyIn;
use crate::text::trim_text;

/// A request whose three fields are present and non-blank, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brief {
    pub briefing: String,
    pub brand_rules: String,
    pub task: String,
}

impl Brief {
    pub fn new(
        briefing: impl AsRef<str>,
        brand_rules: impl AsRef<str>,
        task: impl AsRef<str>,
    ) -> Result<Self, ConsistencyError> {
        Ok(Self {
            briefing: required(Some(briefing.as_ref()))?,
            brand_rules: required(Some(brand_rules.as_ref()))?,
            task: required(Some(task.as_ref()))?,
        })
    }
}

impl TryFrom<ConsistencyIn> for Brief {
    type Error = ConsistencyError;

    fn try_from(inp: ConsistencyIn) -> Result<Self, Self::Error> {
        Ok(Self {
            briefing: required(inp.briefing.as_deref())?,
            brand_rules: required(inp.brand_rules.as_deref())?,
            task: required(inp.task.as_deref())?,
        })
    }
}

fn required(field: Option<&str>) -> Result<String, ConsistencyError> {
    match field.map(trim_text) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConsistencyError::MissingInput),
    }
}
