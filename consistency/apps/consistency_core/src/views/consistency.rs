use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::Json;
use tracing::{info, warn};

use crate::brief::Brief;
use crate::error::ConsistencyError;
use crate::serializers::consistency::{ConsistencyIn, ConsistencyOut};
use crate::{composer, scoring};

/// The body is decoded as JSON whatever `Content-Type` the client sent.
pub async fn consistency(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConsistencyOut>, ConsistencyError> {
    // A body we cannot read is treated like one with the fields missing.
    let body = body.map_err(|rejection| {
        warn!(%rejection, "unreadable consistency request");
        ConsistencyError::MissingInput
    })?;
    let inp: ConsistencyIn = serde_json::from_slice(&body).map_err(|err| {
        warn!(%err, "undecodable consistency request");
        ConsistencyError::MissingInput
    })?;

    let brief = Brief::try_from(inp).inspect_err(|_| warn!("consistency request missing input"))?;
    let out = check(&brief);

    info!(
        score = out.score,
        violations = out.violations.len(),
        rules = out.applied_rules.len(),
        "consistency checked"
    );
    Ok(Json(out))
}

/// Scorer then composer, folded into the wire response.
pub fn check(brief: &Brief) -> ConsistencyOut {
    let assessment = scoring::assess(brief);
    let composition = composer::compose(brief, &assessment.rules);

    ConsistencyOut {
        ok: true,
        image_prompt: composition.image_prompt,
        applied_rules: composition.applied_rules,
        violations: assessment.violations.iter().map(|v| v.message().to_string()).collect(),
        score: assessment.score,
        layout_spec: composition.layout_spec,
    }
}
