//! Sequential batch matching — one awaited model call per resume.
//!
//! Batching policy lives entirely here; the inference client only knows
//! about single (JD, resume) pairs and carries no state between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::inference::{InferenceClient, InferenceError, ModelResponse};

/// One resume, already decoded to plain text by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeInput {
    pub id: String,
    pub text: String,
}

/// Scoring result for one resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeMatch {
    pub id: String,
    pub result: ModelResponse,
}

/// Scores every resume against the JD, one at a time, in input order.
///
/// `HttpError`/`FormatError` are per-resume results and the loop continues;
/// a transport failure (no HTTP status at all) aborts the whole batch.
pub async fn match_resumes(
    client: &InferenceClient,
    jd_text: &str,
    resumes: impl IntoIterator<Item = ResumeInput>,
) -> Result<Vec<ResumeMatch>, InferenceError> {
    let mut matches = Vec::new();
    for resume in resumes {
        info!("matching resume '{}'", resume.id);
        let result = client.score(jd_text, &resume.text).await?;
        debug!("resume '{}' result: {}", resume.id, result.text());
        matches.push(ResumeMatch {
            id: resume.id,
            result,
        });
    }
    Ok(matches)
}
