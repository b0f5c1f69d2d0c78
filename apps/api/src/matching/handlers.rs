//! Axum route handlers for the Matching API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::ModelResponse;
use crate::matching::batch::{match_resumes, ResumeInput, ResumeMatch};
use crate::matching::decode::decode_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub jd_text: String,
    pub resumes: Vec<ResumeInput>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<ResumeMatch>,
}

#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct FollowupResponse {
    pub result: ModelResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores each resume against the JD, strictly in order. Empty texts are
/// forwarded to the model untouched — garbage in, garbage out, by contract.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let matches = match_resumes(&state.inference, &request.jd_text, request.resumes).await?;
    Ok(Json(MatchResponse { matches }))
}

/// POST /api/v1/match/upload
///
/// Multipart variant: one `jd` part plus any number of `resume` parts.
/// Part bytes are decoded permissively; the part filename becomes the
/// resume id, falling back to its position in the upload.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut resumes: Vec<ResumeInput> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read part '{name}': {e}")))?;
        let text = decode_text(&bytes);

        match name.as_str() {
            "jd" => jd_text = Some(text),
            "resume" => {
                let id = file_name.unwrap_or_else(|| format!("resume-{}", resumes.len() + 1));
                resumes.push(ResumeInput { id, text });
            }
            _ => {} // unknown parts are ignored
        }
    }

    // a missing part is a malformed request; an empty jd file is not
    let jd_text = jd_text.ok_or_else(|| AppError::Validation("Missing 'jd' part".to_string()))?;

    let matches = match_resumes(&state.inference, &jd_text, resumes).await?;
    Ok(Json(MatchResponse { matches }))
}

/// POST /api/v1/followup
///
/// On-demand second-stage call for one candidate: chat message, email,
/// and screening questions.
pub async fn handle_followup(
    State(state): State<AppState>,
    Json(request): Json<FollowupRequest>,
) -> Result<Json<FollowupResponse>, AppError> {
    let result = state
        .inference
        .followup(&request.jd_text, &request.resume_text)
        .await?;
    Ok(Json(FollowupResponse { result }))
}
