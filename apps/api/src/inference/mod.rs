//! Inference Client — the single point of entry for all hosted-model calls.
//!
//! ARCHITECTURAL RULE: no other module may hit the Hugging Face Inference
//! API directly. All matching and message generation is delegated to the
//! remote model through this client; the rest of the service only formats
//! prompts and moves strings around.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use prompts::{FOLLOWUP_PROMPT_TEMPLATE, SCORE_PROMPT_TEMPLATE};

/// Default Inference API base; the model id is appended as a path segment.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";
/// Default hosted model used for both scoring and follow-up generation.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

const MAX_NEW_TOKENS: u32 = 600;
const TEMPERATURE: f32 = 0.7;

/// Fixed diagnostic returned when a success response has an unexpected shape.
pub const FORMAT_ERROR_DIAGNOSTIC: &str = "Response format error.";

/// Which of the two prompt templates a request renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Score,
    Followup,
}

/// A fully specified model request, immutable once built.
/// Input texts are embedded verbatim — empty strings included. The model
/// sees exactly what the caller supplied, with no validation in between.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub task_kind: TaskKind,
    pub job_description: String,
    pub resume: String,
}

impl PromptRequest {
    /// Renders the full prompt text sent as the model input.
    pub fn render(&self) -> String {
        let template = match self.task_kind {
            TaskKind::Score => SCORE_PROMPT_TEMPLATE,
            TaskKind::Followup => FOLLOWUP_PROMPT_TEMPLATE,
        };
        template
            .replace("{jd_text}", &self.job_description)
            .replace("{resume_text}", &self.resume)
    }
}

/// Normalized model result. Callers branch on the variant instead of
/// pattern-matching diagnostic text out of a single string channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ModelResponse {
    /// Success status and the expected body shape; `text` is the raw
    /// generated text, unparsed — any percentage or name lives inside it.
    Ok { text: String },
    /// Success status but the body was not a sequence whose first element
    /// carries `generated_text`.
    FormatError,
    /// Non-success status. The body is kept raw; no status code is
    /// interpreted and nothing is retried.
    HttpError { status: u16, body: String },
}

impl ModelResponse {
    /// Collapses the tagged result into the single display string the
    /// original tool exposed for all three outcomes.
    pub fn text(&self) -> String {
        match self {
            ModelResponse::Ok { text } => text.clone(),
            ModelResponse::FormatError => FORMAT_ERROR_DIAGNOSTIC.to_string(),
            ModelResponse::HttpError { status, body } => {
                format!("Hugging Face API error {status}: {body}")
            }
        }
    }
}

/// Transport-level failure: the request never produced an HTTP status
/// (connection refused, DNS, client timeout). Distinct from
/// `ModelResponse::HttpError`, which is a status the endpoint did return.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    generated_text: String,
}

/// Stateless client for the hosted text-generation endpoint. Owns nothing
/// across calls beyond the connection pool; two identical calls issue two
/// independent requests.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl InferenceClient {
    /// Credential, model id, and endpoint base are injected here rather
    /// than read from process-global state, so tests can point the client
    /// at a local stub.
    pub fn new(api_key: String, model: &str, api_base: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: format!("{}/{}", api_base.trim_end_matches('/'), model),
            api_key,
        }
    }

    /// First-stage call: candidate name, percentage score, reasons, and a
    /// sub-70% warning — all as free text the client never parses.
    pub async fn score(
        &self,
        jd_text: &str,
        resume_text: &str,
    ) -> Result<ModelResponse, InferenceError> {
        self.send(&PromptRequest {
            task_kind: TaskKind::Score,
            job_description: jd_text.to_string(),
            resume: resume_text.to_string(),
        })
        .await
    }

    /// Second-stage call: casual chat message, formal email, and 3–5
    /// screening questions for one candidate.
    pub async fn followup(
        &self,
        jd_text: &str,
        resume_text: &str,
    ) -> Result<ModelResponse, InferenceError> {
        self.send(&PromptRequest {
            task_kind: TaskKind::Followup,
            job_description: jd_text.to_string(),
            resume: resume_text.to_string(),
        })
        .await
    }

    pub async fn send(&self, request: &PromptRequest) -> Result<ModelResponse, InferenceError> {
        self.call(&request.render()).await
    }

    /// Shared transport: exactly one POST per call. No retry, no caching,
    /// no interpretation of specific status codes.
    async fn call(&self, prompt: &str) -> Result<ModelResponse, InferenceError> {
        let request_body = HfRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("model endpoint returned {status}");
            return Ok(ModelResponse::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<Vec<HfGeneration>>(&body) {
            Ok(generations) => match generations.into_iter().next() {
                Some(first) => {
                    debug!(
                        "model call succeeded: {} generated chars",
                        first.generated_text.len()
                    );
                    Ok(ModelResponse::Ok {
                        text: first.generated_text,
                    })
                }
                None => {
                    warn!("model returned an empty generation sequence");
                    Ok(ModelResponse::FormatError)
                }
            },
            Err(e) => {
                warn!("model response did not match the expected shape: {e}");
                Ok(ModelResponse::FormatError)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A local stand-in for the hosted model endpoint: records every
    //! request it sees and replies with a canned status/body.

    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};

    use super::InferenceClient;

    /// One request observed by the stub endpoint.
    #[derive(Debug, Clone)]
    pub struct SeenRequest {
        pub authorization: Option<String>,
        pub payload: serde_json::Value,
    }

    #[derive(Clone)]
    pub struct ModelStub {
        pub seen: Arc<Mutex<Vec<SeenRequest>>>,
        status: u16,
        body: String,
    }

    impl ModelStub {
        /// Binds to an ephemeral port; returns the stub handle and the API
        /// base URL to hand to `InferenceClient::new`.
        pub async fn spawn(status: u16, body: &str) -> (Self, String) {
            let stub = ModelStub {
                seen: Arc::new(Mutex::new(Vec::new())),
                status,
                body: body.to_string(),
            };
            let app = Router::new()
                .route("/models/:model", post(Self::handle))
                .with_state(stub.clone());

            let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            (stub, format!("http://{addr}/models"))
        }

        async fn handle(
            State(stub): State<ModelStub>,
            Path(_model): Path<String>,
            headers: HeaderMap,
            Json(payload): Json<serde_json::Value>,
        ) -> (StatusCode, String) {
            let authorization = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            stub.seen.lock().unwrap().push(SeenRequest {
                authorization,
                payload,
            });
            (
                StatusCode::from_u16(stub.status).unwrap(),
                stub.body.clone(),
            )
        }

        /// The `inputs` field of every recorded request, in arrival order.
        pub fn inputs(&self) -> Vec<String> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.payload["inputs"].as_str().unwrap_or_default().to_string())
                .collect()
        }
    }

    pub fn stub_client(api_base: &str) -> InferenceClient {
        InferenceClient::new(
            "test-key".to_string(),
            "stub-model",
            api_base,
            std::time::Duration::from_secs(5),
        )
    }
}
