use crate::config::Config;
use crate::inference::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
    pub config: Config,
}
