use super::types::{ErrorResponse, HealthResponse, PredictQuery, PredictionMode};
use crate::{Error, Result, backend::Dispatcher, prompt, prompt::RenderMode, telemetry};
use axum::{
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

type ApiResult = std::result::Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;

// Extractor rejections are taken as values so they still reach the caller
// as `{"error": ...}` rather than the framework's plain-text body.

pub async fn predict(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult {
    let body = body.map_err(body_rejection).map_err(error_response)?;
    handle_prediction(&state, PredictionMode::completion(), &body).await
}

pub async fn predict_chat(
    State(state): State<AppState>,
    query: std::result::Result<Query<PredictQuery>, QueryRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult {
    let Query(query) = query
        .map_err(|rejection| Error::invalid_input("render_mode", rejection.body_text()))
        .map_err(error_response)?;
    let body = body.map_err(body_rejection).map_err(error_response)?;

    let render = match query.render_mode.as_deref() {
        Some(raw) => raw.parse::<RenderMode>().map_err(error_response)?,
        None => RenderMode::default(),
    };
    handle_prediction(&state, PredictionMode::chat(render), &body).await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Shared path for both prediction endpoints:
/// parse, normalize, render, dispatch, and map the outcome.
pub async fn handle_prediction(state: &AppState, mode: PredictionMode, body: &[u8]) -> ApiResult {
    let request_id = Uuid::new_v4();
    let span = info_span!(
        "prediction",
        request_id = %request_id,
        endpoint = mode.endpoint(),
        render_mode = %mode.render,
    );

    async move {
        info!("Received prediction request");

        match run_prediction(state, mode, body).await {
            Ok(output) => {
                info!("Prediction completed");
                Ok(Json(output))
            }
            Err(e) => {
                match &e {
                    Error::InvalidInput { .. } => warn!("Rejected prediction request: {}", e),
                    Error::Backend { status } => {
                        error!("Generate endpoint returned status {}", status)
                    }
                    _ => error!("Prediction failed: {}", e),
                }
                Err(error_response(e))
            }
        }
    }
    .instrument(span)
    .await
}

async fn run_prediction(state: &AppState, mode: PredictionMode, body: &[u8]) -> Result<Value> {
    let fields = parse_body(body)?;
    let input = telemetry::normalize(&fields)?;
    let prompt = prompt::render(&input, mode.render);
    debug!(prompt = %prompt, "Rendered prompt");

    state
        .dispatcher
        .dispatch(prompt, input.max_gen_len, input.temperature, mode.target)
        .await
}

/// An empty body counts as an empty object; anything else must be a JSON object.
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(Error::invalid_input("body", "expected a JSON object")),
        Err(e) => Err(Error::invalid_input("body", format!("malformed JSON: {}", e))),
    }
}

fn body_rejection(rejection: BytesRejection) -> Error {
    Error::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    }
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        err.status_code(),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
