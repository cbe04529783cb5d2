//! HTTP handlers.

use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use driftcodec_batch::{BatchItem, BatchRequest, BatchResult};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

const BAD_BODY: &str = "Request body must contain an array of hex strings";
const NOT_A_STRING: &str = "hex entry must be a string";

/// One entry of the `/parse-hex` response array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ParseEntry {
    Item(BatchItem),
    /// Array element that was not a JSON string; echoed back as-is.
    Invalid {
        #[serde(rename = "hexString")]
        hex_string: Value,
        error: &'static str,
    },
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// `POST /parse-hex`: decode every entry of `{"hex": [...]}`.
pub async fn parse_hex(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "request body exceeds the limit of {} bytes",
                    state.config.body_limit()
                ),
            );
        }
        Err(_) => return error_response(StatusCode::BAD_REQUEST, BAD_BODY),
    };
    let Some(entries) = body.get("hex").and_then(Value::as_array) else {
        return error_response(StatusCode::BAD_REQUEST, BAD_BODY);
    };
    if entries.len() > state.config.max_batch {
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "batch of {} exceeds the limit of {} hex strings",
                entries.len(),
                state.config.max_batch
            ),
        );
    }

    let inputs: Vec<String> = entries
        .iter()
        .filter_map(|v| v.as_str().map(str::to_owned))
        .collect();

    let started = Instant::now();
    let worker = state.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        let req = BatchRequest::new(inputs).chunk_size(worker.config.chunk_size);
        worker.engine.decode(req)
    })
    .await;

    let result = match decoded {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            error!("batch decode failed: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
        Err(e) => {
            error!("batch decode task panicked: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "decode task failed");
        }
    };

    record_metrics(&state, &result, entries.len(), started);

    let mut items = result.items.into_iter();
    let response: Vec<ParseEntry> = entries
        .iter()
        .filter_map(|v| {
            if v.is_string() {
                items.next().map(ParseEntry::Item)
            } else {
                Some(ParseEntry::Invalid {
                    hex_string: v.clone(),
                    error: NOT_A_STRING,
                })
            }
        })
        .collect();

    Json(response).into_response()
}

fn record_metrics(state: &AppState, result: &BatchResult, total: usize, started: Instant) {
    let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
    let invalid = total - result.total_input;
    let errors = result.error_count() + invalid;

    state.metrics.record_batch(total as u64, elapsed_ms);
    state.metrics.record_decoded(result.decoded_count() as u64);
    state
        .metrics
        .record_errors(result.error_count() as u64, "truncated_input");
    state.metrics.record_errors(invalid as u64, "not_a_string");

    info!(
        total,
        decoded = result.decoded_count(),
        errors,
        elapsed_ms,
        "parse-hex batch complete"
    );
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
