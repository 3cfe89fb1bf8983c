//! JSON request/response glue for transport layers.
//!
//! A network front end hands the raw request body to [`handle_request`] and
//! writes the returned body back; HTTP framing and status codes stay on the
//! transport side (an `error` response maps to a 4xx status, a `result`
//! response to 200). The evaluation core below this layer does no logging
//! and no I/O.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{evaluate, EvalError};

/// The decoded body of an evaluation request.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalRequest {
    pub expression: String,
    #[serde(default)]
    pub variables: HashMap<String, f64>,
}

/// The body of an evaluation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EvalResponse {
    Result { result: f64 },
    Error { error: String },
}

impl EvalResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, EvalResponse::Error { .. })
    }
}

impl From<Result<f64, EvalError>> for EvalResponse {
    fn from(outcome: Result<f64, EvalError>) -> Self {
        match outcome {
            Ok(result) => EvalResponse::Result { result },
            Err(err) => EvalResponse::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Decodes a JSON request body, evaluates it, and returns the JSON response
/// body. A malformed body becomes an error response, never a panic.
pub fn handle_request(body: &str) -> String {
    let response = match serde_json::from_str::<EvalRequest>(body) {
        Ok(request) => {
            debug!("evaluating {:?}", request.expression);
            EvalResponse::from(evaluate(&request.expression, &request.variables))
        }
        Err(err) => {
            debug!("rejecting request body: {err}");
            EvalResponse::Error {
                error: format!("invalid request body: {err}"),
            }
        }
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"error":"response serialization failed"}"#.to_string())
}
