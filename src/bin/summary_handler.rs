//! AWS Lambda handler for the dashboard progress summary
//!
//! Accepts the user's records (already authenticated and scoped by the
//! surrounding application) as JSON and returns the assembled
//! ProgressSummary. Supports Lambda Function URLs for direct HTTP access.

use drivegoal_engine::{EngineTerms, ProgressSummary, SummaryAssembler, SummaryInput};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Deserialize;

/// Request payload: the summary input plus optional term overrides
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Records and simulation request for one user
    #[serde(flatten)]
    pub input: SummaryInput,

    /// Optional override of guideline terms (APR tiers, lease structure,
    /// thresholds); defaults match the documented guidelines
    #[serde(default)]
    pub terms: Option<EngineTerms>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ProgressSummary) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => return Ok(error_response(400, "Missing request body")),
    };

    let request: SummaryRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let assembler = match request.terms {
        Some(terms) => SummaryAssembler::with_terms(terms),
        None => SummaryAssembler::new(),
    };

    log::info!(
        "assembling summary: {} transactions, {} budgets",
        request.input.transactions.len(),
        request.input.budgets.len()
    );

    let summary = assembler.assemble(&request.input);
    Ok(json_response(&summary))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
