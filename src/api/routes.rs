use axum::{
    routing::post,
    Router,
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::error::{Result, AppError};
use crate::api::models::{DocumentSource, SummarizeRequest, SummarizeResponse};
use crate::demo::DEMO_DOCUMENT;
use crate::pdf::{self, MAX_UPLOAD_BYTES};
use crate::prompt::build_prompt;
use crate::AppState;

pub const MISSING_SOURCE_MESSAGE: &str = "Either a PDF file or content must be provided.";
pub const EMPTY_TEXT_MESSAGE: &str = "Could not extract text from the provided PDF.";

/// Room for the non-file form fields on top of a maximum-size upload.
const FORM_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + FORM_OVERHEAD_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    req: SummarizeRequest,
) -> Response {
    let start_time = Instant::now();
    let result = process_summarize_request(&state, req).await;
    let elapsed = start_time.elapsed();

    match result {
        Ok(response_data) => {
            info!(?elapsed, "Summarize request completed");
            (StatusCode::OK, Json(response_data)).into_response()
        }
        Err(err) => {
            match &err {
                AppError::Validation(msg) => warn!(?elapsed, "Rejected request: {}", msg),
                AppError::InvalidRequest(errors) => warn!(?elapsed, ?errors, "Invalid request data"),
                AppError::Extraction(msg) => error!(?elapsed, "Extraction error: {}", msg),
                AppError::Generation(msg) => error!(?elapsed, "Generation error: {}", msg),
                AppError::Config(msg) => error!(?elapsed, "Config error: {}", msg),
            }
            err.into_response()
        }
    }
}

async fn process_summarize_request(
    state: &AppState,
    req: SummarizeRequest,
) -> Result<SummarizeResponse> {
    let SummarizeRequest {
        source,
        question,
        language,
    } = req;

    let text = match source {
        Some(DocumentSource::Demo) => {
            info!("Using demo document");
            DEMO_DOCUMENT.to_string()
        }
        Some(DocumentSource::Inline(content)) => {
            info!("Using provided content");
            content
        }
        Some(DocumentSource::Upload(file)) => {
            info!(filename = %file.filename, bytes = file.data.len(), "Processing uploaded file");
            if !pdf::looks_like_pdf(&file.data) {
                warn!(
                    filename = %file.filename,
                    content_type = ?file.content_type,
                    "Upload does not start with a PDF header"
                );
            }
            pdf::extract_text(file.data).await?
        }
        None => return Err(AppError::Validation(MISSING_SOURCE_MESSAGE.to_string())),
    };

    // Extraction failures return early above; this covers documents that
    // parse but carry no text layer.
    if text.is_empty() {
        return Err(AppError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
    }

    info!(
        chars = text.chars().count(),
        language = language.as_str(),
        "Calling chat model"
    );
    let prompt = build_prompt(&text, &question, language);

    let llm_start = Instant::now();
    let summary = state.model.complete(&prompt).await?;
    info!(elapsed = ?llm_start.elapsed(), "Chat model call succeeded");

    Ok(SummarizeResponse::new(summary, question))
}
