//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::skills::extractor::ExtractionResult;
use crate::skills::taxonomy::{entries, TaxonomyEntry};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// POST /api/v1/skills/extract
///
/// Extracts skills from free text with the configured backend.
/// Blank text is not an error: it yields no skills and zero confidence.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractionResult>, AppError> {
    let max_chars = state.config.max_text_chars;
    if request.text.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "text cannot exceed {max_chars} characters"
        )));
    }

    if request.text.trim().is_empty() {
        return Ok(Json(ExtractionResult::default()));
    }

    let result = state.extractor.extract(&request.text).await?;

    info!(
        "Extracted {} skills via {} (confidence {:.2})",
        result.skills.len(),
        state.extractor.backend_name(),
        result.confidence
    );

    Ok(Json(result))
}

/// GET /api/v1/skills/taxonomy
///
/// Returns every recognised skill with its keywords and category, in table order.
pub async fn handle_taxonomy() -> Json<&'static [TaxonomyEntry]> {
    Json(entries())
}
