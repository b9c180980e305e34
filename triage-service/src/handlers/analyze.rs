//! Relay handlers.
//!
//! Each handler validates its body, makes exactly one upstream call,
//! classifies the reply and attaches a map link. Nothing is kept between
//! calls; the symptom endpoint sees only the current message.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::{Validate, ValidationError};

use crate::models::{Domain, FacilityType, Severity};
use crate::services::prompts::{SKIN_SYSTEM_PROMPT, SKIN_USER_INSTRUCTION, SYMPTOM_SYSTEM_PROMPT};
use crate::services::providers::{ChatMessage, ChatProvider};
use crate::services::{build_map_url_with_base, classify};
use crate::AppState;

/// Message returned for any upstream failure. Details stay in the logs.
pub const ANALYSIS_FAILED: &str = "AI analysis failed";

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct SkinAnalysisRequest {
    /// Image as a `data:` URI.
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "image is required"))]
    pub image: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "address is required"))]
    pub address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysisResponse {
    /// First line of the model reply.
    pub condition: String,
    pub severity: Severity,
    /// Full model reply.
    pub recommendation: String,
    pub facility_type: FacilityType,
    pub map_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SymptomAnalysisRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "symptoms are required"))]
    pub symptoms: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "address is required"))]
    pub address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisResponse {
    pub analysis: String,
    pub facility_type: FacilityType,
    pub map_url: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /analyze-skin`
pub async fn analyze_skin(
    State(state): State<AppState>,
    payload: Result<Json<SkinAnalysisRequest>, JsonRejection>,
) -> Result<Json<SkinAnalysisResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!(image_len = request.image.len(), "Analyzing skin condition image");

    let messages = [
        ChatMessage::system(SKIN_SYSTEM_PROMPT),
        ChatMessage::user_with_image(SKIN_USER_INSTRUCTION, request.image),
    ];
    let analysis = request_analysis(state.provider.as_ref(), &messages, "analyze-skin").await?;

    let classification = classify(&analysis, Domain::Skin);
    let severity = classification.severity.unwrap_or(Severity::Mild);
    let map_url = build_map_url_with_base(
        &state.maps.base_url,
        classification.facility.as_str(),
        &request.address,
    );

    tracing::info!(
        severity = %severity,
        facility = %classification.facility,
        "Skin analysis classified"
    );

    Ok(Json(SkinAnalysisResponse {
        condition: first_line(&analysis).to_string(),
        severity,
        recommendation: analysis,
        facility_type: classification.facility,
        map_url,
    }))
}

/// `POST /analyze-symptoms`
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<SymptomAnalysisRequest>, JsonRejection>,
) -> Result<Json<SymptomAnalysisResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!(symptoms_len = request.symptoms.len(), "Analyzing symptoms");
    tracing::debug!(symptoms = %request.symptoms, "Symptom text");

    let messages = [
        ChatMessage::system(SYMPTOM_SYSTEM_PROMPT),
        ChatMessage::user(request.symptoms),
    ];
    let analysis =
        request_analysis(state.provider.as_ref(), &messages, "analyze-symptoms").await?;

    let classification = classify(&analysis, Domain::Symptom);
    let map_url = build_map_url_with_base(
        &state.maps.base_url,
        classification.facility.as_str(),
        &request.address,
    );

    tracing::info!(facility = %classification.facility, "Symptom analysis classified");

    Ok(Json(SymptomAnalysisResponse {
        analysis,
        facility_type: classification.facility,
        map_url,
    }))
}

// ============================================================================
// Helpers
// ============================================================================

async fn request_analysis(
    provider: &dyn ChatProvider,
    messages: &[ChatMessage],
    endpoint: &'static str,
) -> Result<String, AppError> {
    match provider.complete(messages).await {
        Ok(analysis) => {
            tracing::debug!(endpoint, analysis = %analysis, "AI analysis");
            Ok(analysis)
        }
        Err(e) => {
            tracing::error!(endpoint, model = provider.model(), error = %e, "Upstream analysis failed");
            Err(AppError::BadGateway(ANALYSIS_FAILED.to_string()))
        }
    }
}

/// Text up to the first `\n`; the whole text when there is none.
fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_stops_at_newline() {
        assert_eq!(first_line("Eczema\nSee a dermatologist."), "Eczema");
        assert_eq!(first_line("single line"), "single line");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn blank_fields_fail_validation() {
        let request = SymptomAnalysisRequest {
            symptoms: "   ".to_string(),
            address: "1 Elm St".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("symptoms"));
        assert!(!errors.field_errors().contains_key("address"));
    }

    #[test]
    fn missing_fields_default_to_empty_and_fail_validation() {
        let request: SkinAnalysisRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("image"));
        assert!(fields.contains_key("address"));
    }

    #[test]
    fn skin_response_uses_camel_case_keys() {
        let response = SkinAnalysisResponse {
            condition: "Rash".to_string(),
            severity: Severity::Mild,
            recommendation: "Rash".to_string(),
            facility_type: FacilityType::Dermatologist,
            map_url: "u".to_string(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["facilityType"], "Dermatologist");
        assert_eq!(value["mapUrl"], "u");
        assert_eq!(value["severity"], "mild");
    }
}
