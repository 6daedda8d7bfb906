//! Axum route handlers for the Trip Planner API.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::paginate;
use crate::export::pdf::{export_filename, itinerary_title, render_pdf};
use crate::itinerary::display::{build_cards, DayCard, SectionCard};
use crate::planner::pipeline::{run_trip_planner, TripRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub destination: String,
    pub days: u8,
    pub interests: String,
}

#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// The raw final itinerary text, echoed back for the export call.
    pub itinerary: String,
    pub days: Vec<DayCard>,
    pub sections: Vec<SectionCard>,
}

#[derive(Debug, Deserialize)]
pub struct ExportTripRequest {
    pub destination: String,
    /// The itinerary text returned by the plan endpoint.
    pub itinerary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/trips/plan
///
/// Full pipeline: validate → draft → enrich → optimize → parse into cards.
/// Validation failures surface before any completion call is made.
pub async fn handle_plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    let trip = TripRequest::new(&request.destination, request.days, &request.interests)?;

    let itinerary = run_trip_planner(state.llm.as_ref(), &trip).await?;
    let (days, sections) = build_cards(&itinerary);

    Ok(Json(PlanTripResponse {
        itinerary,
        days,
        sections,
    }))
}

/// POST /api/v1/trips/export
///
/// Paginates previously generated itinerary text and returns the PDF bytes
/// as a download attachment with a deterministic filename.
pub async fn handle_export_trip(
    State(state): State<AppState>,
    Json(request): Json<ExportTripRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.destination.trim().is_empty() {
        return Err(AppError::Validation(
            "destination cannot be empty".to_string(),
        ));
    }
    if request.itinerary.trim().is_empty() {
        return Err(AppError::Validation("itinerary cannot be empty".to_string()));
    }

    let title = itinerary_title(&request.destination);
    let document = paginate(&request.itinerary, &title, &state.geometry);
    let pdf = render_pdf(&document)?;
    let filename = export_filename(&request.destination);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    ))
}
