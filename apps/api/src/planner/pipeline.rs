//! Itinerary Generation — the three-stage refinement pipeline.
//!
//! Flow: draft → enrich → optimize. Each stage is one completion call; stage
//! N+1 consumes the full text output of stage N, so the stages are strictly
//! sequential. Any stage failure aborts the whole pipeline — no partial
//! itinerary, no automatic retry, no caching of intermediate outputs.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::itinerary::parser::split_into_days;
use crate::llm_client::TextCompletion;
use crate::planner::prompts::{
    DRAFT_PROMPT_TEMPLATE, ENRICH_PROMPT_TEMPLATE, OPTIMIZE_PROMPT_TEMPLATE,
};

pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One sequential refinement step. The order is fixed: Draft, Enriched,
/// Optimized. No stage has state beyond its input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementStage {
    Draft,
    Enriched,
    Optimized,
}

impl RefinementStage {
    pub fn name(self) -> &'static str {
        match self {
            RefinementStage::Draft => "draft",
            RefinementStage::Enriched => "enrich",
            RefinementStage::Optimized => "optimize",
        }
    }
}

/// A validated trip request. Immutable after construction — the accessors are
/// the only way at the fields.
#[derive(Debug, Clone)]
pub struct TripRequest {
    destination: String,
    days: u8,
    interests: String,
}

impl TripRequest {
    /// Validates caller input. The HTTP layer is expected to pre-validate,
    /// but the core defensively rejects empty fields and out-of-range days.
    pub fn new(destination: &str, days: u8, interests: &str) -> Result<Self, AppError> {
        let destination = destination.trim();
        let interests = interests.trim();

        if destination.is_empty() {
            return Err(AppError::Validation(
                "destination cannot be empty".to_string(),
            ));
        }
        if interests.is_empty() {
            return Err(AppError::Validation("interests cannot be empty".to_string()));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(AppError::Validation(format!(
                "days must be between {MIN_DAYS} and {MAX_DAYS}"
            )));
        }

        Ok(Self {
            destination: destination.to_string(),
            days,
            interests: interests.to_string(),
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full refinement pipeline and returns the final itinerary text.
///
/// Steps:
/// 1. Draft: creative thematic outline — no times, no specific locations
/// 2. Enrich: real place names + Morning/Lunch/Afternoon/Evening time blocks
/// 3. Optimize: conflict-free pacing, balanced experiences, closing tips
pub async fn run_trip_planner(
    llm: &dyn TextCompletion,
    request: &TripRequest,
) -> Result<String, AppError> {
    info!(
        "Planning {}-day trip to {} (interests: {})",
        request.days(),
        request.destination(),
        request.interests()
    );

    let draft = run_stage(llm, RefinementStage::Draft, build_draft_prompt(request)).await?;
    let enriched = run_stage(
        llm,
        RefinementStage::Enriched,
        build_enrich_prompt(&draft, request),
    )
    .await?;
    let optimized = run_stage(
        llm,
        RefinementStage::Optimized,
        build_optimize_prompt(&enriched, request),
    )
    .await?;

    // Day count is not enforced against the request — the model's output is
    // accepted as-is, with a mismatch logged for observability.
    let extracted = split_into_days(&optimized).len();
    if extracted != request.days() as usize {
        warn!(
            requested = request.days(),
            extracted,
            "final itinerary day count differs from the request; keeping the model's output"
        );
    }

    Ok(optimized)
}

/// Runs one stage: builds nothing, just sends the prompt and checks the
/// output is usable. Empty or whitespace-only text counts as a failure.
async fn run_stage(
    llm: &dyn TextCompletion,
    stage: RefinementStage,
    prompt: String,
) -> Result<String, AppError> {
    info!("Running {} stage", stage.name());

    let output = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Generation(format!("{} stage failed: {e}", stage.name())))?;

    if output.trim().is_empty() {
        return Err(AppError::Generation(format!(
            "{} stage returned empty text",
            stage.name()
        )));
    }

    info!(
        "{} stage produced {} lines",
        stage.name(),
        output.lines().count()
    );

    Ok(output)
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn build_draft_prompt(request: &TripRequest) -> String {
    DRAFT_PROMPT_TEMPLATE
        .replace("{days}", &request.days().to_string())
        .replace("{destination}", request.destination())
        .replace("{interests}", request.interests())
}

pub(crate) fn build_enrich_prompt(draft: &str, request: &TripRequest) -> String {
    ENRICH_PROMPT_TEMPLATE
        .replace("{destination}", request.destination())
        .replace("{draft}", draft)
}

pub(crate) fn build_optimize_prompt(enriched: &str, request: &TripRequest) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{days}", &request.days().to_string())
        .replace("{destination}", request.destination())
        .replace("{itinerary}", enriched)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
