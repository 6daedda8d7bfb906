// Itinerary Generation Engine
// Implements: trip request validation, the draft → enrich → optimize
// refinement pipeline, and the HTTP handlers for planning and export.
// All LLM calls go through llm_client — no direct backend calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
