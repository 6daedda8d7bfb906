// Itinerary Formatting
// Implements: day-block extraction, bold-delimited section pooling, and
// display-card assembly for the plan response. Parsing is defensive by
// construction — malformed model output degrades to a single synthetic day
// block instead of failing.

pub mod display;
pub mod parser;
