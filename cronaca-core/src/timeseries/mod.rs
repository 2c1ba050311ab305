//! Daily series utilities used by the analysis pipeline.
//!
//! - `aggregate`: bucket scored articles into per-day mean sentiment
//! - `align`: inner-join daily sentiment with daily closes on the calendar date
/// Per-day sentiment aggregation.
pub mod aggregate;
/// Date alignment of sentiment and price series.
pub mod align;
