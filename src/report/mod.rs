//! Report assembly from API payloads.
//!
//! Pure functions turning greencheck and CO2 intensity payloads into a
//! [`SustainabilityReport`](crate::models::SustainabilityReport). Fetching and
//! caching live in `GreenDataFetcher`.

mod co2;
mod fields;
mod green;

use serde_json::{Map, Value};

use crate::config::FieldMapping;
use crate::models::SustainabilityReport;

pub use co2::extract_co2_intensity;
pub use green::extract_green_status;

/// Merges both payloads into one report.
///
/// The CO2 section is only filled when `co2_intensity` is `Some`. With
/// [`FieldMapping::Legacy`] its fields are nevertheless read from the
/// greencheck payload, so it stays empty when that payload is missing.
pub fn assemble_report(
    green_check: Option<&Map<String, Value>>,
    co2_intensity: Option<&Map<String, Value>>,
    mapping: FieldMapping,
) -> SustainabilityReport {
    let mut report = SustainabilityReport::default();

    if let Some(payload) = green_check {
        report.green = extract_green_status(payload, mapping);
    }

    if let Some(co2_payload) = co2_intensity {
        let source = match mapping {
            FieldMapping::Legacy => green_check,
            FieldMapping::Corrected => Some(co2_payload),
        };
        if let Some(payload) = source {
            report.co2intensity = extract_co2_intensity(payload, mapping);
        }
    }

    report
}
