//! CO2 intensity extraction.

use serde_json::{Map, Value};

use super::fields::{format_decimal, lenient_number, present_text, truthy, truthy_text};
use crate::config::{FieldMapping, FOSSIL_DECIMALS, INTENSITY_DECIMALS, PERCENT_SUFFIX};
use crate::models::Co2IntensityInfo;

/// Builds carbon intensity details from `payload`.
///
/// Which payload is passed in depends on the field mapping and is decided by
/// the caller. `mapping` only affects where `checked_ip` is read from.
pub fn extract_co2_intensity(payload: &Map<String, Value>, mapping: FieldMapping) -> Co2IntensityInfo {
    let mut info = Co2IntensityInfo::default();

    if let Some(country) = truthy_text(payload, "country_name") {
        info.country_name = Some(country);
        info.country_iso2 = present_text(payload, "country_code_iso_2").map(|c| c.to_uppercase());
        info.country_iso3 = present_text(payload, "country_code_iso_3").map(|c| c.to_uppercase());
    }

    if let (Some(intensity_type), Some(intensity)) = (
        truthy_text(payload, "carbon_intensity_type"),
        truthy_text(payload, "carbon_intensity"),
    ) {
        info.intensity_type = Some(intensity_type);
        info.intensity_value = Some(format_decimal(
            lenient_number(&intensity),
            INTENSITY_DECIMALS,
        ));
    }

    if let Some(fossil) = truthy_text(payload, "generation_from_fossil") {
        info.fossil_fraction_percent = Some(format!(
            "{}{}",
            format_decimal(lenient_number(&fossil), FOSSIL_DECIMALS),
            PERCENT_SUFFIX
        ));
    }

    info.year = truthy_text(payload, "year");

    if truthy(payload, "checked_ip").is_some() {
        info.checked_ip = match mapping {
            // Gated on `checked_ip` but copied from `ip`
            FieldMapping::Legacy => truthy_text(payload, "ip"),
            FieldMapping::Corrected => truthy_text(payload, "checked_ip"),
        };
    }

    info
}
