//! Report data model.
//!
//! Every field is optional because upstream payloads are loosely typed:
//! an absent field and a failed lookup both end up as `None`.

use serde::ser::{Serialize, Serializer};

/// A document supporting a host's green claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SupportingDocument {
    pub name: String,
    pub url: String,
}

/// Green hosting details for a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct GreenHostingInfo {
    /// URL the check was made for
    pub source_url: Option<String>,
    /// Name of the hosting provider
    pub hosting_provider: Option<String>,
    /// Website of the hosting provider
    pub hosting_provider_url: Option<String>,
    /// `None` until the API gives a definitive answer; `Some(false)` is a real answer
    pub is_green: Option<bool>,
    /// When the registry last updated this record
    pub last_modified: Option<String>,
    pub supporting_documents: Vec<SupportingDocument>,
}

/// Outcome of the green hosting check.
///
/// Serializes as the [`GreenHostingInfo`] object, or as the JSON literal
/// `false` when the API reports it has no data for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreenStatus {
    /// Hosting details, possibly all empty if the check was not answered
    Hosting(GreenHostingInfo),
    /// The API affirmatively reported no data for the host
    NotFound,
}

impl Default for GreenStatus {
    fn default() -> Self {
        GreenStatus::Hosting(GreenHostingInfo::default())
    }
}

impl GreenStatus {
    /// Hosting details, unless the host was reported as not found.
    pub fn info(&self) -> Option<&GreenHostingInfo> {
        match self {
            GreenStatus::Hosting(info) => Some(info),
            GreenStatus::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GreenStatus::NotFound)
    }
}

impl Serialize for GreenStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GreenStatus::Hosting(info) => info.serialize(serializer),
            GreenStatus::NotFound => serializer.serialize_bool(false),
        }
    }
}

/// Grid carbon intensity for the country a host is located in.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Co2IntensityInfo {
    pub country_name: Option<String>,
    /// ISO 3166-1 alpha-2 code, uppercase
    pub country_iso2: Option<String>,
    /// ISO 3166-1 alpha-3 code, uppercase
    pub country_iso3: Option<String>,
    /// gCO2e/kWh with exactly three fractional digits
    pub intensity_value: Option<String>,
    pub intensity_type: Option<String>,
    /// Share of fossil generation, two fractional digits followed by `" %"`
    pub fossil_fraction_percent: Option<String>,
    pub year: Option<String>,
    pub checked_ip: Option<String>,
}

/// Aggregated sustainability data for one host.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SustainabilityReport {
    pub green: GreenStatus,
    pub co2intensity: Co2IntensityInfo,
}
