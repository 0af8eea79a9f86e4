//! Query result model structs for fish survey data.
//!
//! Lake rows are returned as [`mnl_fisheries::lake::Lake`] directly; the
//! structs here cover the survey-side results. All derive `Serialize`
//! so the UI layer can hand them to the JS bridge as JSON.

use serde::Serialize;
use std::collections::BTreeMap;

/// One flattened catch record for a lake.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatchDetail {
    pub species_code: String,
    pub survey_date: Option<String>,
    pub gear_type: Option<String>,
    /// Catch per unit effort; `None` when the survey did not measure it
    pub cpue: Option<f64>,
    pub total_catch: Option<i64>,
}

/// Per-species catch summary for one lake.
///
/// `avg_cpue` is the arithmetic mean over records with a measured CPUE
/// only; records with a missing CPUE do not count as zero. It is `None`
/// when no record of the species has a measured CPUE.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatchSummary {
    pub species_code: String,
    /// Number of catch records for the species
    pub record_count: i64,
    pub avg_cpue: Option<f64>,
    /// Sum of total catch over records that report one
    pub total_catch: i64,
}

/// One length-distribution record for a lake.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LengthDetail {
    pub species_code: String,
    pub survey_date: Option<String>,
    /// Length bucket label → observed count
    pub length_distribution: BTreeMap<String, i64>,
}
