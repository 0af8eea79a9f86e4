//! Fish survey bulk tables: catch records and length distributions.
//!
//! Both bulk files are JSON objects keyed `lake id → species code →
//! [records]`, produced offline from the DNR survey exports. Any field of
//! a record can be missing: a survey with no measured CPUE stores `null`
//! (the upstream pipeline also nulls out infinite CPUE values), and such
//! records are excluded from averages rather than counted as zero.

use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Date formats seen in the survey exports, tried in order.
const SURVEY_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

/// One gear deployment's catch of one species in one survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchRecord {
    /// Survey date as exported; may be absent or unparseable
    pub survey_date: Option<String>,
    /// Catch per unit effort; `None` when not measured
    pub cpue: Option<f64>,
    pub total_catch: Option<i64>,
    /// Sampling gear, e.g. "Standard gill nets"
    pub gear_type: Option<String>,
}

/// Length distribution of one species in one survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthRecord {
    pub survey_date: Option<String>,
    /// Length bucket label (e.g. "6-8") → observed count
    pub length_distribution: BTreeMap<String, i64>,
}

/// Bulk catch table: lake id → species code → records.
pub type CatchTable = HashMap<String, HashMap<String, Vec<CatchRecord>>>;

/// Bulk length table: lake id → species code → records.
pub type LengthTable = HashMap<String, HashMap<String, Vec<LengthRecord>>>;

/// Parses the bulk fish-catch JSON file.
pub fn parse_catch_json(json: &str) -> Result<CatchTable> {
    let table: CatchTable = serde_json::from_str(json)?;
    Ok(table)
}

/// Parses the bulk fish-length JSON file.
pub fn parse_length_json(json: &str) -> Result<LengthTable> {
    let table: LengthTable = serde_json::from_str(json)?;
    Ok(table)
}

/// Parses a survey date in any of the formats the exports use.
pub fn parse_survey_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    SURVEY_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Survey year for grouping/sorting; `None` when the date is unusable.
pub fn survey_year(raw: &str) -> Option<i32> {
    use chrono::Datelike;
    parse_survey_date(raw).map(|d| d.year())
}
