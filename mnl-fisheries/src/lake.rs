//! Lake metadata parsing from the DNR lake-list CSV export.
//!
//! The export is produced offline from the DNR spreadsheets and carries a
//! few artifacts this parser has to tolerate: ID cells wrapped in an Excel
//! formula guard (`="…"`), embedded thousands separators, and numeric
//! columns holding `null` / `N/A` / empty sentinels instead of values.
//! A row is only rejected when it lacks an identifier or a name; every
//! other defect degrades to an absent field.

use crate::error::{LakeDataError, Result};
use csv::ReaderBuilder;
use log::warn;
use serde::{Deserialize, Serialize};

/// Column order of the lake-list CSV export.
///
/// `FISHERIES_WATERBODY_ID, LAKE_NAME, ALT_LAKE_NAME, DOW_NBR_PRIMARY,
/// COUNTY_NAME, LAKE_AREA_DOW_ACRES, LITTORAL_AREA_ACRES, MAX_DEPTH_FEET,
/// MEAN_DEPTH_FEET, SHORE_LENGTH_MILES, LAKE_CENTER_LAT_DD5,
/// LAKE_CENTER_LONG_DD5, SENTINEL_ID, BORDER_ID`
const COL_LAKE_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_ALT_NAME: usize = 2;
const COL_DOW: usize = 3;
const COL_COUNTY: usize = 4;
const COL_AREA: usize = 5;
const COL_LITTORAL: usize = 6;
const COL_MAX_DEPTH: usize = 7;
const COL_MEAN_DEPTH: usize = 8;
const COL_SHORE_LEN: usize = 9;
const COL_LAT: usize = 10;
const COL_LONG: usize = 11;
const COL_SENTINEL: usize = 12;
const COL_BORDER: usize = 13;

/// DOW numbers are 8 digits, padded with trailing zeros.
const DOW_DIGITS: usize = 8;

/// DNR lake designation, used for marker styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LakeCategory {
    /// Ordinary managed lake
    Regular,
    /// Long-term monitoring (sentinel) lake
    Sentinel,
    /// Shared border water (e.g. Minnesota/Ontario)
    BorderWater,
}

impl LakeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LakeCategory::Regular => "regular",
            LakeCategory::Sentinel => "sentinel",
            LakeCategory::BorderWater => "border_water",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); unknown labels fall back to regular.
    pub fn from_label(label: &str) -> Self {
        match label {
            "sentinel" => LakeCategory::Sentinel,
            "border_water" => LakeCategory::BorderWater,
            _ => LakeCategory::Regular,
        }
    }
}

/// A Minnesota lake with its DNR metadata.
///
/// `lake_id` is the FISHERIES_WATERBODY_ID and is the one canonical
/// identifier; the DOW number is carried for display only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Lake {
    pub lake_id: String,
    pub name: String,
    pub alternate_name: Option<String>,
    pub dow_number: Option<String>,
    pub county: String,
    /// Surface area in acres
    pub area_acres: Option<f64>,
    /// Littoral (shallow) area in acres
    pub littoral_area_acres: Option<f64>,
    pub max_depth_ft: Option<f64>,
    pub mean_depth_ft: Option<f64>,
    pub shore_length_mi: Option<f64>,
    /// Lake-center latitude, decimal degrees
    pub latitude: Option<f64>,
    /// Lake-center longitude, decimal degrees (negative = west)
    pub longitude: Option<f64>,
    pub category: LakeCategory,
}

impl Lake {
    /// Whether this lake can be placed on the map.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Parses the lake-list CSV export into `Lake` values.
    ///
    /// Rows without an identifier or name are skipped with a warning;
    /// malformed optional fields become `None`.
    pub fn parse_lake_csv(csv_object: &str) -> Result<Vec<Lake>> {
        let mut lakes: Vec<Lake> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?;
        if !headers.iter().any(|h| h.trim() == "FISHERIES_WATERBODY_ID") {
            return Err(LakeDataError::InvalidFormat(
                "missing FISHERIES_WATERBODY_ID column".to_string(),
            ));
        }

        for row in rdr.records() {
            let rho = row?;

            let lake_id = match clean_id(rho.get(COL_LAKE_ID).unwrap_or("")) {
                Some(id) => id,
                None => {
                    warn!("skipping lake row without an identifier");
                    continue;
                }
            };
            let name = rho.get(COL_NAME).unwrap_or("").trim();
            if name.is_empty() {
                warn!("skipping lake {lake_id}: no name");
                continue;
            }

            let category = if non_empty(rho.get(COL_SENTINEL)).is_some() {
                LakeCategory::Sentinel
            } else if non_empty(rho.get(COL_BORDER)).is_some() {
                LakeCategory::BorderWater
            } else {
                LakeCategory::Regular
            };

            lakes.push(Lake {
                lake_id,
                name: name.to_string(),
                alternate_name: non_empty(rho.get(COL_ALT_NAME)),
                dow_number: rho.get(COL_DOW).and_then(normalize_dow),
                county: rho.get(COL_COUNTY).unwrap_or("").trim().to_string(),
                area_acres: parse_opt_f64(rho.get(COL_AREA).unwrap_or("")),
                littoral_area_acres: parse_opt_f64(rho.get(COL_LITTORAL).unwrap_or("")),
                max_depth_ft: parse_opt_f64(rho.get(COL_MAX_DEPTH).unwrap_or("")),
                mean_depth_ft: parse_opt_f64(rho.get(COL_MEAN_DEPTH).unwrap_or("")),
                shore_length_mi: parse_opt_f64(rho.get(COL_SHORE_LEN).unwrap_or("")),
                latitude: parse_opt_f64(rho.get(COL_LAT).unwrap_or("")),
                longitude: parse_opt_f64(rho.get(COL_LONG).unwrap_or("")),
                category,
            });
        }
        Ok(lakes)
    }
}

/// Strips the Excel formula guard (`="…"`) and embedded commas from an ID
/// cell. Returns `None` when nothing usable remains.
pub fn clean_id(raw: &str) -> Option<String> {
    let mut s = raw.trim();
    if s.starts_with("=\"") && s.ends_with('"') && s.len() > 3 {
        s = &s[2..s.len() - 1];
    }
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Normalizes a DOW number to the 8-digit trailing-zero-padded form.
///
/// Spreadsheet round-trips can turn an integer DOW into `11030500.0`;
/// the float suffix is stripped before padding.
pub fn normalize_dow(raw: &str) -> Option<String> {
    let mut s = clean_id(raw)?;
    if let Some(stripped) = s.strip_suffix(".0") {
        s = stripped.to_string();
    }
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if s.len() < DOW_DIGITS {
        s.extend(std::iter::repeat('0').take(DOW_DIGITS - s.len()));
    } else {
        s.truncate(DOW_DIGITS);
    }
    Some(s)
}

/// Parses an optional numeric cell; `null`, `n/a`, `na` and the empty
/// string are absent values, as is anything unparseable.
pub fn parse_opt_f64(ess: &str) -> Option<f64> {
    let ess_lowered = ess.trim().to_lowercase();
    match ess_lowered.as_str() {
        "" | "null" | "n/a" | "na" => None,
        s => s.parse::<f64>().ok(),
    }
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    let trimmed = cell.unwrap_or("").trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
FISHERIES_WATERBODY_ID,LAKE_NAME,ALT_LAKE_NAME,DOW_NBR_PRIMARY,COUNTY_NAME,LAKE_AREA_DOW_ACRES,LITTORAL_AREA_ACRES,MAX_DEPTH_FEET,MEAN_DEPTH_FEET,SHORE_LENGTH_MILES,LAKE_CENTER_LAT_DD5,LAKE_CENTER_LONG_DD5,SENTINEL_ID,BORDER_ID
2379,Gull Lake,,11030500,Cass,9947.07,3594.0,80.0,30.0,38.9,46.40827,-94.35608,,
\"=\"\"2,380\"\"\",Rush Lake,Upper Rush,18018100,Chisago,1338.0,N/A,79.0,,10.2,45.52623,-92.96551,7,
4000,Mille Lacs Lake,,48000200,Mille Lacs,128226.0,54000.0,42.0,20.5,76.3,46.25,-93.65,,3
,No Id Lake,,,Cass,10.0,,,,,,,,
";

    #[test]
    fn test_parse_lake_csv() {
        let lakes = Lake::parse_lake_csv(SAMPLE_CSV).expect("sample CSV should parse");
        assert_eq!(lakes.len(), 3, "the row without an identifier is skipped");

        let gull = &lakes[0];
        assert_eq!(gull.lake_id, "2379");
        assert_eq!(gull.name, "Gull Lake");
        assert_eq!(gull.county, "Cass");
        assert_eq!(gull.dow_number.as_deref(), Some("11030500"));
        assert_eq!(gull.area_acres, Some(9947.07));
        assert_eq!(gull.category, LakeCategory::Regular);
        assert!(gull.has_coordinates());
    }

    #[test]
    fn test_excel_guard_and_sentinel_flag() {
        let lakes = Lake::parse_lake_csv(SAMPLE_CSV).unwrap();
        let rush = &lakes[1];
        assert_eq!(rush.lake_id, "2380", "Excel guard and comma stripped");
        assert_eq!(rush.alternate_name.as_deref(), Some("Upper Rush"));
        assert_eq!(rush.littoral_area_acres, None, "N/A parses as absent");
        assert_eq!(rush.mean_depth_ft, None);
        assert_eq!(rush.category, LakeCategory::Sentinel);
    }

    #[test]
    fn test_border_flag() {
        let lakes = Lake::parse_lake_csv(SAMPLE_CSV).unwrap();
        assert_eq!(lakes[2].category, LakeCategory::BorderWater);
    }

    #[test]
    fn test_rejects_foreign_csv() {
        let result = Lake::parse_lake_csv("ID,NAME\n1,Somewhere\n");
        assert!(matches!(
            result,
            Err(crate::error::LakeDataError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_clean_id() {
        assert_eq!(clean_id("2379"), Some("2379".to_string()));
        assert_eq!(clean_id(" =\"2,379\" "), Some("2379".to_string()));
        assert_eq!(clean_id("1,234,567"), Some("1234567".to_string()));
        assert_eq!(clean_id(""), None);
        assert_eq!(clean_id("   "), None);
    }

    #[test]
    fn test_normalize_dow() {
        assert_eq!(normalize_dow("11030500"), Some("11030500".to_string()));
        assert_eq!(normalize_dow("110305"), Some("11030500".to_string()));
        assert_eq!(normalize_dow("11030500.0"), Some("11030500".to_string()));
        assert_eq!(normalize_dow("1103050099"), Some("11030500".to_string()));
        assert_eq!(normalize_dow(""), None);
        assert_eq!(normalize_dow("unknown"), None);
    }

    #[test]
    fn test_parse_opt_f64_sentinels() {
        assert_eq!(parse_opt_f64("42.5"), Some(42.5));
        assert_eq!(parse_opt_f64(" 42.5 "), Some(42.5));
        assert_eq!(parse_opt_f64(""), None);
        assert_eq!(parse_opt_f64("null"), None);
        assert_eq!(parse_opt_f64("N/A"), None);
        assert_eq!(parse_opt_f64("na"), None);
        assert_eq!(parse_opt_f64("not-a-number"), None);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for cat in [
            LakeCategory::Regular,
            LakeCategory::Sentinel,
            LakeCategory::BorderWater,
        ] {
            assert_eq!(LakeCategory::from_label(cat.as_str()), cat);
        }
        assert_eq!(LakeCategory::from_label("bogus"), LakeCategory::Regular);
    }
}
