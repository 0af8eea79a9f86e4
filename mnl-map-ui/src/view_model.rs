//! Typed view models: data shaping separated from markup emission.
//!
//! Everything here is a pure function from domain/query types to display
//! structures, so the "what to show" half of the UI is testable without a
//! DOM. The RSX components and the JS bridge only consume these.

use mnl_db::models::{CatchDetail, CatchSummary, LengthDetail};
use mnl_fisheries::lake::{Lake, LakeCategory};
use mnl_fisheries::species::{self, SpeciesTable};
use mnl_fisheries::survey::parse_survey_date;
use serde::Serialize;
use std::collections::BTreeSet;

/// Marker colors by DNR category.
const COLOR_REGULAR: &str = "#0077be";
const COLOR_SENTINEL: &str = "#7b1fa2";
const COLOR_BORDER: &str = "#e65100";

/// Marker payload handed to the Leaflet bridge as JSON.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LakeMarker {
    pub lake_id: String,
    pub name: String,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Circle radius in pixels, bucketed by surface area
    pub radius: u32,
    /// Marker color by DNR category
    pub color: &'static str,
    /// Tooltip/popup line
    pub popup: String,
}

/// Circle radius bucket for a lake's surface area.
pub fn area_radius(area_acres: Option<f64>) -> u32 {
    match area_acres {
        Some(a) if a >= 50_000.0 => 12,
        Some(a) if a >= 5_000.0 => 9,
        Some(a) if a >= 500.0 => 6,
        _ => 4,
    }
}

pub fn category_color(category: LakeCategory) -> &'static str {
    match category {
        LakeCategory::Regular => COLOR_REGULAR,
        LakeCategory::Sentinel => COLOR_SENTINEL,
        LakeCategory::BorderWater => COLOR_BORDER,
    }
}

/// Shapes marker payloads for the renderable subset of `lakes`.
/// Lakes without coordinates are skipped.
pub fn lake_markers(lakes: &[Lake]) -> Vec<LakeMarker> {
    lakes
        .iter()
        .filter_map(|lake| {
            let (latitude, longitude) = match (lake.latitude, lake.longitude) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => return None,
            };
            let popup = match lake.area_acres {
                Some(area) => format!("{} ({} acres)", lake.name, fmt_num(area)),
                None => lake.name.clone(),
            };
            Some(LakeMarker {
                lake_id: lake.lake_id.clone(),
                name: lake.name.clone(),
                county: lake.county.clone(),
                latitude,
                longitude,
                radius: area_radius(lake.area_acres),
                color: category_color(lake.category),
                popup,
            })
        })
        .collect()
}

/// Lake detail panel contents. Stats omit absent fields entirely rather
/// than showing blanks.
#[derive(Debug, Clone, PartialEq)]
pub struct LakeDetailView {
    pub title: String,
    /// Alternate name, when the lake has one
    pub subtitle: Option<String>,
    /// Label/value pairs in display order
    pub stats: Vec<(String, String)>,
    /// False for the degraded placeholder built from a bare map feature
    pub found: bool,
}

/// Detail view for a lake resolved from the loaded data set.
pub fn lake_detail_view(lake: &Lake) -> LakeDetailView {
    let mut stats: Vec<(String, String)> = Vec::new();
    stats.push(("ID".to_string(), lake.lake_id.clone()));
    if let Some(dow) = &lake.dow_number {
        stats.push(("DOW number".to_string(), dow.clone()));
    }
    if !lake.county.is_empty() {
        stats.push(("County".to_string(), lake.county.clone()));
    }
    if lake.category != LakeCategory::Regular {
        stats.push(("Designation".to_string(), category_label(lake.category)));
    }
    push_num(&mut stats, "Area (acres)", lake.area_acres);
    push_num(&mut stats, "Littoral area (acres)", lake.littoral_area_acres);
    push_num(&mut stats, "Shore length (miles)", lake.shore_length_mi);
    push_num(&mut stats, "Maximum depth (feet)", lake.max_depth_ft);
    push_num(&mut stats, "Mean depth (feet)", lake.mean_depth_ft);
    if let (Some(lat), Some(lon)) = (lake.latitude, lake.longitude) {
        stats.push((
            "Location".to_string(),
            format!("{:.4}°N, {:.4}°W", lat, lon.abs()),
        ));
    }
    LakeDetailView {
        title: lake.name.clone(),
        subtitle: lake.alternate_name.clone(),
        stats,
        found: true,
    }
}

/// Degraded detail view for a clicked feature whose identifier did not
/// resolve: only whatever the feature itself carried.
pub fn placeholder_detail_view(name: Option<&str>, county: Option<&str>) -> LakeDetailView {
    let mut stats = Vec::new();
    if let Some(county) = county {
        if !county.is_empty() {
            stats.push(("County".to_string(), county.to_string()));
        }
    }
    LakeDetailView {
        title: name.unwrap_or("Unknown lake").to_string(),
        subtitle: None,
        stats,
        found: false,
    }
}

/// One collapsible per-species section of the fish survey panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesSection {
    pub species_code: String,
    /// Display label, e.g. "Walleye (WAE)"
    pub label: String,
    pub scientific_name: Option<String>,
    /// Mean CPUE over records that measured it; `None` when none did
    pub avg_cpue: Option<f64>,
    pub total_catch: i64,
    pub record_count: i64,
    pub catches: Vec<CatchDetail>,
    pub lengths: Vec<LengthDetail>,
}

/// Groups survey query results into per-species sections.
///
/// Sections follow the summary order (sorted by species code); species
/// present only in the length table are appended after.
pub fn species_sections(
    summaries: &[CatchSummary],
    catches: &[CatchDetail],
    lengths: &[LengthDetail],
    table: &SpeciesTable,
) -> Vec<SpeciesSection> {
    let mut sections: Vec<SpeciesSection> = Vec::new();
    let mut covered: BTreeSet<&str> = BTreeSet::new();

    for summary in summaries {
        covered.insert(summary.species_code.as_str());
        let mut species_catches: Vec<CatchDetail> = catches
            .iter()
            .filter(|c| c.species_code == summary.species_code)
            .cloned()
            .collect();
        // The exports mix date formats, so string order is not
        // chronological; sort on the parsed date (unparseable first).
        species_catches
            .sort_by_key(|c| c.survey_date.as_deref().and_then(parse_survey_date));
        let mut species_lengths: Vec<LengthDetail> = lengths
            .iter()
            .filter(|l| l.species_code == summary.species_code)
            .cloned()
            .collect();
        species_lengths
            .sort_by_key(|l| l.survey_date.as_deref().and_then(parse_survey_date));
        sections.push(SpeciesSection {
            label: species::species_label(table, &summary.species_code),
            scientific_name: table
                .get(&summary.species_code)
                .map(|s| s.scientific_name.clone()),
            avg_cpue: summary.avg_cpue,
            total_catch: summary.total_catch,
            record_count: summary.record_count,
            catches: species_catches,
            lengths: species_lengths,
            species_code: summary.species_code.clone(),
        });
    }

    let length_only: BTreeSet<&str> = lengths
        .iter()
        .map(|l| l.species_code.as_str())
        .filter(|code| !covered.contains(code))
        .collect();
    for code in length_only {
        sections.push(SpeciesSection {
            species_code: code.to_string(),
            label: species::species_label(table, code),
            scientific_name: table.get(code).map(|s| s.scientific_name.clone()),
            avg_cpue: None,
            total_catch: 0,
            record_count: 0,
            catches: Vec::new(),
            lengths: lengths
                .iter()
                .filter(|l| l.species_code == code)
                .cloned()
                .collect(),
        });
    }

    sections
}

/// Whether a county selection change should re-render and re-fit the map.
/// Re-selecting the identical county is an idempotent no-op.
pub fn county_selection_changed(prev: &Option<String>, next: &Option<String>) -> bool {
    prev != next
}

/// Maps the county `<select>` value to the filter state; the empty value
/// is the "all counties" option.
pub fn normalize_county_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a number without a trailing `.0` for whole values.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Formats an optional CPUE for display; absent means no record measured it.
pub fn fmt_cpue(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

fn push_num(stats: &mut Vec<(String, String)>, label: &str, value: Option<f64>) {
    if let Some(v) = value {
        stats.push((label.to_string(), fmt_num(v)));
    }
}

fn category_label(category: LakeCategory) -> String {
    match category {
        LakeCategory::Regular => "Regular".to_string(),
        LakeCategory::Sentinel => "Sentinel lake".to_string(),
        LakeCategory::BorderWater => "Border water".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnl_fisheries::species::parse_species_json;

    fn lake(id: &str, name: &str, lat: Option<f64>, lon: Option<f64>, area: Option<f64>) -> Lake {
        Lake {
            lake_id: id.to_string(),
            name: name.to_string(),
            alternate_name: None,
            dow_number: None,
            county: "Cass".to_string(),
            area_acres: area,
            littoral_area_acres: None,
            max_depth_ft: None,
            mean_depth_ft: None,
            shore_length_mi: None,
            latitude: lat,
            longitude: lon,
            category: LakeCategory::Regular,
        }
    }

    #[test]
    fn markers_skip_lakes_without_coordinates() {
        let lakes = vec![
            lake("1", "Gull Lake", Some(46.4), Some(-94.3), Some(9947.0)),
            lake("2", "No Coords Lake", None, Some(-94.0), Some(100.0)),
        ];
        let markers = lake_markers(&lakes);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].lake_id, "1");
        assert_eq!(markers[0].popup, "Gull Lake (9947 acres)");
    }

    #[test]
    fn radius_buckets_by_area() {
        assert_eq!(area_radius(None), 4);
        assert_eq!(area_radius(Some(120.0)), 4);
        assert_eq!(area_radius(Some(1_300.0)), 6);
        assert_eq!(area_radius(Some(9_900.0)), 9);
        assert_eq!(area_radius(Some(128_000.0)), 12);
    }

    #[test]
    fn detail_view_omits_missing_fields() {
        let mut subject = lake("2379", "Gull Lake", Some(46.40827), Some(-94.35608), Some(9947.07));
        subject.max_depth_ft = Some(80.0);
        let view = lake_detail_view(&subject);
        assert!(view.found);
        assert_eq!(view.title, "Gull Lake");
        let labels: Vec<&str> = view.stats.iter().map(|(l, _)| l.as_str()).collect();
        assert!(labels.contains(&"Area (acres)"));
        assert!(labels.contains(&"Maximum depth (feet)"));
        assert!(!labels.contains(&"Mean depth (feet)"), "missing field omitted");
        let location = &view.stats.last().unwrap().1;
        assert_eq!(location, "46.4083°N, 94.3561°W");
    }

    #[test]
    fn placeholder_view_carries_only_feature_fields() {
        let view = placeholder_detail_view(Some("Mystery Lake"), Some("Cass"));
        assert!(!view.found);
        assert_eq!(view.title, "Mystery Lake");
        assert_eq!(view.stats, vec![("County".to_string(), "Cass".to_string())]);

        let bare = placeholder_detail_view(None, None);
        assert_eq!(bare.title, "Unknown lake");
        assert!(bare.stats.is_empty());
    }

    #[test]
    fn sections_group_by_species_with_length_only_appended() {
        let table = parse_species_json(
            r#"{"WAE": {"name": "Walleye", "scientific_name": "Sander vitreus"}}"#,
        )
        .unwrap();
        let summaries = vec![CatchSummary {
            species_code: "WAE".to_string(),
            record_count: 2,
            avg_cpue: Some(4.0),
            total_catch: 108,
        }];
        let catches = vec![CatchDetail {
            species_code: "WAE".to_string(),
            survey_date: Some("2019-08-05".to_string()),
            gear_type: Some("Standard gill nets".to_string()),
            cpue: Some(4.0),
            total_catch: Some(96),
        }];
        let lengths = vec![LengthDetail {
            species_code: "NOP".to_string(),
            survey_date: Some("2019-08-05".to_string()),
            length_distribution: Default::default(),
        }];

        let sections = species_sections(&summaries, &catches, &lengths, &table);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].species_code, "WAE");
        assert_eq!(sections[0].label, "Walleye (WAE)");
        assert_eq!(sections[0].catches.len(), 1);
        assert_eq!(sections[1].species_code, "NOP");
        assert_eq!(sections[1].label, "Species NOP");
        assert_eq!(sections[1].record_count, 0);
    }

    #[test]
    fn section_catches_sort_chronologically_across_date_formats() {
        let table = SpeciesTable::new();
        let summaries = vec![CatchSummary {
            species_code: "WAE".to_string(),
            record_count: 3,
            avg_cpue: Some(4.0),
            total_catch: 100,
        }];
        let record = |date: &str| CatchDetail {
            species_code: "WAE".to_string(),
            survey_date: Some(date.to_string()),
            gear_type: None,
            cpue: None,
            total_catch: None,
        };
        // "08/05/2019" sorts after "2016-08-01" as a string but not as a date.
        let catches = vec![record("2022-08-01"), record("08/05/2019"), record("2016-08-01")];

        let sections = species_sections(&summaries, &catches, &[], &table);
        let dates: Vec<&str> = sections[0]
            .catches
            .iter()
            .filter_map(|c| c.survey_date.as_deref())
            .collect();
        assert_eq!(dates, vec!["2016-08-01", "08/05/2019", "2022-08-01"]);
    }

    #[test]
    fn repeated_county_selection_is_a_no_op() {
        let cass = Some("Cass".to_string());
        assert!(!county_selection_changed(&cass, &Some("Cass".to_string())));
        assert!(county_selection_changed(&cass, &Some("Itasca".to_string())));
        assert!(county_selection_changed(&None, &cass));
    }

    #[test]
    fn county_selection_normalizes_empty_to_all() {
        assert_eq!(normalize_county_selection(""), None);
        assert_eq!(normalize_county_selection("  "), None);
        assert_eq!(
            normalize_county_selection("Mille Lacs"),
            Some("Mille Lacs".to_string())
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(9947.0), "9947");
        assert_eq!(fmt_num(38.9), "38.9");
        assert_eq!(fmt_cpue(Some(4.0)), "4.00");
        assert_eq!(fmt_cpue(None), "N/A");
    }
}
