//! Fish survey panel: per-species collapsible sections.

use crate::state::{AppState, LakeSelection};
use crate::view_model::{fmt_cpue, species_sections, SpeciesSection};
use dioxus::prelude::*;

/// Fish survey statistics for the selected lake.
///
/// Catch records are grouped per species into collapsible sections with
/// the per-species average CPUE (missing values excluded from the mean)
/// and total catch. Absent data renders as "no data", never an error.
#[component]
pub fn FishSurveyPanel() -> Element {
    let state = use_context::<AppState>();

    let lake = match &*state.selected.read() {
        Some(LakeSelection::Known(lake)) => lake.clone(),
        Some(LakeSelection::Unknown { .. }) => {
            return rsx! {
                div {
                    style: "padding: 12px; color: #666; font-size: 13px;",
                    "No fish survey data for this feature."
                }
            };
        }
        None => return rsx! {},
    };

    if let Some(err) = (state.fish_error)() {
        return rsx! {
            div {
                style: "padding: 12px; color: #C62828; font-size: 13px;",
                "Fish survey data could not be loaded: {err}"
            }
        };
    }

    if !(state.fish_loaded)() {
        return rsx! {
            div {
                style: "padding: 12px; color: #666; font-size: 13px;",
                "Loading fish survey data..."
            }
        };
    }

    let db = match &*state.db.read() {
        Some(db) => db.clone(),
        None => return rsx! {},
    };

    let summaries = db.query_catch_summaries(&lake.lake_id).unwrap_or_default();
    let catches = db.query_catch_records(&lake.lake_id).unwrap_or_default();
    let lengths = db.query_length_records(&lake.lake_id).unwrap_or_default();
    let table = db.query_species_table().unwrap_or_default();

    let sections = species_sections(&summaries, &catches, &lengths, &table);
    if sections.is_empty() {
        return rsx! {
            div {
                style: "padding: 12px; color: #666; font-size: 13px;",
                "No fish survey data recorded for {lake.name}."
            }
        };
    }

    let rendered = sections.into_iter().map(render_section);

    rsx! {
        div {
            style: "padding: 12px; border: 1px solid #E0E0E0; border-radius: 4px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Fish surveys"
            }
            {rendered}
        }
    }
}

/// One collapsible species section.
fn render_section(section: SpeciesSection) -> Element {
    let summary_line = format!(
        "Avg CPUE {} · total catch {} · {} records",
        fmt_cpue(section.avg_cpue),
        section.total_catch,
        section.record_count
    );

    let catch_rows = section.catches.into_iter().map(|record| {
        let date = record.survey_date.unwrap_or_else(|| "N/A".to_string());
        let gear = record.gear_type.unwrap_or_else(|| "N/A".to_string());
        let cpue = fmt_cpue(record.cpue);
        let total = record
            .total_catch
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        rsx! {
            tr {
                td { style: "padding: 2px 8px 2px 0;", "{date}" }
                td { style: "padding: 2px 8px 2px 0;", "{gear}" }
                td { style: "padding: 2px 8px 2px 0; text-align: right;", "{cpue}" }
                td { style: "padding: 2px 0; text-align: right;", "{total}" }
            }
        }
    });

    let has_lengths = !section.lengths.is_empty();
    let length_rows = section.lengths.into_iter().map(|record| {
        let date = record.survey_date.unwrap_or_else(|| "N/A".to_string());
        let buckets = record
            .length_distribution
            .iter()
            .map(|(bucket, count)| format!("{}: {}", bucket, count))
            .collect::<Vec<_>>()
            .join(", ");
        rsx! {
            p {
                style: "margin: 2px 0; font-size: 12px;",
                strong { "{date}: " }
                "{buckets}"
            }
        }
    });

    let has_catches = section.record_count > 0;

    rsx! {
        details {
            style: "margin-bottom: 6px; font-size: 13px;",
            summary {
                style: "cursor: pointer;",
                strong { "{section.label}" }
                span { style: "color: #666; margin-left: 6px;", "{summary_line}" }
            }
            if let Some(scientific) = section.scientific_name {
                p {
                    style: "margin: 4px 0; font-size: 12px; color: #666; font-style: italic;",
                    "{scientific}"
                }
            }
            if has_catches {
                table {
                    style: "border-collapse: collapse; font-size: 12px; margin: 4px 0;",
                    thead {
                        tr {
                            th { style: "text-align: left; padding-right: 8px;", "Survey date" }
                            th { style: "text-align: left; padding-right: 8px;", "Gear" }
                            th { style: "text-align: right; padding-right: 8px;", "CPUE" }
                            th { style: "text-align: right;", "Total" }
                        }
                    }
                    tbody { {catch_rows} }
                }
            } else {
                p { style: "margin: 4px 0; font-size: 12px; color: #666;", "No catch records." }
            }
            if has_lengths {
                div {
                    p { style: "margin: 4px 0 2px 0; font-size: 12px; font-weight: bold;", "Length distributions" }
                    {length_rows}
                }
            }
        }
    }
}
