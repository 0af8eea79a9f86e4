//! Lake detail panel.

use crate::state::{AppState, LakeSelection};
use crate::view_model::{lake_detail_view, placeholder_detail_view, LakeDetailView};
use dioxus::prelude::*;

/// Metadata panel for the selected lake.
///
/// Unknown selections (a clicked feature whose id did not resolve) render
/// the degraded view with whatever the feature carried.
#[component]
pub fn LakeDetailPanel() -> Element {
    let state = use_context::<AppState>();

    let view: Option<LakeDetailView> = match &*state.selected.read() {
        Some(LakeSelection::Known(lake)) => Some(lake_detail_view(lake)),
        Some(LakeSelection::Unknown { name, county }) => {
            Some(placeholder_detail_view(name.as_deref(), county.as_deref()))
        }
        None => None,
    };

    let Some(view) = view else {
        return rsx! {
            div {
                style: "padding: 12px; color: #666; font-size: 13px;",
                "Click a lake marker or search by name to see details."
            }
        };
    };

    let rows = view.stats.into_iter().map(|(label, value)| {
        rsx! {
            div {
                style: "display: flex; justify-content: space-between; padding: 2px 0; font-size: 13px;",
                span { style: "color: #666;", "{label}" }
                span { "{value}" }
            }
        }
    });

    rsx! {
        div {
            style: "padding: 12px; border: 1px solid #E0E0E0; border-radius: 4px; margin-bottom: 12px;",
            h3 {
                style: "margin: 0 0 2px 0; font-size: 16px;",
                "{view.title}"
            }
            if let Some(subtitle) = view.subtitle {
                p {
                    style: "margin: 0 0 6px 0; font-size: 12px; color: #666; font-style: italic;",
                    "also known as {subtitle}"
                }
            }
            if !view.found {
                p {
                    style: "margin: 0 0 6px 0; font-size: 12px; color: #E65100;",
                    "This feature is not in the loaded lake list; showing available fields only."
                }
            }
            {rows}
        }
    }
}
