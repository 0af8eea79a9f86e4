//! Clickable list of search results.

use crate::state::{AppState, LakeSelection};
use dioxus::prelude::*;

/// Search result list, shown only for multi-match searches.
///
/// The active (auto-previewed) entry is visually marked; selecting any
/// entry collapses the list and shows that lake's details.
#[component]
pub fn ResultList() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.show_results)() {
        return rsx! {};
    }
    let results = state.search_results.read().clone();
    let active = (state.active_result)();

    let rows = results.into_iter().map(|lake| {
        let is_active = active.as_deref() == Some(lake.lake_id.as_str());
        let item_style = if is_active {
            "padding: 6px 10px; cursor: pointer; background: #E3F2FD; font-weight: bold;"
        } else {
            "padding: 6px 10px; cursor: pointer;"
        };
        let label = if lake.county.is_empty() {
            lake.name.clone()
        } else {
            format!("{} ({} County)", lake.name, lake.county)
        };
        let key = lake.lake_id.clone();
        rsx! {
            li {
                key: "{key}",
                style: "{item_style}",
                onclick: move |_| {
                    state.active_result.set(Some(lake.lake_id.clone()));
                    state.selected.set(Some(LakeSelection::Known(lake.clone())));
                    state.show_results.set(false);
                },
                "{label}"
            }
        }
    });

    rsx! {
        ul {
            style: "list-style: none; margin: 4px 0; padding: 0; border: 1px solid #E0E0E0; border-radius: 4px; max-height: 220px; overflow-y: auto;",
            {rows}
        }
    }
}
