//! Lake name search form.

use crate::state::{AppState, LakeSelection};
use dioxus::prelude::*;

/// Search form for lake names.
///
/// Submission policy: zero matches shows a count message only; exactly
/// one match selects it and clears the box; multiple matches expand the
/// result list with the first entry auto-previewed.
#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.search_query)();

    let on_input = move |evt: Event<FormData>| {
        state.search_query.set(evt.value());
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        run_search(&mut state);
    };

    rsx! {
        form {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            onsubmit: on_submit,
            label {
                r#for: "lake-search",
                style: "font-weight: bold;",
                "Lake name: "
            }
            input {
                id: "lake-search",
                r#type: "text",
                placeholder: "e.g. Gull Lake",
                value: "{query}",
                oninput: on_input,
            }
            button {
                r#type: "submit",
                "Search"
            }
            if let Some(message) = (state.search_message)() {
                span {
                    style: "font-size: 12px; color: #666;",
                    "{message}"
                }
            }
        }
    }
}

/// Apply the search submission policy against the loaded data.
fn run_search(state: &mut AppState) {
    let query = (state.search_query)();
    let db = match &*state.db.read() {
        Some(db) => db.clone(),
        None => return,
    };

    let results = match db.search_lakes_by_name(&query) {
        Ok(results) => results,
        Err(e) => {
            log::error!("search failed: {}", e);
            return;
        }
    };

    match results.len() {
        0 => {
            state
                .search_message
                .set(Some(format!("No lakes match \"{}\"", query.trim())));
            state.search_results.set(Vec::new());
            state.show_results.set(false);
            state.active_result.set(None);
        }
        1 => {
            // A unique hit selects directly and clears the box.
            if let Some(lake) = results.into_iter().next() {
                state.search_message.set(None);
                state.search_results.set(Vec::new());
                state.show_results.set(false);
                state.active_result.set(None);
                state.search_query.set(String::new());
                state.selected.set(Some(LakeSelection::Known(lake)));
            }
        }
        n => {
            state.search_message.set(Some(format!("{} lakes match", n)));
            if let Some(first) = results.first() {
                // Auto-preview the first entry; the rest stay selectable.
                state.active_result.set(Some(first.lake_id.clone()));
                state
                    .selected
                    .set(Some(LakeSelection::Known(first.clone())));
            }
            state.search_results.set(results);
            state.show_results.set(true);
        }
    }
}
