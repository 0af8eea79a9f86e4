//! Dropdown selector for filtering lakes by county.

use crate::state::AppState;
use crate::view_model::{county_selection_changed, normalize_county_selection};
use dioxus::prelude::*;

/// County dropdown selector.
///
/// Reads available counties from AppState and updates `selected_county`
/// on change. Re-selecting the current county is an idempotent no-op so
/// the map is not re-fit for a selection that did not change.
#[component]
pub fn CountySelector() -> Element {
    let mut state = use_context::<AppState>();
    let counties = state.counties.read().clone();
    let selected = (state.selected_county)();
    let selected_value = selected.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let next = normalize_county_selection(&evt.value());
        let current = (state.selected_county)();
        if !county_selection_changed(&current, &next) {
            return;
        }
        state.selected_county.set(next);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "county-select",
                style: "font-weight: bold; margin-right: 8px;",
                "County: "
            }
            select {
                id: "county-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "All counties"
                }
                for county in counties.iter() {
                    option {
                        value: "{county}",
                        selected: *county == selected_value,
                        "{county}"
                    }
                }
            }
        }
    }
}
