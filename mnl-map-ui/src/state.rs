//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::ready::LoadGate;
use dioxus::prelude::*;
use mnl_db::Database;
use mnl_fisheries::lake::Lake;

/// The current map selection.
///
/// `Unknown` is the degraded case: a clicked feature whose identifier did
/// not resolve against the loaded lake list, carrying only whatever the
/// feature itself had.
#[derive(Clone, PartialEq)]
pub enum LakeSelection {
    Known(Lake),
    Unknown {
        name: Option<String>,
        county: Option<String>,
    },
}

/// Shared application state for the lakes explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the initial load is still running
    pub loading: Signal<bool>,
    /// Error message if the initial load failed outright
    pub error_msg: Signal<Option<String>>,
    /// Distinct county names, populated once the initial load resolves
    pub counties: Signal<Vec<String>>,
    /// Current county filter; None = all counties
    pub selected_county: Signal<Option<String>>,
    /// Live contents of the search box
    pub search_query: Signal<String>,
    /// Results of the last submitted search
    pub search_results: Signal<Vec<Lake>>,
    /// Count/err message from the last submitted search
    pub search_message: Signal<Option<String>>,
    /// Whether the result list is expanded
    pub show_results: Signal<bool>,
    /// lake_id of the visually active result-list entry
    pub active_result: Signal<Option<String>>,
    /// Currently selected lake, if any
    pub selected: Signal<Option<LakeSelection>>,
    /// Whether the lazy bulk fish tables have been loaded
    pub fish_loaded: Signal<bool>,
    /// Whether the lazy bulk fish load is in flight
    pub fish_loading: Signal<bool>,
    /// Terminal error from the lazy fish load, if it failed
    pub fish_error: Signal<Option<String>>,
    /// County boundary GeoJSON, cached after the first successful fetch
    pub county_geojson: Signal<Option<String>>,
    /// Set when the boundary fetch failed; the overlay stays off for the session
    pub overlay_failed: Signal<bool>,
    /// Gate resolved when the initial bulk load completes
    pub data_gate: Signal<LoadGate>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            counties: Signal::new(Vec::new()),
            selected_county: Signal::new(None),
            search_query: Signal::new(String::new()),
            search_results: Signal::new(Vec::new()),
            search_message: Signal::new(None),
            show_results: Signal::new(false),
            active_result: Signal::new(None),
            selected: Signal::new(None),
            fish_loaded: Signal::new(false),
            fish_loading: Signal::new(false),
            fish_error: Signal::new(None),
            county_geojson: Signal::new(None),
            overlay_failed: Signal::new(false),
            data_gate: Signal::new(LoadGate::new()),
        }
    }
}
