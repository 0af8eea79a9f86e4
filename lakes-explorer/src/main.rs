//! Minnesota Lakes Explorer
//!
//! Renders Minnesota lake locations as clustered markers on a Leaflet map
//! and shows per-lake metadata and fish survey statistics from static DNR
//! data files. This collapses the earlier competing map/data-loader
//! variants into one implementation.
//!
//! Data flow:
//! 1. `build.rs` copies `mn_lakes.csv` and `fish_species.json` into
//!    `OUT_DIR`; `include_str!` embeds them into the WASM binary.
//! 2. On mount, both are loaded into an in-memory SQLite database
//!    (`mnl-db`) and the county dropdown is populated through the load
//!    gate.
//! 3. The bulk fish catch/length tables are fetched as gzipped JSON on
//!    the first lake selection, exactly once; a failed fetch is terminal
//!    for the session.
//! 4. Markers, county filtering, selection highlighting and the optional
//!    county boundary overlay are driven through the Leaflet bridge in
//!    `mnl-map-ui`.

use dioxus::prelude::*;
use mnl_db::Database;
use mnl_map_ui::components::{
    AppHeader, CountySelector, ErrorDisplay, FishSurveyPanel, LakeDetailPanel, LoadingSpinner,
    MapContainer, ResultList, SearchBox,
};
use mnl_map_ui::js_bridge;
use mnl_map_ui::state::{AppState, LakeSelection};
use mnl_map_ui::{fetch, tiles, view_model};

/// Lake list export, embedded at compile time.
const LAKES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/mn_lakes.csv"));
/// Species reference table, embedded at compile time.
const SPECIES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/fish_species.json"));

/// Runtime-fetched gzip-compressed bulk fish tables (served alongside WASM).
const FISH_CATCH_GZ_URL: &str = "./fish_catch.json.gz";
const FISH_LENGTH_GZ_URL: &str = "./fish_length.json.gz";

/// Runtime-fetched county boundaries for the optional overlay.
const COUNTY_GEOJSON_URL: &str = "./mn_counties.geojson";

/// Map container DOM element ID that Leaflet mounts into.
const MAP_ID: &str = "lake-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // County dropdown population is deferred until the initial bulk load
    // resolves; registered before the load effect runs so it queues.
    use_hook(|| {
        (state.data_gate)().on_ready(move || {
            let counties = match &*state.db.read() {
                Some(db) => db.query_counties().unwrap_or_default(),
                None => Vec::new(),
            };
            state.counties.set(counties);
        });
    });

    // Initialize database on mount
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_lakes(LAKES_CSV) {
                    log::error!("Failed to load lakes: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load lake data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                // The species table is reference data only; without it the
                // survey panel falls back to bare species codes.
                if let Err(e) = db.load_species(SPECIES_JSON) {
                    log::warn!("Failed to load species table: {}", e);
                }

                state.db.set(Some(db));
                state.loading.set(false);
                (state.data_gate)().resolve();
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Create the map and install the click callback once loading settles
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        js_bridge::init_map_scripts();
        js_bridge::init_map(MAP_ID, tiles::tile_url(), tiles::TILE_ATTRIBUTION);
        js_bridge::install_click_handler(move |lake_id, name, county| {
            on_lake_clicked(state, lake_id, name, county);
        });
    });

    // Render markers whenever the county filter changes; filtering
    // rebuilds the marker set from the full collection and re-frames the
    // viewport to the filtered bounds.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let county = (state.selected_county)();

        let lakes = match db.query_lakes_by_county(county.as_deref()) {
            Ok(lakes) => lakes,
            Err(e) => {
                log::error!("county filter query failed: {}", e);
                return;
            }
        };
        let markers = view_model::lake_markers(&lakes);
        let markers_json = serde_json::to_string(&markers).unwrap_or_default();
        js_bridge::render_lake_markers(&markers_json);

        match &county {
            Some(name) => {
                js_bridge::fit_lake_bounds(&markers_json);
                show_county_overlay(state, name.clone());
            }
            None => {
                js_bridge::reset_view();
                js_bridge::clear_county_overlay();
            }
        }
    });

    // Keep the map highlight in sync with the selection
    use_effect(move || {
        if let Some(LakeSelection::Known(lake)) = &*state.selected.read() {
            js_bridge::highlight_lake(&lake.lake_id);
        }
    });

    // Lazily fetch the bulk fish tables on the first selection
    use_effect(move || {
        let wants_fish = state.selected.read().is_some();
        if !wants_fish || (state.fish_loaded)() || (state.fish_loading)() {
            return;
        }
        state.fish_loading.set(true);
        spawn(async move {
            let db = match &*state.db.read() {
                Some(db) => db.clone(),
                None => return,
            };

            match fetch::fetch_gz_text(FISH_CATCH_GZ_URL).await {
                Ok(json) => {
                    if let Err(e) = db.load_fish_catch(&json) {
                        log::error!("Failed to load fish catch data: {}", e);
                        state.fish_error.set(Some(e.to_string()));
                        return;
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch fish catch data: {}", e);
                    state.fish_error.set(Some(e.to_string()));
                    return;
                }
            }

            // Length distributions are secondary; losing them only thins
            // out the survey panel.
            match fetch::fetch_gz_text(FISH_LENGTH_GZ_URL).await {
                Ok(json) => {
                    if let Err(e) = db.load_fish_length(&json) {
                        log::warn!("Failed to load fish length data: {}", e);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to fetch fish length data: {}", e);
                }
            }

            state.fish_loaded.set(true);
        });
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            AppHeader {
                title: "Minnesota Lakes Explorer".to_string(),
                subtitle: "Lake metadata and fish survey statistics from Minnesota DNR exports".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    SearchBox {}
                    CountySelector {}
                }
                ResultList {}
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap;",
                    div {
                        style: "flex: 2; min-width: 480px;",
                        MapContainer { id: MAP_ID.to_string() }
                    }
                    div {
                        style: "flex: 1; min-width: 280px;",
                        LakeDetailPanel {}
                        FishSurveyPanel {}
                    }
                }
                div {
                    style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                    "Marker size follows lake area. Purple markers are sentinel lakes, orange markers are border waters."
                }
            }
        }
    }
}

/// Resolve a clicked map feature against the loaded lake list.
///
/// A feature whose identifier is unknown degrades to a placeholder
/// selection carrying only the name/county the feature itself had.
fn on_lake_clicked(mut state: AppState, lake_id: String, name: String, county: String) {
    let db = match &*state.db.read() {
        Some(db) => db.clone(),
        None => return,
    };
    let resolved = if lake_id.is_empty() {
        None
    } else {
        db.query_lake_by_id(&lake_id).ok().flatten()
    };
    match resolved {
        Some(lake) => state.selected.set(Some(LakeSelection::Known(lake))),
        None => {
            log::warn!("clicked feature '{}' is not in the loaded lake list", lake_id);
            state.selected.set(Some(LakeSelection::Unknown {
                name: (!name.is_empty()).then_some(name),
                county: (!county.is_empty()).then_some(county),
            }));
        }
    }
}

/// Draw the boundary overlay for the selected county, fetching the
/// GeoJSON at most once per session. A failed fetch disables the overlay
/// only; the marker filter is unaffected.
fn show_county_overlay(mut state: AppState, county: String) {
    // peek(): reading the cache must not re-subscribe the marker effect,
    // or the fetch completing would re-fit the viewport a second time.
    if *state.overlay_failed.peek() {
        return;
    }
    if let Some(geojson) = state.county_geojson.peek().clone() {
        js_bridge::render_county_overlay(&geojson, &county);
        return;
    }
    spawn(async move {
        match fetch::fetch_text(COUNTY_GEOJSON_URL).await {
            Ok(geojson) => {
                // Only draw if this county is still the active filter.
                if (state.selected_county)().as_deref() == Some(county.as_str()) {
                    js_bridge::render_county_overlay(&geojson, &county);
                }
                state.county_geojson.set(Some(geojson));
            }
            Err(e) => {
                log::warn!("county boundary overlay unavailable: {}", e);
                state.overlay_failed.set(true);
            }
        }
    });
}
