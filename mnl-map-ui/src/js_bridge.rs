//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map functions live in `assets/js/*.js` and are loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize
//! marker data and call those globals, plus the click-callback channel
//! from Leaflet back into Rust.

use wasm_bindgen::prelude::*;

// Embed all map JS files at compile time
static LAKE_MAP_JS: &str = include_str!("../assets/js/lake-map.js");
static LAKE_MARKERS_JS: &str = include_str!("../assets/js/lake-markers.js");
static COUNTY_OVERLAY_JS: &str = include_str!("../assets/js/county-overlay.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MNL JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize map scripts with a wait-for-Leaflet polling loop.
///
/// The map JS files define functions like `renderLakeMarkers(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once Leaflet is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_map_scripts() {
    let all_js = [LAKE_MAP_JS, LAKE_MARKERS_JS, COUNTY_OVERLAY_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__mnlMapScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__mnlMapScripts);
                    delete window.__mnlMapScripts;
                    // Promote function declarations to window explicitly
                    if (typeof initLakeMap !== 'undefined') window.initLakeMap = initLakeMap;
                    if (typeof resetLakeView !== 'undefined') window.resetLakeView = resetLakeView;
                    if (typeof fitLakeBounds !== 'undefined') window.fitLakeBounds = fitLakeBounds;
                    if (typeof renderLakeMarkers !== 'undefined') window.renderLakeMarkers = renderLakeMarkers;
                    if (typeof clearLakeMarkers !== 'undefined') window.clearLakeMarkers = clearLakeMarkers;
                    if (typeof highlightLakeMarker !== 'undefined') window.highlightLakeMarker = highlightLakeMarker;
                    if (typeof renderCountyOverlay !== 'undefined') window.renderCountyOverlay = renderCountyOverlay;
                    if (typeof clearCountyOverlay !== 'undefined') window.clearCountyOverlay = clearCountyOverlay;
                    window.__mnlMapReady = true;
                    console.log('MNL map scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Create the map in the given container with the fixed Minnesota view.
///
/// Uses a polling loop to wait for Leaflet to load, map scripts to
/// initialize, and the container DOM element to exist before creating.
pub fn init_map(container_id: &str, tile_url: &str, attribution: &str) {
    let escaped_attribution = attribution.replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mnlMapReady &&
                    typeof window.initLakeMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initLakeMap('{container_id}', '{tile_url}', '{escaped_attribution}');
                    }} catch(e) {{ console.error('[MNL] initLakeMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the rendered marker set.
///
/// Uses a polling loop so marker rendering queued before the map finishes
/// initializing is not lost.
pub fn render_lake_markers(markers_json: &str) {
    let escaped = markers_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mnlMapReady &&
                    typeof window.renderLakeMarkers !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.renderLakeMarkers('{escaped}');
                    }} catch(e) {{ console.error('[MNL] renderLakeMarkers error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Re-frame the viewport to the given marker set, falling back to the
/// default Minnesota view when no bounds can be computed.
pub fn fit_lake_bounds(markers_json: &str) {
    let escaped = markers_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        "if (window.fitLakeBounds) window.fitLakeBounds('{}');",
        escaped
    ));
}

/// Return to the fixed default center/zoom over Minnesota.
pub fn reset_view() {
    call_js("if (window.resetLakeView) window.resetLakeView();");
}

/// Highlight one lake marker, resetting any previous highlight.
pub fn highlight_lake(lake_id: &str) {
    let escaped = lake_id.replace('\'', "\\'");
    call_js(&format!(
        "if (window.highlightLakeMarker) window.highlightLakeMarker('{}');",
        escaped
    ));
}

/// Draw the county boundary overlay for one county (by name).
pub fn render_county_overlay(geojson: &str, county_name: &str) {
    let escaped_geojson = geojson.replace('\'', "\\'").replace('\n', "");
    let escaped_county = county_name.replace('\'', "\\'");
    call_js(&format!(
        "if (window.renderCountyOverlay) window.renderCountyOverlay('{}', '{}');",
        escaped_geojson, escaped_county
    ));
}

/// Remove the county boundary overlay.
pub fn clear_county_overlay() {
    call_js("if (window.clearCountyOverlay) window.clearCountyOverlay();");
}

/// Install the marker-click callback at `window.__mnlOnLakeClick`.
///
/// The handler receives `(lake_id, name, county)` as the clicked feature
/// carried them; any of the three may be empty when the feature lacked
/// that property. Installed once for the lifetime of the page, so the
/// closure is intentionally leaked.
pub fn install_click_handler(handler: impl FnMut(String, String, String) + 'static) {
    let closure =
        Closure::wrap(Box::new(handler) as Box<dyn FnMut(String, String, String)>);
    if let Some(window) = web_sys::window() {
        let set_ok = js_sys::Reflect::set(
            window.as_ref(),
            &JsValue::from_str("__mnlOnLakeClick"),
            closure.as_ref(),
        );
        if set_ok.is_err() {
            log::error!("failed to install the lake click handler");
        }
    }
    closure.forget();
}
