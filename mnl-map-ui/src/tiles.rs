//! Base tile endpoint selection.
//!
//! There is no configuration file: the tile endpoint is hard-coded and
//! picked from the browsing hostname, so a local checkout talks to a
//! locally served tile directory and every deployed host uses the CDN.

/// Locally served tiles for development.
pub const LOCAL_TILE_URL: &str = "http://localhost:8088/tiles/{z}/{x}/{y}.png";

/// Production basemap (Positron, the light grayscale style).
pub const PROD_TILE_URL: &str =
    "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

/// Picks the tile URL template for a hostname.
pub fn select_tile_url(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" | "0.0.0.0" | "" => LOCAL_TILE_URL,
        _ => PROD_TILE_URL,
    }
}

/// Tile URL template for the current browsing context.
pub fn tile_url() -> &'static str {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    select_tile_url(&hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hostnames_use_local_tiles() {
        assert_eq!(select_tile_url("localhost"), LOCAL_TILE_URL);
        assert_eq!(select_tile_url("127.0.0.1"), LOCAL_TILE_URL);
    }

    #[test]
    fn deployed_hostnames_use_production_tiles() {
        assert_eq!(select_tile_url("lakes.example.org"), PROD_TILE_URL);
        assert_eq!(select_tile_url("www.dnr.state.mn.us"), PROD_TILE_URL);
    }
}
