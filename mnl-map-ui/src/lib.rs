//! Shared Dioxus components and Leaflet bridge for the lakes explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `fetch`: runtime fetch helpers for static data files (plain and gzipped)
//! - `ready`: the queue-then-fire callback gate for one-shot data loads
//! - `state`: reactive AppState with Dioxus Signals
//! - `tiles`: hostname-based base tile endpoint selection
//! - `view_model`: typed view models shaped separately from markup
//! - `components`: reusable RSX components (search, selectors, panels)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod ready;
pub mod state;
pub mod tiles;
pub mod view_model;
