//! In-memory SQLite data access layer for Minnesota lake and fish data.
//!
//! This crate loads the static DNR data files into an in-memory SQLite
//! database and exposes typed query methods for consumption by the Dioxus
//! application compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - Lake list and species table loaded via `include_str!` at compile time
//!   in the consuming crate; the bulk fish tables are fetched at runtime
//!   and loaded lazily, exactly once
//! - Typed query methods returning the domain structs of `mnl-fisheries`
//!   plus serializable summary rows
//!
//! # Usage
//!
//! ```rust
//! use mnl_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_lakes("FISHERIES_WATERBODY_ID,LAKE_NAME,ALT_LAKE_NAME,DOW_NBR_PRIMARY,COUNTY_NAME,LAKE_AREA_DOW_ACRES,LITTORAL_AREA_ACRES,MAX_DEPTH_FEET,MEAN_DEPTH_FEET,SHORE_LENGTH_MILES,LAKE_CENTER_LAT_DD5,LAKE_CENTER_LONG_DD5,SENTINEL_ID,BORDER_ID\n2379,Gull Lake,,11030500,Cass,9947.07,,80,30,38.9,46.40827,-94.35608,,\n").unwrap();
//!
//! let counties = db.query_counties().unwrap();
//! let gull = db.query_lake_by_id("2379").unwrap();
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! Catch summaries (per-species average CPUE and total catch) are derived
//! on-the-fly via SQL `GROUP BY species_code` against the flattened
//! `fish_catch` table; `AVG` skips NULL CPUE values, so surveys without a
//! measured CPUE never drag an average toward zero.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the loaded lake and fish survey data.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with the static data files.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_species(r#"{"WAE": {"name": "Walleye", "scientific_name": "Sander vitreus"}}"#)
            .unwrap();
        let species = db2.query_species_table().unwrap();
        assert_eq!(species.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let lakes = db.query_lakes().unwrap();
        assert!(lakes.is_empty(), "New database should have no lakes");
    }
}
