//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the lake and fish survey tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// **Lake tables:**
/// - `lakes` - Lake metadata keyed by FISHERIES_WATERBODY_ID
/// - `fish_species` - Species code reference table
///
/// **Survey tables:**
/// - `fish_catch` - Flattened catch records (one row per gear deployment
///   per species per survey); `cpue` is NULL when not measured so that
///   SQL `AVG` excludes it from means
/// - `fish_length` - Length distributions, stored as a JSON object per row
///
/// Insertion order (`rowid`) is the stable tie-break for search ranking.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS lakes (
        lake_id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        alternate_name TEXT,
        dow_number TEXT,
        county TEXT NOT NULL,
        area_acres REAL,
        littoral_area_acres REAL,
        max_depth_ft REAL,
        mean_depth_ft REAL,
        shore_length_mi REAL,
        latitude REAL,
        longitude REAL,
        category TEXT NOT NULL DEFAULT 'regular'
    );
    CREATE INDEX IF NOT EXISTS idx_lakes_county ON lakes(county COLLATE NOCASE);

    CREATE TABLE IF NOT EXISTS fish_species (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        scientific_name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS fish_catch (
        lake_id TEXT NOT NULL,
        species_code TEXT NOT NULL,
        survey_date TEXT,
        gear_type TEXT,
        cpue REAL,
        total_catch INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_catch_lake ON fish_catch(lake_id);

    CREATE TABLE IF NOT EXISTS fish_length (
        lake_id TEXT NOT NULL,
        species_code TEXT NOT NULL,
        survey_date TEXT,
        length_distribution TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_length_lake ON fish_length(lake_id);

    "#
}
