//! Data loading functions for populating the in-memory SQLite database.
//!
//! Parsing is delegated to `mnl-fisheries`; the loaders flatten the parsed
//! structures into rows. All loaders use upsert (or delete-and-insert)
//! semantics so a reload replaces rather than duplicates, and none of them
//! retries: a source that fails to load stays empty for the session.
//!
//! # File formats
//!
//! - **Lakes** (CSV, has headers): the DNR lake-list export, see
//!   [`mnl_fisheries::lake::Lake::parse_lake_csv`]
//! - **Species** (JSON): `code → {name, scientific_name}`
//! - **Fish catch / fish length** (JSON): `lake id → species code → [records]`

use crate::Database;
use mnl_fisheries::lake::Lake;
use mnl_fisheries::species;
use mnl_fisheries::survey;
use rusqlite::params;

impl Database {
    /// Load lake metadata from the lake-list CSV export.
    ///
    /// Insertion order is preserved in `rowid` and serves as the stable
    /// tie-break for search ranking.
    pub fn load_lakes(&self, csv_data: &str) -> anyhow::Result<()> {
        let lakes = Lake::parse_lake_csv(csv_data)?;
        let conn = self.conn.borrow();

        let mut count = 0u32;
        for lake in &lakes {
            conn.execute(
                "INSERT OR REPLACE INTO lakes
                 (lake_id, name, alternate_name, dow_number, county,
                  area_acres, littoral_area_acres, max_depth_ft, mean_depth_ft,
                  shore_length_mi, latitude, longitude, category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    lake.lake_id,
                    lake.name,
                    lake.alternate_name,
                    lake.dow_number,
                    lake.county,
                    lake.area_acres,
                    lake.littoral_area_acres,
                    lake.max_depth_ft,
                    lake.mean_depth_ft,
                    lake.shore_length_mi,
                    lake.latitude,
                    lake.longitude,
                    lake.category.as_str(),
                ],
            )?;
            count += 1;
        }
        log::info!("[MNL] loader: Loaded {} lakes", count);
        Ok(())
    }

    /// Load the fish species reference table from JSON.
    pub fn load_species(&self, json_data: &str) -> anyhow::Result<()> {
        let table = species::parse_species_json(json_data)?;
        let conn = self.conn.borrow();

        let mut count = 0u32;
        for (code, entry) in &table {
            conn.execute(
                "INSERT OR REPLACE INTO fish_species (code, name, scientific_name)
                 VALUES (?1, ?2, ?3)",
                params![code, entry.name, entry.scientific_name],
            )?;
            count += 1;
        }
        log::info!("[MNL] loader: Loaded {} fish species", count);
        Ok(())
    }

    /// Load the bulk fish-catch table from JSON, flattening it to one row
    /// per record. A reload replaces the whole table.
    pub fn load_fish_catch(&self, json_data: &str) -> anyhow::Result<()> {
        let table = survey::parse_catch_json(json_data)?;
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM fish_catch", [])?;

        let mut count = 0u32;
        for (lake_id, by_species) in &table {
            for (species_code, records) in by_species {
                for record in records {
                    conn.execute(
                        "INSERT INTO fish_catch
                         (lake_id, species_code, survey_date, gear_type, cpue, total_catch)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        params![
                            lake_id,
                            species_code,
                            record.survey_date,
                            record.gear_type,
                            record.cpue,
                            record.total_catch,
                        ],
                    )?;
                    count += 1;
                }
            }
        }
        log::info!(
            "[MNL] loader: Loaded {} catch records for {} lakes",
            count,
            table.len()
        );
        Ok(())
    }

    /// Load the bulk fish-length table from JSON. The length distribution
    /// of each record is stored as a JSON object string and decoded again
    /// at query time.
    pub fn load_fish_length(&self, json_data: &str) -> anyhow::Result<()> {
        let table = survey::parse_length_json(json_data)?;
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM fish_length", [])?;

        let mut count = 0u32;
        for (lake_id, by_species) in &table {
            for (species_code, records) in by_species {
                for record in records {
                    let distribution = serde_json::to_string(&record.length_distribution)?;
                    conn.execute(
                        "INSERT INTO fish_length
                         (lake_id, species_code, survey_date, length_distribution)
                         VALUES (?1, ?2, ?3, ?4)",
                        params![lake_id, species_code, record.survey_date, distribution],
                    )?;
                    count += 1;
                }
            }
        }
        log::info!(
            "[MNL] loader: Loaded {} length records for {} lakes",
            count,
            table.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const LAKES_CSV: &str = "\
FISHERIES_WATERBODY_ID,LAKE_NAME,ALT_LAKE_NAME,DOW_NBR_PRIMARY,COUNTY_NAME,LAKE_AREA_DOW_ACRES,LITTORAL_AREA_ACRES,MAX_DEPTH_FEET,MEAN_DEPTH_FEET,SHORE_LENGTH_MILES,LAKE_CENTER_LAT_DD5,LAKE_CENTER_LONG_DD5,SENTINEL_ID,BORDER_ID
2379,Gull Lake,,11030500,Cass,9947.07,3594.0,80.0,30.0,38.9,46.40827,-94.35608,,
2687,Rush Lake,Upper Rush,18018100,Chisago,1338.0,,79.0,,10.2,45.52623,-92.96551,7,
4000,Mille Lacs Lake,,48000200,Mille Lacs,128226.0,54000.0,42.0,20.5,76.3,46.25,-93.65,,
";

    const CATCH_JSON: &str = r#"{
        "2379": {
            "WAE": [
                {"survey_date": "2019-08-05", "cpue": 4.0, "total_catch": 96, "gear_type": "Standard gill nets"},
                {"survey_date": "2022-08-01", "cpue": null, "total_catch": 12, "gear_type": "Standard gill nets"}
            ]
        }
    }"#;

    const LENGTH_JSON: &str = r#"{
        "2379": {
            "WAE": [
                {"survey_date": "2019-08-05", "length_distribution": {"6-8": 4, "8-10": 17}}
            ]
        }
    }"#;

    #[test]
    fn load_lakes_from_csv() {
        let db = Database::new().unwrap();
        db.load_lakes(LAKES_CSV).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM lakes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let name: String = conn
            .query_row("SELECT name FROM lakes WHERE lake_id = '2379'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(name, "Gull Lake");

        let category: String = conn
            .query_row(
                "SELECT category FROM lakes WHERE lake_id = '2687'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(category, "sentinel");
    }

    #[test]
    fn load_lakes_replaces_on_conflict() {
        let db = Database::new().unwrap();
        db.load_lakes(LAKES_CSV).unwrap();
        db.load_lakes(LAKES_CSV).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM lakes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3, "Reloading must not duplicate rows");
    }

    #[test]
    fn load_fish_catch_keeps_null_cpue() {
        let db = Database::new().unwrap();
        db.load_fish_catch(CATCH_JSON).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM fish_catch", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let null_cpue: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM fish_catch WHERE cpue IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(null_cpue, 1, "Missing CPUE must be stored as NULL, not 0");
    }

    #[test]
    fn load_fish_length_round_trips_distribution() {
        let db = Database::new().unwrap();
        db.load_fish_length(LENGTH_JSON).unwrap();

        let conn = db.conn.borrow();
        let stored: String = conn
            .query_row(
                "SELECT length_distribution FROM fish_length WHERE lake_id = '2379'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let decoded: std::collections::BTreeMap<String, i64> =
            serde_json::from_str(&stored).unwrap();
        assert_eq!(decoded["8-10"], 17);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let db = Database::new().unwrap();
        assert!(db.load_fish_catch("not json").is_err());
        assert!(db.load_species("[]").is_err());
    }
}
