//! Typed query methods for retrieving lake and fish survey data.
//!
//! Lookups never fail on absent data: an unknown lake id yields `None` or
//! an empty vector, so callers render a placeholder instead of an error.
//! Name search fetches substring candidates with SQL and ranks them with
//! the canonical policy in [`mnl_fisheries::search`].

use crate::models::{CatchDetail, CatchSummary, LengthDetail};
use crate::Database;
use mnl_fisheries::lake::{Lake, LakeCategory};
use mnl_fisheries::search;
use mnl_fisheries::species::{FishSpecies, SpeciesTable};
use rusqlite::{params, Row};

/// Column list matching [`lake_from_row`].
const LAKE_COLUMNS: &str = "lake_id, name, alternate_name, dow_number, county, \
     area_acres, littoral_area_acres, max_depth_ft, mean_depth_ft, \
     shore_length_mi, latitude, longitude, category";

fn lake_from_row(row: &Row<'_>) -> rusqlite::Result<Lake> {
    let category: String = row.get(12)?;
    Ok(Lake {
        lake_id: row.get(0)?,
        name: row.get(1)?,
        alternate_name: row.get(2)?,
        dow_number: row.get(3)?,
        county: row.get(4)?,
        area_acres: row.get(5)?,
        littoral_area_acres: row.get(6)?,
        max_depth_ft: row.get(7)?,
        mean_depth_ft: row.get(8)?,
        shore_length_mi: row.get(9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        category: LakeCategory::from_label(&category),
    })
}

impl Database {
    // ───────────────────── Lake queries ─────────────────────

    /// All loaded lakes in insertion order.
    pub fn query_lakes(&self) -> anyhow::Result<Vec<Lake>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!("SELECT {LAKE_COLUMNS} FROM lakes ORDER BY rowid"))?;
        let rows = stmt
            .query_map([], lake_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Exact-match lookup by lake id; `None` when absent.
    pub fn query_lake_by_id(&self, lake_id: &str) -> anyhow::Result<Option<Lake>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare(&format!("SELECT {LAKE_COLUMNS} FROM lakes WHERE lake_id = ?1"))?;
        let mut rows = stmt.query_map(params![lake_id], lake_from_row)?;
        match rows.next() {
            Some(lake) => Ok(Some(lake?)),
            None => Ok(None),
        }
    }

    /// Distinct county names across loaded lakes, alphabetically sorted.
    pub fn query_counties(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT county FROM lakes WHERE county != '' ORDER BY county",
        )?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Lakes in the given county (case-insensitive exact match).
    /// `None` or an empty string returns all lakes.
    pub fn query_lakes_by_county(&self, county: Option<&str>) -> anyhow::Result<Vec<Lake>> {
        let county = match county {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => return self.query_lakes(),
        };
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {LAKE_COLUMNS} FROM lakes WHERE county = ?1 COLLATE NOCASE ORDER BY rowid"
        ))?;
        let rows = stmt
            .query_map(params![county], lake_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Name search per the canonical ranking policy.
    ///
    /// SQL narrows to substring candidates over name and alternate name;
    /// tiering and ordering happen in [`mnl_fisheries::search`]. An empty
    /// query returns an empty result.
    pub fn search_lakes_by_name(&self, query: &str) -> anyhow::Result<Vec<Lake>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Ok(Vec::new());
        }
        let candidates = {
            let conn = self.conn.borrow();
            let mut stmt = conn.prepare(&format!(
                "SELECT {LAKE_COLUMNS} FROM lakes
                 WHERE instr(lower(name), ?1) > 0
                    OR instr(lower(coalesce(alternate_name, '')), ?1) > 0
                 ORDER BY rowid"
            ))?;
            let rows = stmt.query_map(params![q], lake_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };
        let ranked = search::search_by_name(&candidates, query)
            .into_iter()
            .cloned()
            .collect();
        Ok(ranked)
    }

    // ───────────────────── Species queries ─────────────────────

    /// The full species reference table.
    pub fn query_species_table(&self) -> anyhow::Result<SpeciesTable> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT code, name, scientific_name FROM fish_species")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                FishSpecies {
                    name: row.get(1)?,
                    scientific_name: row.get(2)?,
                },
            ))
        })?;
        let mut table = SpeciesTable::new();
        for row in rows {
            let (code, species) = row?;
            table.insert(code, species);
        }
        Ok(table)
    }

    // ───────────────────── Survey queries ─────────────────────

    /// All catch records for a lake, ordered by species then date.
    /// Unknown lakes yield an empty vector.
    pub fn query_catch_records(&self, lake_id: &str) -> anyhow::Result<Vec<CatchDetail>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT species_code, survey_date, gear_type, cpue, total_catch
             FROM fish_catch
             WHERE lake_id = ?1
             ORDER BY species_code, survey_date",
        )?;
        let rows = stmt
            .query_map(params![lake_id], |row| {
                Ok(CatchDetail {
                    species_code: row.get(0)?,
                    survey_date: row.get(1)?,
                    gear_type: row.get(2)?,
                    cpue: row.get(3)?,
                    total_catch: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[MNL] query: query_catch_records({}) returned {} records",
            lake_id,
            rows.len()
        );
        Ok(rows)
    }

    /// Per-species catch summaries for a lake.
    ///
    /// `AVG(cpue)` skips NULL values, so a record with no measured CPUE is
    /// excluded from the mean instead of counting as zero.
    pub fn query_catch_summaries(&self, lake_id: &str) -> anyhow::Result<Vec<CatchSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT species_code, COUNT(*), AVG(cpue), COALESCE(SUM(total_catch), 0)
             FROM fish_catch
             WHERE lake_id = ?1
             GROUP BY species_code
             ORDER BY species_code",
        )?;
        let rows = stmt
            .query_map(params![lake_id], |row| {
                Ok(CatchSummary {
                    species_code: row.get(0)?,
                    record_count: row.get(1)?,
                    avg_cpue: row.get(2)?,
                    total_catch: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// All length-distribution records for a lake.
    /// Unknown lakes yield an empty vector.
    pub fn query_length_records(&self, lake_id: &str) -> anyhow::Result<Vec<LengthDetail>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT species_code, survey_date, length_distribution
             FROM fish_length
             WHERE lake_id = ?1
             ORDER BY species_code, survey_date",
        )?;
        let raw_rows = stmt
            .query_map(params![lake_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut results = Vec::with_capacity(raw_rows.len());
        for (species_code, survey_date, distribution) in raw_rows {
            let length_distribution = serde_json::from_str(&distribution)?;
            results.push(LengthDetail {
                species_code,
                survey_date,
                length_distribution,
            });
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const LAKES_CSV: &str = "\
FISHERIES_WATERBODY_ID,LAKE_NAME,ALT_LAKE_NAME,DOW_NBR_PRIMARY,COUNTY_NAME,LAKE_AREA_DOW_ACRES,LITTORAL_AREA_ACRES,MAX_DEPTH_FEET,MEAN_DEPTH_FEET,SHORE_LENGTH_MILES,LAKE_CENTER_LAT_DD5,LAKE_CENTER_LONG_DD5,SENTINEL_ID,BORDER_ID
2379,Gull Lake,,11030500,Cass,9947.07,3594.0,80.0,30.0,38.9,46.40827,-94.35608,,
2687,Rush Lake,,18018100,Cass,1338.0,,79.0,,10.2,45.52623,-92.96551,,
4000,Mille Lacs Lake,,48000200,Mille Lacs,128226.0,54000.0,42.0,20.5,76.3,46.25,-93.65,,
";

    const CATCH_JSON: &str = r#"{
        "2379": {
            "WAE": [
                {"survey_date": "2019-08-05", "cpue": 4.0, "total_catch": 96, "gear_type": "Standard gill nets"},
                {"survey_date": "2022-08-01", "cpue": null, "total_catch": 12, "gear_type": "Standard gill nets"}
            ],
            "NOP": [
                {"survey_date": "2019-08-05", "cpue": 1.5, "total_catch": 36, "gear_type": "Standard gill nets"}
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

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_lakes(LAKES_CSV).unwrap();
        db.load_fish_catch(CATCH_JSON).unwrap();
        db.load_fish_length(LENGTH_JSON).unwrap();
        db
    }

    #[test]
    fn query_lake_by_id_round_trips_every_lake() {
        let db = loaded_db();
        for lake in db.query_lakes().unwrap() {
            let found = db
                .query_lake_by_id(&lake.lake_id)
                .unwrap()
                .expect("loaded lake must be found by id");
            assert_eq!(found, lake);
        }
    }

    #[test]
    fn query_lake_by_id_miss_is_none() {
        let db = loaded_db();
        assert!(db.query_lake_by_id("99999").unwrap().is_none());
    }

    #[test]
    fn counties_are_sorted_and_distinct() {
        let db = loaded_db();
        let counties = db.query_counties().unwrap();
        assert_eq!(counties, vec!["Cass".to_string(), "Mille Lacs".to_string()]);
    }

    #[test]
    fn lakes_by_county_filters_case_insensitively() {
        let db = loaded_db();
        let cass = db.query_lakes_by_county(Some("cass")).unwrap();
        assert_eq!(cass.len(), 2);
        assert!(cass.iter().all(|l| l.county == "Cass"));

        let all = db.query_lakes_by_county(None).unwrap();
        assert_eq!(all.len(), 3);
        let all_again = db.query_lakes_by_county(Some("")).unwrap();
        assert_eq!(all_again.len(), 3);
    }

    #[test]
    fn search_empty_query_is_empty() {
        let db = loaded_db();
        assert!(db.search_lakes_by_name("").unwrap().is_empty());
    }

    #[test]
    fn search_substring_fallback_orders_by_name_length() {
        let db = loaded_db();
        let names: Vec<String> = db
            .search_lakes_by_name("lake")
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Gull Lake", "Rush Lake", "Mille Lacs Lake"]);
    }

    #[test]
    fn search_exact_match_first() {
        let db = loaded_db();
        let results = db.search_lakes_by_name("gull lake").unwrap();
        assert_eq!(results[0].lake_id, "2379");
    }

    #[test]
    fn avg_cpue_excludes_missing_values() {
        let db = loaded_db();
        let summaries = db.query_catch_summaries("2379").unwrap();
        let wae = summaries
            .iter()
            .find(|s| s.species_code == "WAE")
            .expect("WAE summary");
        assert_eq!(wae.record_count, 2);
        assert_eq!(wae.avg_cpue, Some(4.0), "missing CPUE must not count as zero");
        assert_eq!(wae.total_catch, 108);
    }

    #[test]
    fn unknown_lake_has_empty_survey_data() {
        let db = loaded_db();
        assert!(db.query_catch_records("99999").unwrap().is_empty());
        assert!(db.query_catch_summaries("99999").unwrap().is_empty());
        assert!(db.query_length_records("99999").unwrap().is_empty());
    }

    #[test]
    fn length_records_decode_distribution() {
        let db = loaded_db();
        let records = db.query_length_records("2379").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].length_distribution["6-8"], 4);
    }
}
