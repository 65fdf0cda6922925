use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{MenuError, Result};
use crate::models::Dish;

/// What to do with a catalog row that cannot be costed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole load on the first malformed row.
    #[default]
    Reject,
    /// Drop malformed rows and report them.
    Skip,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON arrays; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Csv,
        }
    }
}

/// A row dropped under `RowPolicy::Skip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based record index in the source file, header excluded.
    pub record: usize,
    pub name: String,
    pub reason: String,
}

/// Result of loading a catalog.
#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRow>,
}

/// Load and check a dish catalog.
///
/// Every row gets the same checks the annotator applies, so a loaded catalog never fails costing.
pub fn load_catalog<P: AsRef<Path>>(path: P, policy: RowPolicy) -> Result<CatalogReport> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path);
    debug!(path = %path.display(), ?format, ?policy, "loading catalog");

    let records = match format {
        CatalogFormat::Csv => read_csv(path)?,
        CatalogFormat::Json => read_json(path)?,
    };

    let report = apply_policy(records, policy)?;
    info!(
        dishes = report.catalog.len(),
        skipped = report.skipped.len(),
        "catalog loaded"
    );
    Ok(report)
}

/// Parse CSV records. A record that does not deserialize is reported as malformed, not fatal.
fn read_csv(path: &Path) -> Result<Vec<Result<Dish>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    Ok(reader
        .deserialize::<Dish>()
        .enumerate()
        .map(|(record, parsed)| {
            parsed.map_err(|e| MenuError::malformed(record, "<unparsed>", e.to_string()))
        })
        .collect())
}

/// Parse a JSON array record by record, so a bad record is reported like a bad CSV row.
fn read_json(path: &Path) -> Result<Vec<Result<Dish>>> {
    let content = fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(record, value)| {
            let name = value
                .get("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<unparsed>")
                .to_string();
            serde_json::from_value::<Dish>(value)
                .map_err(|e| MenuError::malformed(record, &name, e.to_string()))
        })
        .collect())
}

fn apply_policy(records: Vec<Result<Dish>>, policy: RowPolicy) -> Result<CatalogReport> {
    let mut dishes = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (record, parsed) in records.into_iter().enumerate() {
        let checked = parsed.and_then(|dish| dish.validate(record).map(|_| dish));
        match (checked, policy) {
            (Ok(dish), _) => dishes.push(dish),
            (Err(e), RowPolicy::Reject) => return Err(e),
            (Err(MenuError::MalformedCatalogRow { row, name, reason }), RowPolicy::Skip) => {
                warn!(record = row, dish = %name, %reason, "skipping malformed catalog row");
                skipped.push(SkippedRow {
                    record: row,
                    name,
                    reason,
                });
            }
            (Err(e), RowPolicy::Skip) => return Err(e),
        }
    }

    Ok(CatalogReport {
        catalog: Catalog::new(dishes),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const HEADER: &str = "name,course,diet,Price,No Of Peoples Can Eat,Images\n";

    fn csv_file(rows: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(rows.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = csv_file(
            "Paneer Tikka,Starter,Vegetarian,5,2,https://img/p.jpg\n\
             Dal Makhani,Main Course,Vegetarian,20,4,\n",
        );

        let report = load_catalog(file.path(), RowPolicy::Reject).unwrap();
        assert_eq!(report.catalog.len(), 2);
        assert!(report.skipped.is_empty());

        let dal = &report.catalog.dishes()[1];
        assert_eq!(dal.name, "Dal Makhani");
        assert_eq!(dal.serving_capacity, 4);
        assert_eq!(dal.image(), None);
    }

    #[test]
    fn test_reject_policy_fails_on_zero_capacity() {
        let file = csv_file(
            "Paneer Tikka,Starter,Vegetarian,5,2,\n\
             Broken,Starter,Vegetarian,5,0,\n",
        );

        match load_catalog(file.path(), RowPolicy::Reject) {
            Err(MenuError::MalformedCatalogRow { row, name, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(name, "Broken");
            }
            other => panic!("expected MalformedCatalogRow, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_policy_reports_rows() {
        let file = csv_file(
            "Broken,Starter,Vegetarian,5,0,\n\
             Paneer Tikka,Starter,Vegetarian,5,2,\n\
             Unpriced,Starter,Vegetarian,abc,2,\n\
             Refund,Dessert,Vegetarian,-3,2,\n",
        );

        let report = load_catalog(file.path(), RowPolicy::Skip).unwrap();
        assert_eq!(report.catalog.len(), 1);
        assert_eq!(report.catalog.dishes()[0].name, "Paneer Tikka");

        let records: Vec<usize> = report.skipped.iter().map(|s| s.record).collect();
        assert_eq!(records, vec![0, 2, 3]);
        assert_eq!(report.skipped[0].name, "Broken");
    }

    #[test]
    fn test_load_json() {
        let json = r#"[
            {"name": "Kheer", "course": "Dessert", "diet": "Vegetarian", "Price": 8, "No Of Peoples Can Eat": 2}
        ]"#;
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let report = load_catalog(file.path(), RowPolicy::Reject).unwrap();
        assert_eq!(report.catalog.len(), 1);
        assert!(report.catalog.dishes()[0].is_dessert());
    }

    #[test]
    fn test_json_records_follow_row_policy() {
        let json = r#"[
            {"name": "Kheer", "course": "Dessert", "diet": "Vegetarian", "Price": 8, "No Of Peoples Can Eat": 2},
            {"name": "Halwa", "course": "Dessert", "diet": "Vegetarian", "Price": "cheap", "No Of Peoples Can Eat": 2},
            {"name": "Barfi", "course": "Dessert", "diet": "Vegetarian", "Price": 6, "No Of Peoples Can Eat": 0}
        ]"#;
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        match load_catalog(file.path(), RowPolicy::Reject) {
            Err(MenuError::MalformedCatalogRow { row, name, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(name, "Halwa");
            }
            other => panic!("expected MalformedCatalogRow, got {:?}", other),
        }

        let report = load_catalog(file.path(), RowPolicy::Skip).unwrap();
        assert_eq!(report.catalog.len(), 1);
        let skipped: Vec<(usize, &str)> = report
            .skipped
            .iter()
            .map(|s| (s.record, s.name.as_str()))
            .collect();
        assert_eq!(skipped, vec![(1, "Halwa"), (2, "Barfi")]);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("food.JSON")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("food.csv")), CatalogFormat::Csv);
        assert_eq!(CatalogFormat::from_path(Path::new("food")), CatalogFormat::Csv);
    }
}
