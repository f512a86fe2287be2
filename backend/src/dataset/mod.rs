//! Nutrition dataset loading
//!
//! The food table is parsed from CSV once at startup and is read-only
//! afterwards. Rows that cannot be parsed are skipped and counted. Loading
//! fails on an unreadable file, a missing column, or a table in which no
//! row carries a positive energy value.

use crate::config::DatasetConfig;
use chrono::{DateTime, Utc};
use maternal_diet_shared::validation::parse_finite;
use maternal_diet_shared::FoodRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that prevent the dataset from being loaded
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read dataset header: {0}")]
    Header(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Dataset {0} contains no usable rows")]
    NoUsableRows(String),
}

/// The in-memory food table
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    records: Vec<FoodRecord>,
    skipped_rows: usize,
    loaded_at: DateTime<Utc>,
}

impl FoodCatalog {
    /// Build a catalog from already-parsed records
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self {
            records,
            skipped_rows: 0,
            loaded_at: Utc::now(),
        }
    }

    /// A catalog with no records, which reports as not ready
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    /// Load the configured dataset, failing if nothing usable was read
    pub fn load(config: &DatasetConfig) -> Result<Self, DataLoadError> {
        let catalog = Self::from_path(
            &config.path,
            &config.description_column,
            &config.energy_column,
        )?;

        if !catalog.is_ready() {
            return Err(DataLoadError::NoUsableRows(config.path.clone()));
        }

        info!(
            path = %config.path,
            records = catalog.len(),
            eligible = catalog.eligible_len(),
            skipped = catalog.skipped_rows(),
            "Food dataset loaded"
        );
        if catalog.skipped_rows() > 0 {
            warn!(skipped = catalog.skipped_rows(), "Some dataset rows could not be parsed");
        }

        Ok(catalog)
    }

    /// Parse a CSV file from disk
    pub fn from_path(
        path: impl AsRef<Path>,
        description_column: &str,
        energy_column: &str,
    ) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file, description_column, energy_column)
    }

    /// Parse CSV from any reader
    ///
    /// Columns are located by header name. A row is skipped when it cannot
    /// be decoded, its description is blank, or its energy value is absent
    /// or not a finite number. Non-positive energy values are kept.
    pub fn from_reader<R: Read>(
        reader: R,
        description_column: &str,
        energy_column: &str,
    ) -> Result<Self, DataLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };
        let description_idx = column(description_column)?;
        let energy_idx = column(energy_column)?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for result in rdr.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    debug!(error = %e, "Skipping undecodable dataset row");
                    skipped_rows += 1;
                    continue;
                }
            };

            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let description = row.get(description_idx).filter(|d| !d.is_empty());
            let calories = row.get(energy_idx).and_then(parse_finite);

            match (description, calories) {
                (Some(description), Some(calories)) => {
                    records.push(FoodRecord::new(description, calories));
                }
                _ => {
                    debug!(line, "Skipping dataset row with missing or invalid fields");
                    skipped_rows += 1;
                }
            }
        }

        Ok(Self {
            records,
            skipped_rows,
            loaded_at: Utc::now(),
        })
    }

    /// Records in file order
    #[inline]
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a positive energy value, the only ones ever recommended
    pub fn eligible_len(&self) -> usize {
        self.records.iter().filter(|r| r.calories > 0.0).count()
    }

    /// Whether queries may be served against this catalog
    pub fn is_ready(&self) -> bool {
        self.eligible_len() > 0
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
