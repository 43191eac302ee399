//! Dataset loading functionality

use super::song::{RawSongRow, REQUIRED_COLUMNS};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file {0} not found")]
    NotFound(PathBuf),

    #[error("Could not read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// The rows of a song dataset, in file order, before any cleaning.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub source: Option<PathBuf>,
    pub rows: Vec<RawSongRow>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<RawSongRow>) -> Dataset {
        Dataset { source: None, rows }
    }

    /// Parses CSV text with a header row. Header names are matched after
    /// trimming, extra columns are ignored and short rows leave their
    /// trailing cells empty.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let rows = csv_reader
            .deserialize::<RawSongRow>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset::from_rows(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound(path.to_path_buf())
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut dataset = Dataset::from_reader(std::io::BufReader::new(file))?;
    dataset.source = Some(path.to_path_buf());
    info!("Loaded {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Same as [`load_dataset`], but a failure only logs a warning and yields
/// no dataset, so callers can keep running in "unavailable" mode.
pub fn try_load_dataset<P: AsRef<Path>>(path: P) -> Option<Dataset> {
    match load_dataset(path.as_ref()) {
        Ok(dataset) => Some(dataset),
        Err(err) => {
            warn!("{}. Running without a dataset.", err);
            None
        }
    }
}
