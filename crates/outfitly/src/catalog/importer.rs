use std::io::Read;
use std::path::Path;

use tracing::info;

use super::parser::{self, CatalogRecord};
use crate::domain::{Gender, OutfitDraft, UnknownVariant};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::InvalidRow { line, reason } => {
                write!(f, "catalog row on line {} rejected: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads outfit drafts from a CSV export so hosts can replace the built-in seed.
///
/// Expected header: `title,description,items,gender,min_temp,max_temp,rain_compatible,wind_compatible`.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<OutfitDraft>, CatalogImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let drafts = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            outfits = drafts.len(),
            "imported outfit catalog"
        );
        Ok(drafts)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<OutfitDraft>, CatalogImportError> {
        parser::parse_records(reader)?
            .into_iter()
            .map(validate)
            .collect()
    }
}

fn validate(record: CatalogRecord) -> Result<OutfitDraft, CatalogImportError> {
    let line = record.line;
    let reject = |reason: String| CatalogImportError::InvalidRow { line, reason };

    if record.title.is_empty() {
        return Err(reject("title is empty".to_string()));
    }
    let gender: Gender = record
        .gender
        .parse()
        .map_err(|err: UnknownVariant| reject(err.to_string()))?;
    if record.min_temp > record.max_temp {
        return Err(reject(format!(
            "min_temp {} is above max_temp {}",
            record.min_temp, record.max_temp
        )));
    }

    Ok(OutfitDraft {
        title: record.title,
        description: record.description,
        items: record.items,
        gender,
        min_temp: record.min_temp,
        max_temp: record.max_temp,
        rain_compatible: record.rain_compatible,
        wind_compatible: record.wind_compatible,
    })
}
