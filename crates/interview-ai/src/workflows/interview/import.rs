use super::domain::QuestionResult;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ResultsImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for ResultsImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultsImportError::Io(err) => write!(f, "failed to read results file: {}", err),
            ResultsImportError::Json(err) => write!(f, "invalid results JSON: {}", err),
        }
    }
}

impl std::error::Error for ResultsImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResultsImportError::Io(err) => Some(err),
            ResultsImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ResultsImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ResultsImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads question results written by the analysis pipeline as a JSON array.
pub struct ResultsImporter;

impl ResultsImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionResult>, ResultsImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<QuestionResult>, ResultsImportError> {
        let results = serde_json::from_reader(reader)?;
        Ok(results)
    }
}
