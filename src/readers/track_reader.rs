use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, Value};
use crate::utils::constants::DEFAULT_DELIMITER;
use csv::ReaderBuilder;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

pub struct TrackReader {
    delimiter: u8,
}

impl TrackReader {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a tracking export with a header row into memory
    pub fn read(&self, path: &Path) -> Result<Dataset> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessingError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ProcessingError::Io(e),
        })?;

        let dataset = self.read_str(&decode(&bytes))?;
        info!(
            "Read {} rows with {} columns from {}",
            dataset.len(),
            dataset.column_count(),
            path.display()
        );

        Ok(dataset)
    }

    /// Parse CSV text; rows are matched to the header by position
    pub fn read_str(&self, content: &str) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ProcessingError::Parse("missing or empty header row".to_string()));
        }

        let mut dataset = Dataset::new(headers.iter().map(str::to_string).collect());
        for result in reader.records() {
            let record = result?;
            dataset.push_row(record.iter().map(Value::parse).collect())?;
        }

        Ok(dataset)
    }
}

impl Default for TrackReader {
    fn default() -> Self {
        Self::new()
    }
}

/// UTF-8 with an optional BOM, falling back to Windows-1252 for spreadsheet exports.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Err(e) => {
            warn!("Input is not valid UTF-8 ({}), decoding as Windows-1252", e);
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text
        }
    }
}
