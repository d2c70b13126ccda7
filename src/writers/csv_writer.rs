use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, Value};
use crate::utils::constants::{DEFAULT_DELIMITER, LINE_TERMINATOR};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;
use tracing::info;

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Write the dataset to `path`, replacing any existing file
    pub fn write(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let bytes = self
            .to_bytes(dataset)
            .map_err(|e| ProcessingError::write(path, e.into()))?;

        std::fs::write(path, bytes).map_err(|e| ProcessingError::write(path, e))?;

        info!("Wrote {} rows to {}", dataset.len(), path.display());
        Ok(())
    }

    /// Serialise header and rows in memory; nothing touches disk until this succeeds.
    pub fn to_bytes(&self, dataset: &Dataset) -> csv::Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(LINE_TERMINATOR))
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer.write_record(dataset.columns())?;
        for row in dataset.rows() {
            writer.write_record(row.iter().map(Value::as_str))?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn dataset() -> Dataset {
        Dataset::from_rows(
            vec!["id".to_string(), "birdName".to_string(), "note".to_string()],
            vec![
                vec![Value::parse("1"), Value::text("Pernis apivorus"), Value::Null],
                vec![
                    Value::parse("2.50"),
                    Value::text("Buzzard, European"),
                    Value::text("line\nbreak \"quoted\""),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_to_bytes_quotes_only_when_needed() {
        let bytes = CsvWriter::new().to_bytes(&dataset()).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "id,birdName,note\n\
             1,Pernis apivorus,\n\
             2.50,\"Buzzard, European\",\"line\nbreak \"\"quoted\"\"\"\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("filtered_file.csv");
        std::fs::write(&path, "stale content that is longer than the new file\n".repeat(10))?;

        CsvWriter::new().write(&dataset(), &path)?;

        let written = std::fs::read_to_string(&path)?;
        assert!(written.starts_with("id,birdName,note\n"));
        assert!(!written.contains("stale"));
        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("no/such/dir/out.csv");

        let err = CsvWriter::new().write(&dataset(), &path).unwrap_err();

        assert!(matches!(err, ProcessingError::Write { .. }));
        assert_eq!(err.stage(), "save");
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_empty_dataset_writes_header() {
        let empty = Dataset::new(vec!["a".to_string(), "b".to_string()]);
        let bytes = CsvWriter::new().to_bytes(&empty).unwrap();
        assert_eq!(bytes, b"a,b\n");
    }
}
