use crate::error::Result;
use crate::processors::{TrackSummary, Transformer};
use crate::readers::TrackReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, TablePreview};
use std::path::Path;
use tracing::info;

/// Load, preview, transform, preview and save one tracking export.
pub struct CleaningPipeline {
    reader: TrackReader,
    transformer: Transformer,
    writer: CsvWriter,
    preview: TablePreview,
    silent: bool,
}

impl CleaningPipeline {
    pub fn new() -> Self {
        Self {
            reader: TrackReader::new(),
            transformer: Transformer::new(),
            writer: CsvWriter::new(),
            preview: TablePreview::new(),
            silent: false,
        }
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview = TablePreview::with_rows(rows);
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Run every stage; the output file is only written once all earlier stages succeed
    pub fn run(&self, input: &Path, output: &Path) -> Result<TrackSummary> {
        let schema = self.transformer.schema();

        let progress = ProgressReporter::new_spinner(
            &format!("Reading {}...", input.display()),
            self.silent,
        );
        let dataset = self.reader.read(input)?;
        progress.finish_and_clear();

        self.preview.print("Input preview", &dataset)?;

        let mut summary = TrackSummary::new(dataset.len());
        let renamed = self.transformer.rename(dataset, schema.rename_map)?;
        let projected = self.transformer.project(renamed, schema.output_columns)?;
        summary.record_missing(&projected, schema.required_columns);
        let cleaned = self
            .transformer
            .filter_complete(projected, schema.required_columns)?;
        summary.record_output(&cleaned);

        self.preview.print("Cleaned preview", &cleaned)?;

        let progress = ProgressReporter::new_spinner(
            &format!("Writing {}...", output.display()),
            self.silent,
        );
        self.writer.write(&cleaned, output)?;
        progress.finish_with_message(&format!(
            "Wrote {} rows to {}",
            cleaned.len(),
            output.display()
        ));

        info!(
            "Cleaned {} -> {} ({} of {} rows kept)",
            input.display(),
            output.display(),
            summary.output_rows,
            summary.input_rows
        );

        Ok(summary)
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
