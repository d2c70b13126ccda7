use crate::error::Result;
use crate::models::{Dataset, Value};
use crate::utils::constants::DEFAULT_PREVIEW_ROWS;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use std::sync::Arc;

/// Bordered table of the first rows of a dataset, every column shown.
pub struct TablePreview {
    rows: usize,
}

impl TablePreview {
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    pub fn with_rows(rows: usize) -> Self {
        Self { rows }
    }

    pub fn is_enabled(&self) -> bool {
        self.rows > 0
    }

    pub fn render(&self, dataset: &Dataset) -> Result<String> {
        let head = dataset.head(self.rows);

        let fields: Vec<Field> = dataset
            .columns()
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();

        let arrays: Vec<ArrayRef> = (0..dataset.column_count())
            .map(|i| {
                let cells: StringArray = head
                    .iter()
                    .map(|row| match &row[i] {
                        Value::Null => None,
                        value => Some(value.as_str()),
                    })
                    .collect();
                Arc::new(cells) as ArrayRef
            })
            .collect();

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        let table = pretty_format_batches(&[batch])?;

        Ok(format!(
            "{}\n[{} of {} rows x {} columns]",
            table,
            head.len(),
            dataset.len(),
            dataset.column_count()
        ))
    }

    /// Print the preview to stdout; a zero-row preview prints nothing
    pub fn print(&self, title: &str, dataset: &Dataset) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        println!("\n{}:", title);
        println!("{}", self.render(dataset)?);
        Ok(())
    }
}

impl Default for TablePreview {
    fn default() -> Self {
        Self::new()
    }
}
