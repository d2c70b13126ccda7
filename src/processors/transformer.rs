use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, TrackSchema, Value};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Applies the rename, projection and completeness stages of a [`TrackSchema`].
pub struct Transformer {
    schema: TrackSchema,
}

impl Transformer {
    pub fn new() -> Self {
        Self {
            schema: TrackSchema::MOVEBANK,
        }
    }

    pub fn with_schema(schema: TrackSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TrackSchema {
        &self.schema
    }

    /// Rename, project and filter with the schema's tables
    pub fn transform(&self, dataset: Dataset) -> Result<Dataset> {
        let renamed = self.rename(dataset, self.schema.rename_map)?;
        let projected = self.project(renamed, self.schema.output_columns)?;
        self.filter_complete(projected, self.schema.required_columns)
    }

    /// Relabel columns found in `mapping`; other columns keep their name.
    ///
    /// Mapping entries whose source column is absent are skipped. Fails if a
    /// relabelled column ends up sharing its name with any other column.
    /// Repeated names among untouched columns are left for projection to drop.
    pub fn rename(&self, dataset: Dataset, mapping: &[(&str, &str)]) -> Result<Dataset> {
        for (from, _) in mapping {
            if !dataset.has_column(from) {
                debug!("Column '{}' not present, rename skipped", from);
            }
        }

        let (columns, rows) = dataset.into_parts();
        let (renamed, mapped): (Vec<String>, Vec<bool>) = columns
            .into_iter()
            .map(|column| {
                match mapping.iter().find(|(from, _)| *from == column) {
                    Some((_, to)) => (to.to_string(), true),
                    None => (column, false),
                }
            })
            .unzip();

        for (i, column) in renamed.iter().enumerate() {
            if !mapped[i] {
                continue;
            }
            let clashes = renamed
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other == column);
            if clashes {
                return Err(ProcessingError::Schema(format!(
                    "Renaming produces duplicate column '{}'",
                    column
                )));
            }
        }

        Dataset::from_rows(renamed, rows)
    }

    /// Keep exactly `columns`, in that order.
    ///
    /// A missing required column is an error. A missing optional column is
    /// filled with nulls.
    pub fn project(&self, dataset: Dataset, columns: &[&str]) -> Result<Dataset> {
        let mut seen = HashSet::with_capacity(columns.len());
        let mut indices = Vec::with_capacity(columns.len());

        for &name in columns {
            if !seen.insert(name) {
                return Err(ProcessingError::Schema(format!(
                    "Column '{}' requested twice",
                    name
                )));
            }

            match dataset.column_index(name) {
                Some(index) => indices.push(Some(index)),
                None if self.schema.is_required(name) => {
                    return Err(ProcessingError::Schema(self.missing_column_message(name)));
                }
                None => {
                    warn!("{}, filling with nulls", self.missing_column_message(name));
                    indices.push(None);
                }
            }
        }

        let (_, rows) = dataset.into_parts();
        let projected = rows
            .into_iter()
            .map(|mut row| {
                indices
                    .iter()
                    .map(|index| index.map_or(Value::Null, |i| std::mem::take(&mut row[i])))
                    .collect()
            })
            .collect();

        Dataset::from_rows(columns.iter().map(|c| c.to_string()).collect(), projected)
    }

    /// Keep rows whose `required` columns all hold a value, preserving order
    pub fn filter_complete(&self, dataset: Dataset, required: &[&str]) -> Result<Dataset> {
        let indices = required
            .iter()
            .map(|&name| {
                dataset
                    .column_index(name)
                    .ok_or_else(|| ProcessingError::Schema(self.missing_column_message(name)))
            })
            .collect::<Result<Vec<_>>>()?;

        let total = dataset.len();
        let (columns, rows) = dataset.into_parts();
        let kept: Vec<Vec<Value>> = rows
            .into_iter()
            .filter(|row| indices.iter().all(|&i| !row[i].is_null()))
            .collect();

        info!(
            "Kept {} of {} rows, dropped {} missing required values",
            kept.len(),
            total,
            total - kept.len()
        );

        Dataset::from_rows(columns, kept)
    }

    fn missing_column_message(&self, name: &str) -> String {
        match self.schema.source_name(name) {
            Some(source) => format!(
                "Column '{}' not found (expected export column '{}')",
                name, source
            ),
            None => format!("Column '{}' not found", name),
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}
