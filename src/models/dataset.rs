use crate::error::{ProcessingError, Result};
use crate::models::Value;

/// Column names plus rows of cells aligned with them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut dataset = Self::new(columns);
        dataset.rows.reserve(rows.len());
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Append a row, which must have one cell per column.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ProcessingError::Parse(format!(
                "Row {} has {} fields, expected {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `row` in column `name`.
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        let index = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// All cells of column `name`, top to bottom.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn head(&self, count: usize) -> &[Vec<Value>] {
        &self.rows[..count.min(self.rows.len())]
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>) {
        (self.columns, self.rows)
    }
}
