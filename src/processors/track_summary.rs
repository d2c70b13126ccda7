use crate::error::{ProcessingError, Result};
use crate::models::schema::{BIRD_ID, BIRD_NAME, TIMESTAMP};
use crate::models::{Dataset, Value};
use crate::utils::parse_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_rows: usize,
    /// Input rows with no value in each required column.
    pub missing_by_column: BTreeMap<String, usize>,
    pub unparsed_timestamps: usize,
    pub birds: BTreeMap<String, BirdSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BirdSummary {
    pub bird_name: Option<String>,
    pub fixes: usize,
    pub first_fix: Option<NaiveDateTime>,
    pub last_fix: Option<NaiveDateTime>,
}

impl TrackSummary {
    pub fn new(input_rows: usize) -> Self {
        Self {
            input_rows,
            ..Self::default()
        }
    }

    /// Count nulls per required column before rows are dropped
    pub fn record_missing(&mut self, dataset: &Dataset, required: &[&str]) {
        for &column in required {
            let missing = dataset
                .column_values(column)
                .map_or(dataset.len(), |values| {
                    values.filter(|v| v.is_null()).count()
                });
            self.missing_by_column.insert(column.to_string(), missing);
        }
    }

    /// Tally the cleaned fixes per bird
    pub fn record_output(&mut self, cleaned: &Dataset) {
        self.output_rows = cleaned.len();
        self.dropped_rows = self.input_rows.saturating_sub(cleaned.len());

        for row in 0..cleaned.len() {
            let Some(bird_id) = cleaned.value(row, BIRD_ID) else {
                continue;
            };

            let bird = self.birds.entry(bird_id.as_str().to_string()).or_default();
            bird.fixes += 1;

            if bird.bird_name.is_none() {
                bird.bird_name = cleaned
                    .value(row, BIRD_NAME)
                    .filter(|v| !v.is_null())
                    .map(|v| v.as_str().to_string());
            }

            match cleaned
                .value(row, TIMESTAMP)
                .map(Value::as_str)
                .and_then(parse_timestamp)
            {
                Some(time) => {
                    bird.first_fix = Some(bird.first_fix.map_or(time, |t| t.min(time)));
                    bird.last_fix = Some(bird.last_fix.map_or(time, |t| t.max(time)));
                }
                None => self.unparsed_timestamps += 1,
            }
        }
    }

    /// Generate a human-readable report
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Cleaning Report ===\n");
        summary.push_str(&format!("Input Rows: {}\n", self.input_rows));
        summary.push_str(&format!(
            "Kept Rows: {} ({:.1}%)\n",
            self.output_rows,
            percentage(self.output_rows, self.input_rows)
        ));
        summary.push_str(&format!(
            "Dropped Rows: {} ({:.1}%)\n",
            self.dropped_rows,
            percentage(self.dropped_rows, self.input_rows)
        ));

        if !self.missing_by_column.is_empty() {
            summary.push_str("\nMissing Required Values:\n");
            for (column, count) in &self.missing_by_column {
                summary.push_str(&format!("  {}: {}\n", column, count));
            }
        }

        if self.unparsed_timestamps > 0 {
            summary.push_str(&format!(
                "\nUnrecognised Timestamps: {}\n",
                self.unparsed_timestamps
            ));
        }

        summary.push_str(&format!("\nBirds: {}\n", self.birds.len()));
        for (bird_id, bird) in &self.birds {
            summary.push_str(&format!(
                "  {} ({}): {} fixes",
                bird_id,
                bird.bird_name.as_deref().unwrap_or("unknown"),
                bird.fixes
            ));
            if let (Some(first), Some(last)) = (bird.first_fix, bird.last_fix) {
                summary.push_str(&format!(", {} to {}", first, last));
            }
            summary.push('\n');
        }

        summary
    }

    /// Write the report as pretty JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| ProcessingError::write(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| ProcessingError::write(path, e))?;
        Ok(())
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::Transformer;
    use crate::readers::TrackReader;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const EXPORT: &str = "\
event-id,timestamp,location-long,location-lat,individual-local-identifier,individual-taxon-canonical-name
1,2019-08-14 12:00:00.000,25.1,61.2,B1,Pernis apivorus
2,2019-08-14 10:00:00.000,25.2,61.3,B1,Pernis apivorus
3,,25.3,,B1,Pernis apivorus
4,not a time,25.4,61.5,B2,
5,2019-08-15 00:00:00.000,,,,
";

    fn summarise() -> TrackSummary {
        let transformer = Transformer::new();
        let schema = *transformer.schema();
        let dataset = TrackReader::new().read_str(EXPORT).unwrap();

        let mut summary = TrackSummary::new(dataset.len());
        let renamed = transformer.rename(dataset, schema.rename_map).unwrap();
        let projected = transformer
            .project(renamed, schema.output_columns)
            .unwrap();
        summary.record_missing(&projected, schema.required_columns);
        let cleaned = transformer
            .filter_complete(projected, schema.required_columns)
            .unwrap();
        summary.record_output(&cleaned);
        summary
    }

    #[test]
    fn test_row_counts() {
        let summary = summarise();
        assert_eq!(summary.input_rows, 5);
        assert_eq!(summary.output_rows, 3);
        assert_eq!(summary.dropped_rows, 2);
        assert_eq!(summary.missing_by_column["timestamp"], 1);
        assert_eq!(summary.missing_by_column["latitude"], 2);
        assert_eq!(summary.missing_by_column["longitude"], 1);
        assert_eq!(summary.missing_by_column["birdId"], 1);
    }

    #[test]
    fn test_bird_time_span() {
        let summary = summarise();
        let day = NaiveDate::from_ymd_opt(2019, 8, 14).unwrap();

        let b1 = &summary.birds["B1"];
        assert_eq!(b1.fixes, 2);
        assert_eq!(b1.bird_name.as_deref(), Some("Pernis apivorus"));
        assert_eq!(b1.first_fix, day.and_hms_opt(10, 0, 0));
        assert_eq!(b1.last_fix, day.and_hms_opt(12, 0, 0));

        let b2 = &summary.birds["B2"];
        assert_eq!(b2.fixes, 1);
        assert_eq!(b2.bird_name, None);
        assert_eq!(b2.first_fix, None);
        assert_eq!(summary.unparsed_timestamps, 1);
    }

    #[test]
    fn test_generate_summary() {
        let text = summarise().generate_summary();
        assert!(text.contains("Input Rows: 5"));
        assert!(text.contains("Kept Rows: 3 (60.0%)"));
        assert!(text.contains(
            "B1 (Pernis apivorus): 2 fixes, 2019-08-14 10:00:00 to 2019-08-14 12:00:00"
        ));
        assert!(text.contains("B2 (unknown): 1 fixes"));
    }

    #[test]
    fn test_empty_input_summary() {
        let summary = TrackSummary::new(0);
        assert!(summary.generate_summary().contains("Kept Rows: 0 (0.0%)"));
    }

    #[test]
    fn test_write_json() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("report.json");
        summarise().write_json(&path)?;

        let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(report["output_rows"], 3);
        assert_eq!(report["birds"]["B1"]["first_fix"], "2019-08-14T10:00:00");
        Ok(())
    }
}
