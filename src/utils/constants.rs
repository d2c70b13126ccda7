/// File names
pub const DEFAULT_INPUT_FILE: &str = "European Honey Buzzard_Finland_250.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "filtered_file.csv";

/// Preview defaults
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// CSV format
pub const DEFAULT_DELIMITER: u8 = b',';
pub const LINE_TERMINATOR: u8 = b'\n';

/// Cell texts read as missing values (compared after trimming)
pub const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#NA", "#N/A N/A", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// Timestamp formats accepted by the summary, tried in order
pub const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
