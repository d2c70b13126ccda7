use crate::utils::constants::NULL_MARKERS;
use std::fmt;

/// One cell of a tracking export.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    /// A finite number, with the text it was read from so it is written back unchanged.
    Number { value: f64, raw: String },
    Text(String),
}

impl Value {
    /// Classify a raw CSV field.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if NULL_MARKERS.contains(&trimmed) {
            return Value::Null;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Value::Number {
                value,
                raw: raw.to_string(),
            },
            // "inf"/"NAN" spellings the marker list does not cover
            Ok(value) if value.is_nan() => Value::Null,
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn number(value: f64) -> Self {
        Value::Number {
            value,
            raw: value.to_string(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::Number { .. } => false,
        }
    }

    /// Field text as written to CSV. Nulls are empty.
    pub fn as_str(&self) -> &str {
        match self {
            Value::Null => "",
            Value::Number { raw, .. } => raw,
            Value::Text(s) => s,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifies_cells() {
        assert_eq!(Value::parse(""), Value::Null);
        assert_eq!(Value::parse("   "), Value::Null);
        assert_eq!(Value::parse("NaN"), Value::Null);
        assert_eq!(Value::parse("NA"), Value::Null);
        assert_eq!(Value::parse("NAN"), Value::Null);

        assert_eq!(Value::parse("61.2").as_f64(), Some(61.2));
        assert_eq!(Value::parse("-0.1278").as_f64(), Some(-0.1278));
        assert_eq!(Value::parse("B123"), Value::text("B123"));
        assert_eq!(
            Value::parse("2024-01-01 00:00:00.000"),
            Value::text("2024-01-01 00:00:00.000")
        );
    }

    #[test]
    fn test_numbers_keep_source_text() {
        let value = Value::parse("001");
        assert_eq!(value.as_f64(), Some(1.0));
        assert_eq!(value.as_str(), "001");

        assert_eq!(Value::parse("2.50").to_string(), "2.50");
    }

    #[test]
    fn test_infinity_is_text() {
        let value = Value::parse("inf");
        assert_eq!(value.as_f64(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(Value::Null.as_str(), "");
        assert!(Value::Null.is_null());
        assert!(Value::text("  ").is_null());
        assert!(!Value::number(0.0).is_null());
    }
}
