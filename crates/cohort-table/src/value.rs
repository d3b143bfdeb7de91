//! Cell values with explicit missing-data semantics

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// A single cell in a record set.
///
/// Every cell is one of three semantic types: free text, a finite number, or
/// an explicit missing marker. `Missing` is distinct from both zero and the
/// empty string; it is what an unparseable score cell degrades to during
/// loading.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum CellValue {
    /// Free-form text (categorical values, group keys).
    Text(String),
    /// A finite numeric value.
    Number(f64),
    /// Explicit absence of a value.
    Missing,
}

impl CellValue {
    /// Returns the numeric value, or `None` for text and missing cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_table::CellValue;
    ///
    /// assert_eq!(CellValue::Number(80.0).as_number(), Some(80.0));
    /// assert_eq!(CellValue::Missing.as_number(), None);
    /// assert_eq!(CellValue::Text("80".into()).as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) | CellValue::Missing => None,
        }
    }

    /// Returns `true` for the explicit missing marker.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// The textual form of the cell used for grouping and categorical
    /// encoding.
    ///
    /// Missing cells render as the `"missing"` category so that the encoder
    /// treats absence as one more distinct value rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_table::CellValue;
    ///
    /// assert_eq!(CellValue::Text("Teamwork".into()).canonical_text(), "Teamwork");
    /// assert_eq!(CellValue::Missing.canonical_text(), "missing");
    /// ```
    #[must_use]
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Missing => Cow::Borrowed("missing"),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Missing => f.write_str(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_not_zero_or_empty_text() {
        assert_ne!(CellValue::Missing, CellValue::Number(0.0));
        assert_ne!(CellValue::Missing, CellValue::Text(String::new()));
    }

    #[test]
    fn canonical_text_of_number() {
        assert_eq!(CellValue::Number(3.5).canonical_text(), "3.5");
    }

    #[test]
    fn display_renders_missing_as_blank() {
        assert_eq!(CellValue::Missing.to_string(), "");
        assert_eq!(CellValue::Number(80.0).to_string(), "80");
    }
}
