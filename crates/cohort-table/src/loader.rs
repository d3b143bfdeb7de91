//! CSV ingestion with score coercion
//!
//! The loader turns an uploaded byte stream into a [`RecordSet`]:
//!
//! 1. Parse the bytes as UTF-8, comma-delimited text with a header row.
//! 2. Verify every schema-required column is present in the header.
//! 3. Coerce the score column to numeric, degrading unparseable cells to
//!    [`CellValue::Missing`] without dropping the row.
//!
//! The per-cell degrade policy is deliberate: a survey row with a garbled
//! score still contributes its categorical tags to frequency and encoding,
//! so the row must survive with a missing score rather than abort the load.

use crate::{record::RecordSet, schema::TableSchema, value::CellValue};

/// Error raised while loading a dataset.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The byte stream is not decodable as UTF-8 or is not a well-formed
    /// delimited table (e.g. a row with the wrong number of columns).
    #[display("malformed CSV input: {_0}")]
    Parse(#[error(source)] csv::Error),
    /// A schema-required column is absent from the header row.
    #[display("required column '{column}' is missing from the header")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Parses a CSV byte stream into a record set.
///
/// Headers are preserved verbatim as column names. Cells in the schema's
/// score column are parsed as `f64`; cells that do not parse as a finite
/// number (including empty cells and spellings of infinity) become
/// [`CellValue::Missing`]. All other cells stay text.
///
/// # Errors
///
/// - [`LoadError::Parse`] if the input is not UTF-8 or any row's column
///   count differs from the header's.
/// - [`LoadError::MissingColumn`] if the score column, the group column, or
///   any categorical column is absent from the header. This is a hard stop:
///   no degraded record set is produced.
///
/// # Examples
///
/// ```
/// use cohort_table::{CellValue, TableSchema, loader};
///
/// let csv = "\
/// Test Chapter,Test Score,Strength,Opportunity,Challenge
/// Ch1,80,Teamwork,Focus,Time
/// Ch1,absent,Teamwork,Focus,Time
/// ";
/// let records = loader::load_csv(csv.as_bytes(), &TableSchema::default()).unwrap();
/// assert_eq!(records.len(), 2);
///
/// let scores: Vec<_> = records.column("Test Score").unwrap().collect();
/// assert_eq!(scores[0], &CellValue::Number(80.0));
/// assert_eq!(scores[1], &CellValue::Missing);
/// ```
pub fn load_csv(bytes: &[u8], schema: &TableSchema) -> Result<RecordSet, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    if let Some(column) = schema.missing_column(&headers) {
        return Err(LoadError::MissingColumn {
            column: column.to_owned(),
        });
    }
    // missing_column() guarantees the position exists
    let score_idx = headers
        .iter()
        .position(|h| *h == schema.score_column)
        .unwrap_or_default();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                if idx == score_idx {
                    coerce_score(cell)
                } else {
                    CellValue::Text(cell.to_owned())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(RecordSet::new(headers, rows))
}

/// Numeric coercion for a score cell.
///
/// Anything that does not parse as a finite `f64` degrades to `Missing`,
/// keeping the invariant that a loaded score is either a finite number or
/// explicitly absent, never an unparsed string.
fn coerce_score(cell: &str) -> CellValue {
    match cell.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        Ok(_) | Err(_) => CellValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,90.5,Listening,Focus,Time
Ch2,70,Teamwork,Planning,Patience
";

    #[test]
    fn loads_all_well_formed_rows() {
        let records = load_csv(WELL_FORMED.as_bytes(), &TableSchema::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.columns(),
            &[
                "Test Chapter",
                "Test Score",
                "Strength",
                "Opportunity",
                "Challenge"
            ]
        );
    }

    #[test]
    fn bad_score_becomes_missing_without_dropping_the_row() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus,Time
Ch1,bad,Teamwork,Focus,Time
";
        let records = load_csv(csv.as_bytes(), &TableSchema::default()).unwrap();
        assert_eq!(records.len(), 2);
        let scores: Vec<_> = records.column("Test Score").unwrap().collect();
        assert_eq!(scores[0], &CellValue::Number(80.0));
        assert_eq!(scores[1], &CellValue::Missing);
    }

    #[test]
    fn empty_and_infinite_scores_become_missing() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,,Teamwork,Focus,Time
Ch1,inf,Teamwork,Focus,Time
Ch1,NaN,Teamwork,Focus,Time
";
        let records = load_csv(csv.as_bytes(), &TableSchema::default()).unwrap();
        assert!(
            records
                .column("Test Score")
                .unwrap()
                .all(CellValue::is_missing)
        );
    }

    #[test]
    fn missing_required_column_is_a_hard_error() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity
Ch1,80,Teamwork,Focus
";
        let err = load_csv(csv.as_bytes(), &TableSchema::default()).unwrap_err();
        match err {
            LoadError::MissingColumn { column } => assert_eq!(column, "Challenge"),
            LoadError::Parse(_) => panic!("expected MissingColumn, got {err:?}"),
        }
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let csv = "\
Test Chapter,Test Score,Strength,Opportunity,Challenge
Ch1,80,Teamwork,Focus
";
        let err = load_csv(csv.as_bytes(), &TableSchema::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn non_utf8_input_is_a_parse_error() {
        let mut bytes = WELL_FORMED.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0x2c, 0xff, 0x0a]);
        let err = load_csv(&bytes, &TableSchema::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn custom_schema_column_names_are_honored() {
        let csv = "\
unit,points,tag_a,tag_b
U1,50,x,y
";
        let schema = TableSchema {
            score_column: "points".to_owned(),
            group_column: "unit".to_owned(),
            categorical_columns: vec!["tag_a".to_owned(), "tag_b".to_owned()],
        };
        let records = load_csv(csv.as_bytes(), &schema).unwrap();
        assert_eq!(
            records.column("points").unwrap().next(),
            Some(&CellValue::Number(50.0))
        );
    }
}
