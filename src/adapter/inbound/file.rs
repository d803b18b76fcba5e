//! Quote tables stored as spreadsheets, CSV, JSON or TOML files.
//!
//! A table is a list of rows with the columns `event_id`, `market_type`,
//! `outcome`, `odds` and `source`. Extra columns are ignored.
//!
//! Spreadsheets (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read from the
//! first sheet and CSV files from the whole file; both take column names from
//! the first row. Blank rows are skipped.
//!
//! ```json
//! [
//!   { "event_id": 1, "market_type": "1X2", "outcome": "Home", "odds": 2.5, "source": "BookA" }
//! ]
//! ```
//!
//! JSON files may also wrap the rows as `{ "quotes": [...] }`; TOML files
//! always do, as a `[[quotes]]` array of tables.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::Quote;
use crate::error::{InputError, Result};
use crate::port::QuoteSource;

/// Supported quote table encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFormat {
    Spreadsheet,
    Csv,
    Json,
    Toml,
}

impl QuoteFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Spreadsheet),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// A single spreadsheet-like cell. Identifier columns accept any scalar and
/// are coerced to text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Cell {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Text(s) => s,
        }
    }

    fn to_odds(&self) -> Option<Decimal> {
        match self {
            Self::Integer(i) => Some(Decimal::from(*i)),
            Self::Float(f) => Decimal::try_from(*f).ok(),
            // Spreadsheets exported with a comma decimal separator.
            Self::Text(s) => Decimal::from_str(&s.trim().replace(',', ".")).ok(),
            Self::Bool(_) => None,
        }
    }

    fn describe(&self) -> String {
        self.clone().into_text()
    }

    /// Text cell from a delimited file; an empty field is a missing value.
    fn from_field(field: &str) -> Option<Self> {
        (!field.is_empty()).then(|| Self::Text(field.to_string()))
    }

    /// Cell from a workbook; empty and blank-text cells are missing values.
    fn from_workbook(data: &Data) -> Option<Self> {
        match data {
            Data::Empty => None,
            Data::Int(i) => Some(Self::Integer(*i)),
            Data::Float(f) => Some(Self::Float(*f)),
            Data::Bool(b) => Some(Self::Bool(*b)),
            Data::String(s) if s.trim().is_empty() => None,
            Data::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    event_id: Option<Cell>,
    market_type: Option<Cell>,
    outcome: Option<Cell>,
    odds: Option<Cell>,
    source: Option<Cell>,
}

#[derive(Debug, Deserialize)]
struct QuoteTable {
    #[serde(default)]
    quotes: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Rows(Vec<RawRow>),
    Table(QuoteTable),
}

const COLUMNS: [&str; 5] = ["event_id", "market_type", "outcome", "odds", "source"];

/// Positions of the required columns in a header row.
struct Header {
    positions: [Option<usize>; 5],
}

impl Header {
    fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<String> = names
            .iter()
            .map(|name| name.as_ref().trim().to_ascii_lowercase())
            .collect();
        Self {
            positions: COLUMNS.map(|column| names.iter().position(|name| name == column)),
        }
    }

    fn row(&self, mut cells: Vec<Option<Cell>>) -> RawRow {
        let mut take = |i: usize| {
            self.positions[i].and_then(|p| cells.get_mut(p).and_then(Option::take))
        };
        RawRow {
            event_id: take(0),
            market_type: take(1),
            outcome: take(2),
            odds: take(3),
            source: take(4),
        }
    }
}

fn required(cell: Option<Cell>, row: usize, column: &'static str) -> Result<Cell> {
    cell.ok_or_else(|| InputError::MissingColumn { row, column }.into())
}

impl RawRow {
    fn is_blank(&self) -> bool {
        self.event_id.is_none()
            && self.market_type.is_none()
            && self.outcome.is_none()
            && self.odds.is_none()
            && self.source.is_none()
    }

    fn into_quote(self, row: usize) -> Result<Quote> {
        let event_id = required(self.event_id, row, "event_id")?.into_text();
        let market_type = required(self.market_type, row, "market_type")?.into_text();
        let outcome = required(self.outcome, row, "outcome")?.into_text();
        let odds_cell = required(self.odds, row, "odds")?;
        let source = required(self.source, row, "source")?.into_text();

        let odds = odds_cell.to_odds().ok_or_else(|| InputError::InvalidOdds {
            row,
            value: odds_cell.describe(),
        })?;

        Quote::try_new(event_id, market_type, outcome, odds, source)
            .map_err(|source| InputError::Quote { row, source }.into())
    }
}

/// Validate rows, numbering them from 1 in table order.
fn into_quotes(rows: Vec<RawRow>) -> Result<Vec<Quote>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| row.into_quote(i + 1))
        .collect()
}

/// Like [`into_quotes`], but skips rows with no required cell at all.
/// Skipped rows still count towards the row number.
fn into_quotes_skipping_blank(rows: Vec<RawRow>) -> Result<Vec<Quote>> {
    rows.into_iter()
        .enumerate()
        .filter(|(_, row)| !row.is_blank())
        .map(|(i, row)| row.into_quote(i + 1))
        .collect()
}

fn parse_error(path: &Path, reason: impl ToString) -> InputError {
    InputError::Parse {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Parse a JSON quote table.
///
/// # Errors
///
/// Returns an error if the document is malformed or any row is invalid.
pub fn parse_json(content: &str, path: &Path) -> Result<Vec<Quote>> {
    let document: JsonDocument =
        serde_json::from_str(content).map_err(|e| parse_error(path, e))?;

    let rows = match document {
        JsonDocument::Rows(rows) => rows,
        JsonDocument::Table(table) => table.quotes,
    };
    into_quotes(rows)
}

/// Parse a TOML quote table (`[[quotes]]` entries).
///
/// # Errors
///
/// Returns an error if the document is malformed or any row is invalid.
pub fn parse_toml(content: &str, path: &Path) -> Result<Vec<Quote>> {
    let table: QuoteTable = toml::from_str(content).map_err(|e| parse_error(path, e.message()))?;
    into_quotes(table.quotes)
}

/// Parse a CSV quote table with a header row.
///
/// Fields are trimmed; every value is text until coerced.
///
/// # Errors
///
/// Returns an error if the file is not valid CSV or any row is invalid.
pub fn parse_csv(content: &str, path: &Path) -> Result<Vec<Quote>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let names: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    let header = Header::new(names.as_slice());

    let rows = reader
        .records()
        .map(|record| -> Result<RawRow> {
            let record = record.map_err(|e| parse_error(path, e))?;
            Ok(header.row(record.iter().map(Cell::from_field).collect()))
        })
        .collect::<Result<Vec<RawRow>>>()?;

    into_quotes_skipping_blank(rows)
}

/// Parse the rows of one worksheet; the first row names the columns.
///
/// # Errors
///
/// Returns an error if any data row is invalid.
pub fn parse_sheet<'a>(rows: impl IntoIterator<Item = &'a [Data]>) -> Result<Vec<Quote>> {
    let mut rows = rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let names: Vec<String> = header_row.iter().map(ToString::to_string).collect();
    let header = Header::new(names.as_slice());

    let rows = rows
        .map(|row| header.row(row.iter().map(Cell::from_workbook).collect()))
        .collect();
    into_quotes_skipping_blank(rows)
}

/// Parse the first sheet of a workbook held in memory.
///
/// # Errors
///
/// Returns an error if the bytes are not a readable workbook, the workbook
/// has no sheet, or any data row is invalid.
pub fn parse_workbook(bytes: &[u8], path: &Path) -> Result<Vec<Quote>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| parse_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| parse_error(path, "workbook has no sheets"))?
        .map_err(|e| parse_error(path, e))?;

    parse_sheet(range.rows())
}

fn utf8<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| parse_error(path, e).into())
}

/// Reads quotes from a file on disk.
#[derive(Debug, Clone)]
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteSource for FileQuoteSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Quote>> {
        let format =
            QuoteFormat::from_path(&self.path).ok_or_else(|| InputError::UnsupportedFormat {
                path: self.path.clone(),
            })?;

        let bytes = std::fs::read(&self.path).map_err(|source| InputError::ReadFile {
            path: self.path.clone(),
            source,
        })?;

        let quotes = match format {
            QuoteFormat::Spreadsheet => parse_workbook(&bytes, &self.path)?,
            QuoteFormat::Csv => parse_csv(utf8(&bytes, &self.path)?, &self.path)?,
            QuoteFormat::Json => parse_json(utf8(&bytes, &self.path)?, &self.path)?,
            QuoteFormat::Toml => parse_toml(utf8(&bytes, &self.path)?, &self.path)?,
        };

        debug!(path = %self.path.display(), ?format, quotes = quotes.len(), "Loaded quote table");
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::domain::DomainError;
    use rust_decimal_macros::dec;

    fn path() -> PathBuf {
        PathBuf::from("quotes.json")
    }

    #[test]
    fn parses_json_array_of_rows() {
        let json = r#"[
            {"event_id": "e1", "market_type": "1X2", "outcome": "Home", "odds": 2.5, "source": "BookA"},
            {"event_id": "e1", "market_type": "1X2", "outcome": "Away", "odds": "2.10", "source": "BookB", "league": "EPL"}
        ]"#;

        let quotes = parse_json(json, &path()).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].odds(), dec!(2.5));
        assert_eq!(quotes[1].odds(), dec!(2.10));
        assert_eq!(quotes[1].source().as_str(), "BookB");
    }

    #[test]
    fn parses_wrapped_json_table() {
        let json = r#"{"quotes": [
            {"event_id": "e1", "market_type": "OU", "outcome": "Over", "odds": 1.9, "source": "BookA"}
        ]}"#;

        let quotes = parse_json(json, &path()).unwrap();
        assert_eq!(quotes[0].outcome().as_str(), "Over");
    }

    #[test]
    fn coerces_numeric_identifiers_to_text() {
        let json = r#"[{"event_id": 1042, "market_type": "1X2", "outcome": 1, "odds": 3, "source": "BookA"}]"#;

        let quotes = parse_json(json, &path()).unwrap();

        assert_eq!(quotes[0].event_id().as_str(), "1042");
        assert_eq!(quotes[0].outcome().as_str(), "1");
        assert_eq!(quotes[0].odds(), dec!(3));
    }

    #[test]
    fn accepts_comma_decimal_separator() {
        let json = r#"[{"event_id": "e", "market_type": "m", "outcome": "o", "odds": "2,10", "source": "s"}]"#;

        let quotes = parse_json(json, &path()).unwrap();
        assert_eq!(quotes[0].odds(), dec!(2.10));
    }

    #[test]
    fn missing_column_names_row_and_column() {
        let json = r#"[
            {"event_id": "e", "market_type": "m", "outcome": "o", "odds": 2, "source": "s"},
            {"event_id": "e", "market_type": "m", "outcome": "o", "odds": 2}
        ]"#;

        match parse_json(json, &path()) {
            Err(Error::Input(InputError::MissingColumn { row: 2, column: "source" })) => {}
            other => panic!("expected missing source on row 2, got {other:?}"),
        }
    }

    #[test]
    fn null_cell_counts_as_missing() {
        let json = r#"[{"event_id": "e", "market_type": "m", "outcome": null, "odds": 2, "source": "s"}]"#;

        assert!(matches!(
            parse_json(json, &path()),
            Err(Error::Input(InputError::MissingColumn { row: 1, column: "outcome" }))
        ));
    }

    #[test]
    fn non_numeric_odds_fail_fast() {
        let json = r#"[{"event_id": "e", "market_type": "m", "outcome": "o", "odds": "evens", "source": "s"}]"#;

        match parse_json(json, &path()) {
            Err(Error::Input(InputError::InvalidOdds { row: 1, value })) => {
                assert_eq!(value, "evens");
            }
            other => panic!("expected invalid odds, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_odds_fail_fast() {
        let json = r#"[{"event_id": "e", "market_type": "m", "outcome": "o", "odds": 0, "source": "s"}]"#;

        assert!(matches!(
            parse_json(json, &path()),
            Err(Error::Input(InputError::Quote {
                row: 1,
                source: DomainError::NonPositiveOdds { .. },
            }))
        ));
    }

    #[test]
    fn parses_toml_quotes() {
        let toml = r#"
[[quotes]]
event_id = "e1"
market_type = "1X2"
outcome = "Home"
odds = 2.5
source = "BookA"

[[quotes]]
event_id = "e1"
market_type = "1X2"
outcome = "Away"
odds = 2
source = "BookB"
"#;

        let quotes = parse_toml(toml, Path::new("quotes.toml")).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].odds(), dec!(2));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_json("[{", &path()),
            Err(Error::Input(InputError::Parse { .. }))
        ));
    }

    #[test]
    fn parses_csv_by_header_name() {
        let csv = "source, Odds ,outcome,league,market_type,event_id\n\
                   BookA,2.5,Home,EPL,1X2,1042\n\
                   BookB,\"2,10\",Away,EPL,1X2,1042\n";

        let quotes = parse_csv(csv, Path::new("odds.csv")).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].event_id().as_str(), "1042");
        assert_eq!(quotes[0].odds(), dec!(2.5));
        assert_eq!(quotes[1].odds(), dec!(2.10));
        assert_eq!(quotes[1].source().as_str(), "BookB");
    }

    #[test]
    fn csv_blank_rows_are_skipped_but_numbered() {
        let csv = "event_id,market_type,outcome,odds,source\n\
                   e,m,Home,2,BookA\n\
                   ,,,,\n\
                   e,m,Away,,BookB\n";

        match parse_csv(csv, Path::new("odds.csv")) {
            Err(Error::Input(InputError::MissingColumn { row: 3, column: "odds" })) => {}
            other => panic!("expected missing odds on row 3, got {other:?}"),
        }
    }

    #[test]
    fn csv_without_odds_column_reports_first_row() {
        let csv = "event_id,market_type,outcome,price,source\ne,m,o,2,s\n";

        assert!(matches!(
            parse_csv(csv, Path::new("odds.csv")),
            Err(Error::Input(InputError::MissingColumn { row: 1, column: "odds" }))
        ));
    }

    #[test]
    fn parses_sheet_cells() {
        let sheet = vec![
            vec![
                Data::String("Event_ID".into()),
                Data::String("market_type".into()),
                Data::String("outcome".into()),
                Data::String("odds".into()),
                Data::String("source".into()),
            ],
            vec![
                Data::Float(1042.0),
                Data::String("1X2".into()),
                Data::Int(1),
                Data::Float(2.5),
                Data::String("BookA".into()),
            ],
            vec![Data::Empty, Data::String("  ".into()), Data::Empty, Data::Empty, Data::Empty],
            vec![
                Data::Float(1042.0),
                Data::String("1X2".into()),
                Data::Int(2),
                Data::String("3,25".into()),
                Data::String("BookB".into()),
            ],
        ];

        let quotes = parse_sheet(sheet.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].event_id().as_str(), "1042");
        assert_eq!(quotes[0].outcome().as_str(), "1");
        assert_eq!(quotes[0].odds(), dec!(2.5));
        assert_eq!(quotes[1].odds(), dec!(3.25));
    }

    #[test]
    fn sheet_with_boolean_odds_is_rejected() {
        let sheet = vec![
            COLUMNS.map(|name| Data::String(name.into())).to_vec(),
            vec![
                Data::String("e".into()),
                Data::String("m".into()),
                Data::String("o".into()),
                Data::Bool(true),
                Data::String("s".into()),
            ],
        ];

        match parse_sheet(sheet.iter().map(Vec::as_slice)) {
            Err(Error::Input(InputError::InvalidOdds { row: 1, value })) => {
                assert_eq!(value, "true");
            }
            other => panic!("expected invalid odds, got {other:?}"),
        }
    }

    #[test]
    fn loads_first_sheet_of_workbook() {
        let source = FileQuoteSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/odds.xlsx"));

        let quotes = source.load().unwrap();

        assert_eq!(quotes.len(), 8);
        assert_eq!(quotes[0].event_id().as_str(), "ARS-CHE");
        assert_eq!(quotes[5].odds(), dec!(2.10));
        assert_eq!(quotes[6].event_id().as_str(), "1042");
    }

    #[test]
    fn garbage_workbook_is_a_parse_error() {
        assert!(matches!(
            parse_workbook(b"not a workbook", Path::new("odds.xlsx")),
            Err(Error::Input(InputError::Parse { .. }))
        ));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            QuoteFormat::from_path(Path::new("a/b.JSON")),
            Some(QuoteFormat::Json)
        );
        assert_eq!(
            QuoteFormat::from_path(Path::new("odds.toml")),
            Some(QuoteFormat::Toml)
        );
        assert_eq!(
            QuoteFormat::from_path(Path::new("table1.xlsx")),
            Some(QuoteFormat::Spreadsheet)
        );
        assert_eq!(
            QuoteFormat::from_path(Path::new("odds.CSV")),
            Some(QuoteFormat::Csv)
        );
        assert_eq!(QuoteFormat::from_path(Path::new("odds.txt")), None);
        assert_eq!(QuoteFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn load_rejects_unsupported_extension() {
        let source = FileQuoteSource::new("odds.txt");
        assert!(matches!(
            source.load(),
            Err(Error::Input(InputError::UnsupportedFormat { .. }))
        ));
    }
}
