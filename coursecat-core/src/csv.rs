use serde::Serialize;
use std::collections::HashMap;
use std::mem::take;

/// Field separator used by every catalog table
pub const DELIMITER: char = ';';

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One data record keyed by the header row's column names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    /// Map a record's values onto the headers by position.
    /// Missing trailing values become empty strings, extra values are dropped.
    pub fn from_values(headers: &[String], values: &[String]) -> Self {
        let mut fields = HashMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let value = values
                .get(index)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            fields.insert(header.clone(), value);
        }
        Self { fields }
    }

    /// Value of a column, `None` when the header row lacks it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of a column, empty when absent
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Value of a column, `None` when absent or empty
    pub fn optional(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse semicolon-delimited text into rows keyed by the header record.
///
/// A leading byte order mark is dropped and the whole text is trimmed. The
/// first record is the header, blank records
/// are skipped and every field is trimmed. Parsing never fails: unbalanced
/// quotes just shift field boundaries.
pub fn parse_csv_text(text: &str) -> Vec<CsvRow> {
    let text = text.trim_start_matches(BYTE_ORDER_MARK).trim();
    let mut records = split_records(text, DELIMITER).into_iter();

    let Some(header_record) = records.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_record
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    records
        .map(|values| CsvRow::from_values(&headers, &values))
        .collect()
}

/// Split text into records of raw (untrimmed) fields.
///
/// Quotes toggle the quoted state; `""` inside quotes is one literal quote.
/// Separators and line breaks inside quotes are kept in the field, so a
/// quoted value may span several lines. Records holding nothing but
/// whitespace are dropped.
pub fn split_records(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut has_content = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                has_content = true;
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => {
                has_content = true;
                record.push(take(&mut field));
            }
            // CR-LF: the LF arm closes the record
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                record.push(take(&mut field));
                if has_content {
                    records.push(take(&mut record));
                } else {
                    record.clear();
                }
                has_content = false;
            }
            c => {
                if !c.is_whitespace() {
                    has_content = true;
                }
                field.push(c);
            }
        }
    }

    record.push(field);
    if has_content {
        records.push(record);
    }

    records
}
