//! JSONL format document converter.
//!
//! Each line of the file is a single JSON object describing one entry:
//! ```jsonl
//! {"date": "2023-05-01", "sentences": ["Rained all day."], "languages": ["eng"]}
//! {"date": "2023-05-02", "sentences": ["Sunny."], "languages": ["eng"]}
//! ```
//!
//! Values map to [`FieldValue`]s as follows: strings become `Text`, except
//! in the date field where `YYYY-MM-DD` strings (and RFC 3339 timestamps)
//! become `Date`. Arrays of strings become `TextList` and arrays of string
//! arrays `NestedTextList`; any other array is a parse error. Numbers become
//! `Integer` or `Float`, booleans `Boolean`, and `null` `Null`. Nested
//! objects are kept as their JSON text.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Number, Value};

use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::{DATE_FORMAT, FieldValue};
use crate::error::{DiaristError, Result};

/// Field whose strings are read as dates unless configured otherwise.
pub const DEFAULT_DATE_FIELD: &str = "date";

/// A document converter for JSONL format.
#[derive(Clone, Debug)]
pub struct JsonlDocumentConverter {
    date_field: String,
}

impl Default for JsonlDocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonlDocumentConverter {
    /// Create a new JSONL converter reading dates from `date`.
    pub fn new() -> Self {
        JsonlDocumentConverter {
            date_field: DEFAULT_DATE_FIELD.to_string(),
        }
    }

    /// Read dates from another field. Strings elsewhere stay text.
    pub fn with_date_field<S: Into<String>>(mut self, field: S) -> Self {
        self.date_field = field.into();
        self
    }

    /// Parse a single JSON line into a Document.
    pub fn parse_json_line(&self, line: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| DiaristError::parse(format!("Failed to parse JSON: {e}")))?;

        let Value::Object(map) = value else {
            return Err(DiaristError::parse(format!(
                "Expected a JSON object per line, got: {line}"
            )));
        };

        let mut doc = Document::new();
        for (key, val) in map {
            let value = match val {
                Value::String(s) if key == self.date_field => infer_date_value(s),
                other => json_to_field_value(&key, other)?,
            };
            doc.add_field(key, value);
        }
        Ok(doc)
    }
}

fn json_to_field_value(key: &str, value: Value) -> Result<FieldValue> {
    let value = match value {
        Value::String(s) => FieldValue::Text(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float(f)
            } else {
                FieldValue::Text(n.to_string())
            }
        }
        Value::Bool(b) => FieldValue::Boolean(b),
        Value::Null => FieldValue::Null,
        Value::Array(items) => {
            if items.iter().any(Value::is_array) {
                FieldValue::NestedTextList(
                    items
                        .into_iter()
                        .map(|item| match item {
                            Value::Array(inner) => string_items(key, inner),
                            other => Err(unexpected_item(key, &other)),
                        })
                        .collect::<Result<_>>()?,
                )
            } else {
                FieldValue::TextList(string_items(key, items)?)
            }
        }
        Value::Object(_) => FieldValue::Text(value.to_string()),
    };
    Ok(value)
}

fn string_items(key: &str, items: Vec<Value>) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(unexpected_item(key, &other)),
        })
        .collect()
}

fn unexpected_item(key: &str, item: &Value) -> DiaristError {
    DiaristError::parse(format!(
        "field '{key}' holds a list with a non-string item: {item}"
    ))
}

fn infer_date_value(s: String) -> FieldValue {
    if let Ok(date) = NaiveDate::parse_from_str(&s, DATE_FORMAT) {
        return FieldValue::Date(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(&s) {
        return FieldValue::Date(datetime.date_naive());
    }
    FieldValue::Text(s)
}

/// Render a field value as JSON, the inverse of the reading rules.
pub fn field_value_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::TextList(list) => {
            Value::Array(list.iter().cloned().map(Value::String).collect())
        }
        FieldValue::NestedTextList(lists) => Value::Array(
            lists
                .iter()
                .map(|list| Value::Array(list.iter().cloned().map(Value::String).collect()))
                .collect(),
        ),
        FieldValue::Integer(i) => Value::Number((*i).into()),
        FieldValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        FieldValue::Boolean(b) => Value::Bool(*b),
        FieldValue::Date(date) => Value::String(date.format(DATE_FORMAT).to_string()),
        FieldValue::Null => Value::Null,
    }
}

/// Render a document as a JSON object with keys in sorted order.
pub fn document_to_json(doc: &Document) -> Value {
    let map: Map<String, Value> = doc
        .fields()
        .iter()
        .map(|(name, value)| (name.clone(), field_value_to_json(value)))
        .collect();
    Value::Object(map)
}

/// Write documents as JSON Lines.
pub fn write_documents<'a, W, I>(writer: &mut W, docs: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Document>,
{
    let mut written = 0;
    for doc in docs {
        serde_json::to_writer(&mut *writer, &document_to_json(doc))?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Iterator over JSONL documents.
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    converter: JsonlDocumentConverter,
    line_num: usize,
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_num += 1;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line_num = self.line_num;
                    return Some(self.converter.parse_json_line(line).map_err(|e| {
                        DiaristError::parse(format!("line {line_num}: {e}"))
                    }));
                }
                Err(e) => return Some(Err(DiaristError::Io(e))),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            converter: self.clone(),
            line_num: 0,
        })
    }
}
