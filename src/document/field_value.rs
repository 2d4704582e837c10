//! Field value types for journal rows.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use diarist::document::field_value::FieldValue;
//!
//! let languages = FieldValue::TextList(vec!["eng".to_string(), "fra".to_string()]);
//! assert_eq!(languages.as_text_list().map(|l| l.len()), Some(2));
//!
//! let date = FieldValue::Date(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
//! assert_eq!(date.type_name(), "date");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for `Date` values in text form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a value for a field in a journal row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Ordered list of strings (sentences, language codes)
    TextList(Vec<String>),
    /// List of string lists (tokens per sentence)
    NestedTextList(Vec<Vec<String>>),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Null value
    Null,
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list if this is a text list.
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(list) => Some(list),
            _ => None,
        }
    }

    /// Get the lists if this is a nested text list.
    pub fn as_nested_text_list(&self) -> Option<&[Vec<String>]> {
        match self {
            FieldValue::NestedTextList(lists) => Some(lists),
            _ => None,
        }
    }

    /// Get the date, parsing `YYYY-MM-DD` text if needed.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            FieldValue::Text(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Get the integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::TextList(_) => "text list",
            FieldValue::NestedTextList(_) => "nested text list",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Date(_) => "date",
            FieldValue::Null => "null",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(list: Vec<String>) -> Self {
        FieldValue::TextList(list)
    }
}

impl From<Vec<Vec<String>>> for FieldValue {
    fn from(lists: Vec<Vec<String>>) -> Self {
        FieldValue::NestedTextList(lists)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        FieldValue::Date(date)
    }
}
