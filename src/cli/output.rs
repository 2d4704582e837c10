//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DiaristArgs, OutputFormat};
use crate::error::Result;
use crate::text::frequency::FrequencyTable;

/// Result structure for sentence segmentation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentResult {
    pub sentences: Vec<String>,
    pub word_count: usize,
}

/// Result structure for lemmatization and stemming.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokensResult {
    pub tokens: Vec<Vec<String>>,
}

/// Result structure for commands that write a journal file.
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalWriteResult {
    pub input_entries: usize,
    pub output_entries: usize,
    pub output: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &DiaristArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a frequency table in the specified format.
pub fn output_frequencies(message: &str, table: &FrequencyTable, args: &DiaristArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            print!("{}", format_frequency_table(table));
            Ok(())
        }
        OutputFormat::Json => output_json(table, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &DiaristArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(items) if items.iter().all(|v| !v.is_object()) => {
                        println!("{key}:");
                        for item in &items {
                            println!("  {}", format_value(item));
                        }
                    }
                    other => println!("{key}: {}", format_value(&other)),
                }
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DiaristArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render a frequency table as aligned `count  term` lines.
fn format_frequency_table(table: &FrequencyTable) -> String {
    let width = table
        .entries
        .iter()
        .map(|entry| entry.count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = format!("{:>width$}  {}\n", "#", table.label);
    for entry in &table.entries {
        out.push_str(&format!("{:>width$}  {}\n", entry.count, entry.term));
    }
    out
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::json!(["a", ["b", "c"]])), "[a, [b, c]]");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_format_frequency_table() {
        let table = FrequencyTable::from_counts(
            "2_grams",
            vec![(" the cat".to_string(), 12), (" cat sat".to_string(), 3)],
        );

        assert_eq!(
            format_frequency_table(&table),
            " #  2_grams\n12   the cat\n 3   cat sat\n"
        );
    }
}
