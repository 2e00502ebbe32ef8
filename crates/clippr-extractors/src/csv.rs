//! CSV cleaning: trims cells and lower-cases header keys.

use serde_json::{Map, Value};

use clippr_plugins::{EntryError, PluginEntry};

/// Turns messy comma-separated text into an array of header-keyed records.
///
/// The first non-blank line is the header row; header cells are trimmed and
/// lower-cased, value cells are trimmed. Rows longer than the header are
/// truncated to it.
pub struct CsvCleaner;

impl PluginEntry for CsvCleaner {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let mut lines = input.lines().filter(|line| !line.trim().is_empty());
        let header_line = lines.next().ok_or("csv input contains no rows")?;
        let headers: Vec<String> = header_line
            .split(',')
            .map(|cell| cell.trim().to_lowercase())
            .collect();

        let records: Vec<Value> = lines
            .map(|line| {
                let record: Map<String, Value> = headers
                    .iter()
                    .zip(line.split(','))
                    .map(|(header, cell)| {
                        (header.clone(), Value::String(cell.trim().to_owned()))
                    })
                    .collect();
                Value::Object(record)
            })
            .collect();
        Ok(Value::Array(records))
    }
}
