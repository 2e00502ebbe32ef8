//! HTML table conversion to JSON records.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use clippr_plugins::{EntryError, PluginEntry};

use crate::compiled;

static ROW: LazyLock<Regex> = LazyLock::new(|| compiled(r"<tr>(.*?)</tr>"));
static CELL: LazyLock<Regex> = LazyLock::new(|| compiled(r"<td>(.*?)</td>"));

/// Converts `<tr>`/`<td>` markup into an array of records keyed
/// `col1..colN`.
pub struct TableToJson;

impl PluginEntry for TableToJson {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let rows: Vec<Value> = ROW
            .captures_iter(input)
            .filter_map(|captures| captures.get(1))
            .map(|row| {
                let record: Map<String, Value> = CELL
                    .captures_iter(row.as_str())
                    .filter_map(|captures| captures.get(1))
                    .enumerate()
                    .map(|(i, cell)| {
                        (format!("col{}", i + 1), Value::String(cell.as_str().to_owned()))
                    })
                    .collect();
                Value::Object(record)
            })
            .collect();
        Ok(Value::Array(rows))
    }
}
