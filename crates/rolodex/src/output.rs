//! Output formatting for command results.
//!
//! [`OutputMode`] picks between a plain-text table and structured
//! serialization (JSON, YAML, CSV). [`OutputDestination`] decides where the
//! rendered text goes.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// Controls how results are rendered. Backs the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Aligned plain-text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Flattened CSV
    Csv,
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Renders `data` in `mode`, using `text` for the plain-text form.
pub fn render<T, F>(data: &T, mode: OutputMode, text: F) -> Result<String, SerializeError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match mode {
        OutputMode::Text => Ok(text(data)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Csv => serialize_csv(data),
    }
}

/// Renders a list whose CSV form has a fixed column set.
///
/// CSV output writes `columns` as the header, in that order, even when
/// `items` is empty. The other modes behave as [`render`].
pub fn render_rows<T, F>(
    items: &[T],
    columns: &[&str],
    mode: OutputMode,
    text: F,
) -> Result<String, SerializeError>
where
    T: Serialize,
    F: FnOnce(&[T]) -> String,
{
    match mode {
        OutputMode::Csv => serialize_csv_columns(items, columns),
        _ => render(items, mode, text),
    }
}

/// Serializes records to CSV under an explicit header.
///
/// Keys missing from a record leave an empty cell.
pub fn serialize_csv_columns<T: Serialize>(
    items: &[T],
    columns: &[&str],
) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let csv_err = |e: csv::Error| SerializeError::Csv(e.to_string());

    wtr.write_record(columns).map_err(csv_err)?;
    for item in items {
        let value = serde_json::to_value(item)?;
        let row: Vec<String> = columns
            .iter()
            .map(|c| value.get(*c).map(value_to_string).unwrap_or_default())
            .collect();
        wtr.write_record(&row).map_err(csv_err)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

/// Serializes data to CSV format.
///
/// The data is first converted to JSON, then flattened: an array of objects
/// becomes one row per object, a single object becomes key/value rows.
pub fn serialize_csv<T: Serialize + ?Sized>(data: &T) -> Result<String, SerializeError> {
    let json_value = serde_json::to_value(data)?;
    flatten_json_to_csv(&json_value)
}

fn flatten_json_to_csv(value: &serde_json::Value) -> Result<String, SerializeError> {
    use serde_json::Value;

    let mut wtr = csv::Writer::from_writer(vec![]);
    let csv_err = |e: csv::Error| SerializeError::Csv(e.to_string());

    match value {
        Value::Array(arr) => {
            if let Some(Value::Object(first)) = arr.first() {
                let headers: Vec<&str> = first.keys().map(|s| s.as_str()).collect();
                wtr.write_record(&headers).map_err(csv_err)?;

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| obj.get(*h).map(value_to_string).unwrap_or_default())
                            .collect();
                        wtr.write_record(&row).map_err(csv_err)?;
                    }
                }
            } else {
                wtr.write_record(["value"]).map_err(csv_err)?;
                for item in arr {
                    wtr.write_record(&[value_to_string(item)]).map_err(csv_err)?;
                }
            }
        }
        Value::Object(obj) => {
            wtr.write_record(["key", "value"]).map_err(csv_err)?;
            for (k, v) in obj {
                wtr.write_record([k.as_str(), &value_to_string(v)])
                    .map_err(csv_err)?;
            }
        }
        _ => {
            wtr.write_record(["value"]).map_err(csv_err)?;
            wtr.write_record(&[value_to_string(value)]).map_err(csv_err)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

fn value_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Formats rows as a left-aligned table with a header line.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = pad_line(headers.iter().copied(), &widths);
    for row in rows {
        out.push('\n');
        out.push_str(&pad_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to the given writer (standard output in the binary)
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Writes `content` followed by a newline.
    ///
    /// `stdout` receives the text for [`OutputDestination::Stdout`]; files are
    /// created or truncated.
    pub fn write_text(&self, stdout: &mut dyn Write, content: &str) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => writeln!(stdout, "{content}"),
            OutputDestination::File(path) => {
                validate_path(path)?;
                std::fs::write(path, format!("{content}\n"))
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}
