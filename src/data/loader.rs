use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{Record, RecordSet};
use crate::error::ScoreError;

/// Field consulted on every line.
pub const PVALUE_FIELD: &str = "pvalue";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a `scores.jsonl` file.  The handle is closed before returning, on
/// success and on every error path.
pub fn load_scores(path: &Path) -> Result<RecordSet, ScoreError> {
    let file = File::open(path).map_err(|source| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = read_scores(BufReader::new(file))?;

    log::info!("loaded {} records from {}", set.len(), path.display());
    let outside = set.out_of_range();
    if outside > 0 {
        log::warn!(
            "{outside} of {} p-values in {} fall outside [0, 1]",
            set.len(),
            path.display()
        );
    }
    Ok(set)
}

/// Parse line-delimited JSON from any buffered reader.
///
/// Expected layout, one object per line:
///
/// ```json
/// {"pvalue": 0.00002, "sample_id": 0}
/// {"pvalue": 0.41,    "sample_id": 1}
/// ```
///
/// Whitespace-only lines are skipped.  Extra fields are ignored.  A line
/// that is not UTF-8 is malformed input, not a read failure.
pub fn read_scores<R: BufRead>(reader: R) -> Result<RecordSet, ScoreError> {
    let mut records = Vec::new();

    for (i, bytes) in reader.split(b'\n').enumerate() {
        let line_no = i + 1;
        let bytes = bytes.map_err(|source| ScoreError::Read {
            line: line_no,
            source,
        })?;
        let line = std::str::from_utf8(&bytes).map_err(|e| ScoreError::MalformedInput {
            line: line_no,
            reason: format!("invalid UTF-8: {e}"),
        })?;
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, line_no)?);
    }

    Ok(RecordSet::from_records(records))
}

// ---------------------------------------------------------------------------
// Per-line validation
// ---------------------------------------------------------------------------

fn parse_line(line: &str, line_no: usize) -> Result<Record, ScoreError> {
    let value: JsonValue =
        serde_json::from_str(line).map_err(|e| ScoreError::MalformedInput {
            line: line_no,
            reason: e.to_string(),
        })?;

    let obj = value.as_object().ok_or_else(|| ScoreError::MalformedInput {
        line: line_no,
        reason: format!("expected a JSON object, found {}", json_kind(&value)),
    })?;

    let raw = obj.get(PVALUE_FIELD).ok_or(ScoreError::MissingField {
        line: line_no,
        field: PVALUE_FIELD,
    })?;

    let pvalue = raw.as_f64().ok_or(ScoreError::TypeMismatch {
        line: line_no,
        field: PVALUE_FIELD,
        found: json_kind(raw),
    })?;

    Ok(Record::new(pvalue))
}

fn json_kind(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
