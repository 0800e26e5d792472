use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::input::{InputError, Table, find_column, read_table};

/// Fixed label set: seven integer classes.
const LABEL_MIN: i64 = 0;
const LABEL_MAX: i64 = 6;

#[derive(Debug)]
pub enum ValidationError {
    Input(InputError),
    MissingColumns,
    DuplicateIds,
    NanPredictions,
    InvalidLabels(Vec<String>),
    IdMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Input(e) => write!(f, "{e}"),
            ValidationError::MissingColumns => {
                write!(f, "predictions.csv must contain id and y_pred")
            }
            ValidationError::DuplicateIds => write!(f, "Duplicate IDs found"),
            ValidationError::NanPredictions => write!(f, "NaN predictions found"),
            ValidationError::InvalidLabels(values) => write!(
                f,
                "Invalid predictions found: {{{}}}. Must be integers between {} and {}.",
                values.join(", "),
                LABEL_MIN,
                LABEL_MAX
            ),
            ValidationError::IdMismatch => write!(f, "Prediction IDs do not match test nodes"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<InputError> for ValidationError {
    fn from(value: InputError) -> Self {
        ValidationError::Input(value)
    }
}

/// Runs the five submission checks in their fixed order and reports
/// the first violation.
pub fn validate_submission(
    predictions_path: &Path,
    test_nodes_path: &Path,
) -> Result<(), ValidationError> {
    let preds = read_table(predictions_path)?;
    let test_nodes = read_table(test_nodes_path)?;

    let (id_col, y_pred_col) = match (
        find_column(&preds.columns, &["id"]),
        find_column(&preds.columns, &["y_pred"]),
    ) {
        (Some(id), Some(y)) => (id, y),
        _ => return Err(ValidationError::MissingColumns),
    };

    let ids = column_values(&preds, id_col);
    let mut seen = HashSet::new();
    for id in &ids {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::DuplicateIds);
        }
    }

    let labels = column_values(&preds, y_pred_col);
    if labels.iter().any(|v| is_missing(v)) {
        return Err(ValidationError::NanPredictions);
    }

    let mut invalid = BTreeSet::new();
    for label in &labels {
        if let Some(display) = invalid_label(label) {
            invalid.insert(display);
        }
    }
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidLabels(invalid.into_iter().collect()));
    }

    let ref_id_col = find_column(&test_nodes.columns, &["id"])
        .ok_or_else(|| InputError::MissingColumn("id in test nodes file".to_string()))?;
    let pred_set = ids.iter().map(String::as_str).collect::<BTreeSet<_>>();
    let ref_set = column_values(&test_nodes, ref_id_col);
    let ref_set = ref_set.iter().map(String::as_str).collect::<BTreeSet<_>>();
    if pred_set != ref_set {
        return Err(ValidationError::IdMismatch);
    }

    Ok(())
}

fn column_values(table: &Table, col: usize) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| row.get(col).cloned().unwrap_or_default())
        .collect()
}

fn is_missing(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("nan")
}

/// Display form of an out-of-set label, `None` when the label is
/// valid. Integer-valued float spellings such as `3.0` are valid.
fn invalid_label(raw: &str) -> Option<String> {
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && (LABEL_MIN..=LABEL_MAX).contains(&(v as i64)) => None,
        Ok(v) if v.fract() == 0.0 && v.abs() < 1e15 => Some(format!("{}", v as i64)),
        Ok(v) => Some(format!("{}", v)),
        Err(_) => Some(raw.to_string()),
    }
}
