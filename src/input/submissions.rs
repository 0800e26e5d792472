use std::fs;
use std::path::Path;

use crate::input::{InputError, Table, find_column, parse_table};
use crate::model::SubmissionRecord;

/// Accepted names for the submission timestamp column, primary first.
const TIMESTAMP_COLUMNS: &[&str] = &["timestamp_utc", "timestamp"];

/// Loads the leaderboard source table. An absent or empty file means
/// no submissions yet, not an error.
pub fn load_submissions(path: &Path) -> Result<Vec<SubmissionRecord>, InputError> {
    if !path.exists() {
        crate::info!("no submissions file at {}; rendering empty leaderboard", path.display());
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let table = parse_table(content.as_bytes())?;
    Ok(records_from_table(&table))
}

fn records_from_table(table: &Table) -> Vec<SubmissionRecord> {
    let team_col = find_column(&table.columns, &["team"]);
    let model_col = find_column(&table.columns, &["model"]);
    let score_col = find_column(&table.columns, &["score"]);
    let notes_col = find_column(&table.columns, &["notes"]);
    let timestamp_cols = TIMESTAMP_COLUMNS
        .iter()
        .map(|&name| find_column(&table.columns, &[name]))
        .collect::<Vec<_>>();

    let mut records = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let cell = |col: Option<usize>| -> String {
            col.and_then(|i| row.get(i)).cloned().unwrap_or_default()
        };

        let team = cell(team_col);
        if team.is_empty() {
            crate::warn!("submission row {} has empty team; skipping", idx + 1);
            continue;
        }

        // The primary column wins unless its value is empty, in which
        // case the legacy column's value is taken.
        let mut timestamp = String::new();
        for col in &timestamp_cols {
            timestamp = cell(*col);
            if !timestamp.is_empty() {
                break;
            }
        }

        records.push(SubmissionRecord {
            team,
            model: cell(model_col),
            score: cell(score_col),
            timestamp,
            notes: cell(notes_col),
        });
    }
    records
}
