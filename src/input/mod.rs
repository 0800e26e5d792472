use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod submissions;

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "IO error: {e}"),
            InputError::Csv(e) => write!(f, "CSV error: {e}"),
            InputError::MissingColumn(msg) => write!(f, "missing column: {msg}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(value: std::io::Error) -> Self {
        InputError::Io(value)
    }
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        InputError::Csv(value)
    }
}

/// Header-driven table, every cell whitespace-trimmed.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_table(path: &Path) -> Result<Table, InputError> {
    parse_table(File::open(path)?)
}

/// Strict record lengths: a ragged row propagates as a CSV error.
pub fn parse_table<R: Read>(input: R) -> Result<Table, InputError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(input);

    let columns = reader
        .headers()?
        .iter()
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.trim().to_string()).collect());
    }

    Ok(Table { columns, rows })
}

/// Index of the first column matching any of `names`, in candidate
/// order. Used for the legacy field aliases.
pub fn find_column(columns: &[String], names: &[&str]) -> Option<usize> {
    for name in names {
        for (idx, col) in columns.iter().enumerate() {
            if col == name {
                return Some(idx);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn make_temp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        dir.push(format!("comp_leaderboard_input_{}_{}", std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_table_trims_headers_and_cells() {
        let dir = make_temp_dir();
        let path = dir.join("table.csv");
        fs::write(&path, "id , y_pred\n a , 1 \nb,2\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.columns, vec!["id", "y_pred"]);
        assert_eq!(table.rows[0], vec!["a", "1"]);
        assert_eq!(table.rows[1], vec!["b", "2"]);
    }

    #[test]
    fn test_read_table_handles_quoted_commas() {
        let dir = make_temp_dir();
        let path = dir.join("table.csv");
        fs::write(&path, "team,notes\nalpha,\"tuned, then pruned\"\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0][1], "tuned, then pruned");
    }

    #[test]
    fn test_read_table_missing_file_is_io_error() {
        let dir = make_temp_dir();
        let err = read_table(&dir.join("absent.csv")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_parse_table_ragged_row_is_fatal() {
        let err = parse_table("id,y_pred\na,1,extra\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Csv(_)));
    }

    #[test]
    fn test_parse_table_headers_only() {
        let table = parse_table("id,y_pred\n".as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["id", "y_pred"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_find_column_prefers_candidate_order() {
        let columns = vec![
            "team".to_string(),
            "timestamp".to_string(),
            "timestamp_utc".to_string(),
        ];
        assert_eq!(find_column(&columns, &["timestamp_utc", "timestamp"]), Some(2));
        assert_eq!(find_column(&columns, &["timestamp"]), Some(1));
        assert_eq!(find_column(&columns, &["score"]), None);
    }
}
