use std::path::PathBuf;

/// Input and output locations for the leaderboard renderer.
///
/// The CLI always runs with the defaults below, relative to the
/// repository root the tool is invoked from; tests inject temporary
/// paths instead.
#[derive(Debug, Clone)]
pub struct RenderPaths {
    pub source_csv: PathBuf,
    pub markdown_out: PathBuf,
    pub html_out: PathBuf,
}

impl Default for RenderPaths {
    fn default() -> Self {
        RenderPaths {
            source_csv: PathBuf::from("leaderboard/leaderboard.csv"),
            markdown_out: PathBuf::from("leaderboard/leaderboard.md"),
            html_out: PathBuf::from("docs/leaderboard.html"),
        }
    }
}
