pub mod rank;

/// One leaderboard entry, fields kept as the trimmed source text.
/// Score and timestamp are only interpreted at ranking and display
/// time, so unparseable values survive into the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub team: String,
    pub model: String,
    pub score: String,
    pub timestamp: String,
    pub notes: String,
}
