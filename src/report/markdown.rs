use crate::model::SubmissionRecord;
use crate::report::format_timestamp_display;

/// Renders the pipe table committed back to the repository. Rows are
/// expected to be ranked already; rank is their 1-indexed position.
pub fn render_markdown(records: &[SubmissionRecord]) -> String {
    let mut out = String::new();
    out.push_str("# Leaderboard\n");
    out.push_str("This leaderboard is **auto-updated** when a submission PR is merged.\n\n");
    out.push_str("| Rank | Team | Model | Score | Date (UTC) | Notes |\n");
    out.push_str("|---:|---|---|---:|---|---|\n");

    for (i, r) in records.iter().enumerate() {
        let model_disp = if r.model.is_empty() {
            String::new()
        } else {
            format!("`{}`", r.model)
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            r.team,
            model_disp,
            r.score,
            format_timestamp_display(&r.timestamp),
            r.notes
        ));
    }

    out
}
