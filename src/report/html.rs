use crate::model::SubmissionRecord;
use crate::report::format_timestamp_display;

/// Renders the complete static page. Search, filtering, and sorting
/// are wired up client-side by `leaderboard.js`, which expects the
/// element ids and per-cell `data-key` attributes emitted here.
pub fn render_page(records: &[SubmissionRecord]) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Leaderboard</title>
  <link rel="stylesheet" href="leaderboard.css" />
</head>
<body>
  <header class="wrap">
    <div class="title-row">
      <h1>Leaderboard</h1>
      <p class="sub">Search, filter, and compare submissions. Scores are computed on the hidden test set by the official evaluator.</p>
    </div>
  </header>

  <main class="wrap">
    <section class="controls card">
      <div class="control">
        <label for="search">Search</label>
        <input id="search" type="search" placeholder="Search team, model, notes…" />
      </div>

      <div class="control">
        <label for="modelFilter">Model</label>
        <select id="modelFilter">
          <option value="all">All</option>
        </select>
      </div>

      <div class="control">
        <label for="dateFilter">Date</label>
        <select id="dateFilter">
          <option value="all">All</option>
          <option value="last30">Last 30 days</option>
          <option value="last180">Last 180 days</option>
        </select>
      </div>

      <div class="control">
        <label>Columns</label>
        <div class="checks" id="columnToggles"></div>
      </div>
    </section>

    <section class="card">
      <div class="table-wrap">
        <table id="tbl">
          <thead>
            <tr>
              <th data-key="rank" data-sort="number">Rank</th>
              <th data-key="team" data-sort="string">Team</th>
              <th data-key="model" data-sort="string">Model</th>
              <th data-key="score" data-sort="number">Score</th>
              <th data-key="timestamp_utc" data-sort="string">Date (UTC)</th>
              <th data-key="notes" data-sort="string">Notes</th>
            </tr>
          </thead>
          {table_html}
        </table>
      </div>
      <div class="foot">
        <span id="status">Loading leaderboard…</span>
      </div>
    </section>
  </main>

  <script src="leaderboard.js"></script>
</body>
</html>"#,
        table_html = render_tbody(records)
    )
}

/// Server-rendered table body. Cell text is interpolated raw.
pub fn render_tbody(records: &[SubmissionRecord]) -> String {
    if records.is_empty() {
        return concat!(
            r#"<tbody><tr><td colspan="6" style="text-align:center;padding:20px;">"#,
            "No submissions yet.</td></tr></tbody>"
        )
        .to_string();
    }

    let mut parts = Vec::with_capacity(records.len() + 2);
    parts.push("<tbody>".to_string());
    for (i, r) in records.iter().enumerate() {
        parts.push(format!(
            r#"
        <tr>
            <td class="rank" data-key="rank">{rank}</td>
            <td data-key="team">{team}</td>
            <td data-key="model">{model}</td>
            <td class="score" data-key="score">{score}</td>
            <td data-key="timestamp_utc">{date}</td>
            <td data-key="notes">{notes}</td>
        </tr>"#,
            rank = i + 1,
            team = r.team,
            model = r.model,
            score = r.score,
            date = format_timestamp_display(&r.timestamp),
            notes = r.notes,
        ));
    }
    parts.push("</tbody>".to_string());
    parts.join("\n")
}
