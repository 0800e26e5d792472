use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::model::SubmissionRecord;

/// Composite ranking key. Unparseable scores rank below every numeric
/// score; unparseable timestamps rank below every parseable one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankKey {
    pub score: f64,
    pub timestamp: DateTime<FixedOffset>,
}

pub fn rank_key(record: &SubmissionRecord) -> RankKey {
    RankKey {
        score: parse_score(&record.score),
        timestamp: parse_timestamp(&record.timestamp)
            .unwrap_or_else(|| DateTime::UNIX_EPOCH.fixed_offset()),
    }
}

pub fn parse_score(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NEG_INFINITY)
}

/// Parses an ISO-8601-like timestamp. A trailing `Z` or explicit
/// offset is honored; naive date-times and bare dates are taken as
/// UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt).fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&dt).fixed_offset());
    }
    None
}

/// Stable descending sort by `(score, timestamp)`. Records with equal
/// keys keep their input order.
pub fn sort_submissions(records: &mut Vec<SubmissionRecord>) {
    let mut keyed = records
        .drain(..)
        .map(|r| (rank_key(&r), r))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| {
        match b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal) {
            Ordering::Equal => b.timestamp.cmp(&a.timestamp),
            other => other,
        }
    });
    records.extend(keyed.into_iter().map(|(_, r)| r));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team: &str, score: &str, timestamp: &str) -> SubmissionRecord {
        SubmissionRecord {
            team: team.to_string(),
            model: String::new(),
            score: score.to_string(),
            timestamp: timestamp.to_string(),
            notes: String::new(),
        }
    }

    fn teams(records: &[SubmissionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.team.as_str()).collect()
    }

    #[test]
    fn test_parse_score_numeric() {
        assert_eq!(parse_score("0.91"), 0.91);
        assert_eq!(parse_score("12"), 12.0);
        assert_eq!(parse_score("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_score_invalid_falls_back_to_neg_infinity() {
        assert_eq!(parse_score(""), f64::NEG_INFINITY);
        assert_eq!(parse_score("n/a"), f64::NEG_INFINITY);
        assert_eq!(parse_score("0.9 (dev)"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_timestamp_accepted_forms() {
        let zulu = parse_timestamp("2024-03-01T10:30:00Z").unwrap();
        assert_eq!(zulu.to_rfc3339(), "2024-03-01T10:30:00+00:00");

        let offset = parse_timestamp("2024-03-01T10:30:00+05:00").unwrap();
        assert_eq!(offset.offset().local_minus_utc(), 5 * 3600);

        let naive = parse_timestamp("2024-03-01T10:30:00").unwrap();
        assert_eq!(naive, zulu);

        let spaced = parse_timestamp("2024-03-01 10:30:00").unwrap();
        assert_eq!(spaced, zulu);

        let minutes = parse_timestamp("2024-03-01T10:30").unwrap();
        assert_eq!(minutes, zulu);

        let date_only = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_invalid_forms() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("03/01/2024").is_none());
    }

    #[test]
    fn test_sort_by_score_descending() {
        let mut records = vec![
            record("a", "10", "2024-01-01T00:00:00Z"),
            record("b", "30", "2024-01-01T00:00:00Z"),
            record("c", "20", "2024-01-01T00:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_invalid_score_ranks_last() {
        let mut records = vec![
            record("a", "not-a-number", "2024-01-02T00:00:00Z"),
            record("b", "-999", "2024-01-01T00:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["b", "a"]);
    }

    #[test]
    fn test_score_tie_breaks_on_newer_timestamp() {
        let mut records = vec![
            record("old", "0.5", "2024-01-01T00:00:00Z"),
            record("new", "0.5", "2024-02-01T00:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["new", "old"]);
    }

    #[test]
    fn test_invalid_timestamp_ranks_last_among_ties() {
        let mut records = vec![
            record("bad", "0.5", "not-a-date"),
            record("good", "0.5", "1970-01-02T00:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["good", "bad"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut records = vec![
            record("first", "0.5", "2024-01-01T00:00:00Z"),
            record("second", "0.5", "2024-01-01T00:00:00Z"),
            record("third", "0.5", "2024-01-01T00:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_offset_timestamps_compare_as_instants() {
        // 10:00+05:00 is 05:00Z, earlier than 06:00Z.
        let mut records = vec![
            record("a", "0.5", "2024-01-01T10:00:00+05:00"),
            record("b", "0.5", "2024-01-01T06:00:00Z"),
        ];
        sort_submissions(&mut records);
        assert_eq!(teams(&records), vec!["b", "a"]);
    }
}
