//! Format-tolerant game log loading.
//!
//! A log file may hold a JSON array of games, a single game object, or one
//! game object per line (JSONL). The format is sniffed from the content,
//! never from the file name.

use serde_json::Value;
use shared::{DatasetError, Record};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Which layout a log file turned out to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `[ {...}, {...} ]`
    Array,
    /// A single `{...}` document
    Object,
    /// One JSON object per line
    Lines,
}

/// Games parsed out of one file, plus bookkeeping for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub format: LogFormat,
    pub games: Vec<Record>,
    /// Array elements or lines that were not JSON objects
    pub skipped: usize,
}

/// Reads `path` and returns every game object it contains, in file order.
///
/// Malformed content never fails the load; only I/O does.
pub fn load_games(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    let outcome = parse_games(&raw);

    if outcome.skipped > 0 {
        warn!(
            "{}: skipped {} non-object entries ({:?} layout)",
            path.display(),
            outcome.skipped,
            outcome.format
        );
    }
    debug!(
        "{}: loaded {} game(s) as {:?}",
        path.display(),
        outcome.games.len(),
        outcome.format
    );

    Ok(outcome.games)
}

/// Sniffs the layout of `raw` and extracts its game objects.
///
/// Stages run in order and the first one that recognises the content wins:
/// bracketed array, single object, then line-by-line.
pub fn parse_games(raw: &str) -> LoadOutcome {
    let trimmed = raw.trim();

    if let Some(outcome) = parse_array(trimmed) {
        return outcome;
    }
    if let Some(outcome) = parse_object(trimmed) {
        return outcome;
    }
    parse_lines(trimmed)
}

fn parse_array(trimmed: &str) -> Option<LoadOutcome> {
    if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
        return None;
    }

    let items = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => items,
        _ => return None,
    };

    let total = items.len();
    let games: Vec<Record> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(game) => Some(game),
            _ => None,
        })
        .collect();

    Some(LoadOutcome {
        format: LogFormat::Array,
        skipped: total - games.len(),
        games,
    })
}

fn parse_object(trimmed: &str) -> Option<LoadOutcome> {
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(game)) => Some(LoadOutcome {
            format: LogFormat::Object,
            games: vec![game],
            skipped: 0,
        }),
        _ => None,
    }
}

fn parse_lines(trimmed: &str) -> LoadOutcome {
    let mut games = Vec::new();
    let mut skipped = 0;

    for (line_num, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(game)) => games.push(game),
            Ok(_) => {
                debug!("line {}: not a JSON object, skipping", line_num + 1);
                skipped += 1;
            }
            Err(e) => {
                debug!("line {}: skipping malformed entry: {}", line_num + 1, e);
                skipped += 1;
            }
        }
    }

    LoadOutcome {
        format: LogFormat::Lines,
        games,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn array_of_objects_round_trips_in_order() {
        let games = json!([{"id": 1, "bid": []}, {"id": 2}, {"id": 3, "eliminate": {}}]);
        let outcome = parse_games(&serde_json::to_string_pretty(&games).unwrap());

        assert_eq!(outcome.format, LogFormat::Array);
        assert_eq!(outcome.skipped, 0);
        let expected: Vec<Record> = games.as_array().unwrap().iter().cloned().map(record).collect();
        assert_eq!(outcome.games, expected);
    }

    #[test]
    fn array_drops_non_objects() {
        let outcome = parse_games(r#"[{"id": 1}, 7, "x", null, [1], {"id": 2}]"#);

        assert_eq!(outcome.format, LogFormat::Array);
        assert_eq!(outcome.games.len(), 2);
        assert_eq!(outcome.skipped, 4);
        assert_eq!(outcome.games[1]["id"], json!(2));
    }

    #[test]
    fn single_object_is_wrapped() {
        let outcome = parse_games("\n\n  {\"eliminate\": {\"prompt\": \"P\"}}  \n");

        assert_eq!(outcome.format, LogFormat::Object);
        assert_eq!(outcome.games, vec![record(json!({"eliminate": {"prompt": "P"}}))]);
    }

    #[test]
    fn top_level_scalar_yields_nothing() {
        let outcome = parse_games("42");
        assert!(outcome.games.is_empty());
        assert_eq!(outcome.format, LogFormat::Lines);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn jsonl_skips_bad_lines() {
        let raw = "{\"id\": 1}\n\nnot json\n[1, 2]\n   {\"id\": 2}\r\n{\"id\": \n\"oops\"\n{\"id\": 3}\n";
        let outcome = parse_games(raw);

        assert_eq!(outcome.format, LogFormat::Lines);
        let ids: Vec<&Value> = outcome.games.iter().map(|g| &g["id"]).collect();
        assert_eq!(ids, vec![&json!(1), &json!(2), &json!(3)]);
        assert_eq!(outcome.skipped, 4);
    }

    #[test]
    fn bracketed_jsonl_falls_through_to_lines() {
        // Starts with '[' and ends with ']' but is not one JSON document
        let raw = "[1]\n{\"id\": 1}\n[2]";
        let outcome = parse_games(raw);

        assert_eq!(outcome.format, LogFormat::Lines);
        assert_eq!(outcome.games, vec![record(json!({"id": 1}))]);
    }

    #[test]
    fn empty_content_is_empty() {
        let outcome = parse_games("   \n\t ");
        assert!(outcome.games.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn load_games_reads_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("games.json");
        std::fs::write(&path, "{\"id\": 1}\n{\"id\": 2}\n").unwrap();

        let games = load_games(&path).unwrap();
        assert_eq!(games.len(), 2);
    }

    #[test]
    fn load_games_missing_file_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = load_games(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Io { ref path, .. } if path.ends_with("missing.json")));
    }

    proptest! {
        #[test]
        fn jsonl_keeps_exactly_the_object_lines(
            lines in proptest::collection::vec(
                prop_oneof![
                    (0u32..1000).prop_map(|n| (true, format!("{{\"id\": {n}}}"))),
                    (0u32..1000).prop_map(|n| (false, n.to_string())),
                    Just((false, "{broken".to_string())),
                    Just((false, "[\"a\"]".to_string())),
                ],
                0..20,
            )
        ) {
            // Lead with an object line so the content is never a lone JSON value
            let mut body = vec!["{\"id\": -1}".to_string()];
            body.extend(lines.iter().map(|(_, line)| line.clone()));
            body.push("{\"id\": -2}".to_string());
            let raw = body.join("\n");

            let outcome = parse_games(&raw);

            let mut expected: Vec<Value> = vec![json!(-1)];
            expected.extend(
                lines
                    .iter()
                    .filter(|(valid, _)| *valid)
                    .map(|(_, line)| serde_json::from_str::<Value>(line).unwrap()["id"].clone()),
            );
            expected.push(json!(-2));

            let ids: Vec<Value> = outcome.games.iter().map(|g| g["id"].clone()).collect();
            prop_assert_eq!(outcome.format, LogFormat::Lines);
            prop_assert_eq!(ids, expected);
        }
    }
}
