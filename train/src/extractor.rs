//! Pulls finetuning examples out of loaded game records.
//!
//! Werewolf examples come from a game's `eliminate` turn; villager examples
//! come from bid turns whose prompt addresses the Villager.

use serde_json::{Map, Value};
use shared::core::constants::VILLAGER_MARKER;
use shared::{DatasetError, Example, ExampleKind, ExampleSet, Record};
use tracing::debug;

use crate::formatter::format_conversation;

/// Extracts every example from `games`, preserving game, round and entry order.
///
/// Fails only when a `bid` block is present but not shaped as rounds of
/// `[player, entry]` pairs.
pub fn extract_games(games: &[Record]) -> Result<ExampleSet, DatasetError> {
    let mut examples = ExampleSet::new();
    for (index, game) in games.iter().enumerate() {
        extract_game(index, game, &mut examples)?;
    }
    Ok(examples)
}

/// Appends the examples of a single game to `out`.
pub fn extract_game(index: usize, game: &Record, out: &mut ExampleSet) -> Result<(), DatasetError> {
    if let Some(example) = eliminate_example(game) {
        out.push(ExampleKind::Werewolf, example);
    }
    extract_bids(index, game, out)
}

fn eliminate_example(game: &Record) -> Option<Example> {
    let turn = game.get("eliminate")?.as_object()?;
    let prompt = non_empty_str(turn, "prompt")?;
    let response = non_empty_str(turn, "raw_resp")?;
    Some(Example::new(format_conversation(prompt, response)))
}

fn extract_bids(index: usize, game: &Record, out: &mut ExampleSet) -> Result<(), DatasetError> {
    let rounds = match game.get("bid") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(rounds)) => rounds,
        Some(other) => {
            return Err(DatasetError::structure(
                format!("game[{index}].bid"),
                format!("expected an array of rounds, found {}", json_kind(other)),
            ))
        }
    };

    for (round_idx, round) in rounds.iter().enumerate() {
        let actions = round.as_array().ok_or_else(|| {
            DatasetError::structure(
                format!("game[{index}].bid[{round_idx}]"),
                format!("expected an array of bids, found {}", json_kind(round)),
            )
        })?;

        for (entry_idx, action) in actions.iter().enumerate() {
            let (player, entry) = bid_pair(action).map_err(|reason| {
                DatasetError::structure(format!("game[{index}].bid[{round_idx}][{entry_idx}]"), reason)
            })?;

            let prompt = str_field(entry, "prompt");
            let response = str_field(entry, "raw_resp");
            if prompt.contains(VILLAGER_MARKER) && !prompt.is_empty() && !response.is_empty() {
                debug!("game {index} round {round_idx}: villager bid from {}", player_label(player));
                out.push(ExampleKind::Villager, Example::new(format_conversation(prompt, response)));
            }
        }
    }

    Ok(())
}

/// Splits a `[player_name, entry]` bid into its parts.
fn bid_pair(action: &Value) -> Result<(&Value, &Map<String, Value>), String> {
    let pair = match action {
        Value::Array(pair) => pair,
        other => return Err(format!("expected a [player, entry] pair, found {}", json_kind(other))),
    };
    match pair.as_slice() {
        [player, Value::Object(entry)] => Ok((player, entry)),
        [_, other] => Err(format!("expected the bid entry to be an object, found {}", json_kind(other))),
        _ => Err(format!("expected a [player, entry] pair, found {} element(s)", pair.len())),
    }
}

fn str_field<'a>(entry: &'a Map<String, Value>, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or("")
}

fn non_empty_str<'a>(entry: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    Some(str_field(entry, key)).filter(|s| !s.is_empty())
}

fn player_label(player: &Value) -> String {
    match player {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
