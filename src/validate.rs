//! Field-level checks on model-provided payloads.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{Match, MatchStatus, PredictionDetail};

/// Accepts a JSON number or numeric string (`"75"`, `"75%"`) and clamps it to 0..=100.
pub fn confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    let Some(raw) = raw.filter(|v| v.is_finite()) else {
        return Err(D::Error::custom(format!("confidence is not a number: {value}")));
    };
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

pub struct CleanListing {
    pub matches: Vec<Match>,
    pub dropped: Vec<String>,
}

/// Converts listing rows one by one. A row without both team names, without a
/// known status, or that is not an object is dropped with a note; the rest
/// are kept. Blank ids are filled from the row position.
pub fn clean_listing(rows: Vec<Value>) -> CleanListing {
    let mut matches = Vec::with_capacity(rows.len());
    let mut dropped = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match listing_row(row, idx) {
            Ok(fixture) => matches.push(fixture),
            Err(reason) => dropped.push(format!("row {idx}: {reason}")),
        }
    }
    CleanListing { matches, dropped }
}

fn listing_row(row: &Value, idx: usize) -> Result<Match, String> {
    if !row.is_object() {
        return Err("not an object".to_string());
    }
    let home_team = text_field(row, "homeTeam");
    let away_team = text_field(row, "awayTeam");
    if home_team.is_empty() || away_team.is_empty() {
        return Err("missing team name".to_string());
    }
    let status = match row.get("status").and_then(Value::as_str) {
        Some(raw) => MatchStatus::try_from(raw.to_string())?,
        None => return Err("missing status".to_string()),
    };
    let id = text_field(row, "id");
    let score = text_field(row, "score");
    Ok(Match {
        id: if id.is_empty() {
            format!("match-{}", idx + 1)
        } else {
            id
        },
        home_team,
        away_team,
        league: text_field(row, "league"),
        time: text_field(row, "time"),
        status,
        score: (!score.is_empty()).then_some(score),
    })
}

/// Trimmed string or number field; null, missing and other types read as "".
fn text_field(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

pub fn check_prediction(detail: PredictionDetail) -> Result<PredictionDetail, String> {
    if detail.prediction.trim().is_empty() {
        return Err("prediction label is empty".to_string());
    }
    Ok(PredictionDetail {
        reasoning: non_blank(detail.reasoning),
        key_stats: non_blank(detail.key_stats),
        ..detail
    })
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect()
}
