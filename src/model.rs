use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub time: String,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

impl Match {
    /// Case-insensitive substring match on either side or the league.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.home_team.to_lowercase().contains(&query)
            || self.away_team.to_lowercase().contains(&query)
            || self.league.to_lowercase().contains(&query)
    }

    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchStatus {
    #[serde(rename = "UPCOMING")]
    Upcoming,
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "FINISHED")]
    Finished,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "UPCOMING",
            MatchStatus::Live => "LIVE",
            MatchStatus::Finished => "FINISHED",
        }
    }
}

impl TryFrom<String> for MatchStatus {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.trim().to_uppercase().as_str() {
            "UPCOMING" | "SCHEDULED" | "NS" | "A VENIR" => Ok(MatchStatus::Upcoming),
            "LIVE" | "EN DIRECT" | "IN_PLAY" | "HT" | "HALFTIME" | "HALF_TIME" | "MI-TEMPS" => {
                Ok(MatchStatus::Live)
            }
            "FINISHED" | "FINI" | "FT" | "TERMINE" | "TERMINÉ" => Ok(MatchStatus::Finished),
            other => Err(format!("unknown match status {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDetail {
    pub prediction: String,
    #[serde(deserialize_with = "validate::confidence")]
    pub confidence: u8,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub reasoning: Vec<String>,
    #[serde(default)]
    pub key_stats: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RiskLevel {
    #[serde(rename = "Faible")]
    Low,
    #[serde(rename = "Moyen")]
    Medium,
    #[serde(rename = "Élevé")]
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Faible",
            RiskLevel::Medium => "Moyen",
            RiskLevel::High => "Élevé",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let folded: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'é' | 'è' | 'ê' => 'e',
                other => other,
            })
            .collect();
        match folded.as_str() {
            "faible" | "bas" | "low" => Ok(RiskLevel::Low),
            "moyen" | "modere" | "medium" => Ok(RiskLevel::Medium),
            "eleve" | "haut" | "high" => Ok(RiskLevel::High),
            _ => Err(format!("unknown risk level {raw:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    #[serde(rename = "match")]
    pub fixture: Match,
    pub prediction: PredictionDetail,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn matches_query(&self, query: &str) -> bool {
        self.fixture.matches_query(query)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}
