//! The two model-backed operations: today's match listing and a single
//! match analysis. Both ask for JSON, then recover it with [`extract`].
//!
//! [`extract`]: crate::extract

use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::Value;
use thiserror::Error;

use crate::extract::{ExtractError, Shape, extract_json};
use crate::generator::{GenerateRequest, TextGenerator};
use crate::model::{Match, PredictionDetail};
use crate::validate;

pub const LISTING_SYSTEM_INSTRUCTION: &str = "Tu es une API de données sportives. Tu renvoies uniquement du JSON valide basé sur des recherches web réelles. Pas de texte avant ou après.";
pub const ANALYSIS_SYSTEM_INSTRUCTION: &str = "Tu es un expert en pronostics sportifs professionnel. Sois précis, objectif et base-toi sur les dernières actualités trouvées sur le web.";

pub const ANALYSIS_USER_MESSAGE: &str =
    "Impossible de récupérer les données d'analyse. Veuillez réessayer.";

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("match listing request failed: {0}")]
    Request(String),
    #[error("match listing unreadable: {0}")]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Request(String),
    #[error("analysis unreadable: {0}")]
    Extract(#[from] ExtractError),
    #[error("analysis rejected: {0}")]
    Invalid(String),
}

impl AnalysisError {
    /// The single message shown in the detail view, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        ANALYSIS_USER_MESSAGE
    }
}

pub struct Listing {
    pub matches: Vec<Match>,
    pub dropped: Vec<String>,
}

pub fn fetch_live_matches<G: TextGenerator + ?Sized>(
    generator: &G,
    today: NaiveDate,
    count: usize,
) -> Result<Listing, RetrievalError> {
    let prompt = listing_prompt(today, count);
    let raw = generator
        .generate(&GenerateRequest {
            prompt: &prompt,
            system_instruction: LISTING_SYSTEM_INSTRUCTION,
            use_search: true,
            expect: Shape::List,
            fixture: None,
        })
        .map_err(|err| RetrievalError::Request(format!("{err:#}")))?;
    let rows: Vec<Value> = extract_json(&raw, Shape::List)?;
    let cleaned = validate::clean_listing(rows);
    Ok(Listing {
        matches: cleaned.matches,
        dropped: cleaned.dropped,
    })
}

pub fn analyze_match<G: TextGenerator + ?Sized>(
    generator: &G,
    fixture: &Match,
) -> Result<PredictionDetail, AnalysisError> {
    let prompt = analysis_prompt(fixture);
    let raw = generator
        .generate(&GenerateRequest {
            prompt: &prompt,
            system_instruction: ANALYSIS_SYSTEM_INSTRUCTION,
            use_search: true,
            expect: Shape::Object,
            fixture: Some(fixture),
        })
        .map_err(|err| AnalysisError::Request(format!("{err:#}")))?;
    let detail: PredictionDetail = extract_json(&raw, Shape::Object)?;
    validate::check_prediction(detail).map_err(AnalysisError::Invalid)
}

pub fn listing_prompt(today: NaiveDate, count: usize) -> String {
    format!(
        r#"Trouve les {count} matchs de football les plus importants qui se jouent aujourd'hui ({date}).
Cherche les scores en direct si le match a commencé.

Renvoie UNIQUEMENT un tableau JSON brut (sans markdown).
Structure attendue pour chaque objet du tableau :
{{
  "id": "chaine unique",
  "homeTeam": "Nom équipe domicile",
  "awayTeam": "Nom équipe extérieur",
  "league": "Nom de la ligue",
  "time": "Heure du match (HH:MM) ou 'LIVE' ou 'FINI'",
  "status": "UPCOMING" ou "LIVE" ou "FINISHED",
  "score": "X-Y" (ou null si pas commencé)
}}"#,
        date = french_date(today)
    )
}

pub fn analysis_prompt(fixture: &Match) -> String {
    format!(
        r#"Analyse le match de football entre {home} et {away} ({league}).

Utilise Google Search pour trouver :
1. La forme récente des deux équipes (5 derniers matchs).
2. Les blessés majeurs ou suspensions pour ce match précis.
3. L'historique des confrontations directes (H2H).
4. Le classement actuel.

Basé sur ces FAITS RÉELS, fournis un pronostic.

Renvoie UNIQUEMENT un objet JSON brut (sans markdown) avec cette structure :
{{
  "prediction": "Ton pronostic principal (ex: Victoire Arsenal)",
  "confidence": 75,
  "riskLevel": "Faible" | "Moyen" | "Élevé",
  "reasoning": ["Raison 1 basée sur la forme", "Raison 2 basée sur les blessures"],
  "keyStats": ["Statistique clé 1", "Statistique clé 2"]
}}
La confiance est un nombre entre 0 et 100."#,
        home = fixture.home_team,
        away = fixture.away_team,
        league = fixture.league,
    )
}

/// Renders e.g. `samedi 17 octobre 2026`.
pub fn french_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ];
    let weekday = match date.weekday() {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    };
    let month = MONTHS[date.month0() as usize];
    format!("{weekday} {} {month} {}", date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{french_date, listing_prompt};

    #[test]
    fn french_date_renders_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        assert_eq!(french_date(date), "samedi 17 octobre 2026");
    }

    #[test]
    fn listing_prompt_names_count_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).expect("valid date");
        let prompt = listing_prompt(date, 5);
        assert!(prompt.contains("les 5 matchs"));
        assert!(prompt.contains("lundi 3 août 2026"));
    }
}
