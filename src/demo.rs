use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::json;

use crate::extract::Shape;
use crate::generator::{GenerateRequest, TextGenerator};
use crate::model::Match;

/// Offline stand-in for the model. Answers look like real grounded replies:
/// prose around the payload, sometimes inside a code fence.
#[derive(Debug)]
pub struct DemoGenerator {
    match_count: usize,
}

impl DemoGenerator {
    /// Listings hold at most `match_count` fixtures, capped by the seed list.
    pub fn new(match_count: usize) -> Self {
        Self { match_count }
    }
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}

impl TextGenerator for DemoGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String> {
        let mut rng = rand::thread_rng();
        match request.expect {
            Shape::List => Ok(demo_listing(self.match_count, &mut rng)),
            Shape::Object => Ok(demo_analysis(request.fixture, &mut rng)),
        }
    }
}

fn demo_listing(count: usize, rng: &mut impl Rng) -> String {
    let rows: Vec<serde_json::Value> = seed_fixtures()
        .iter()
        .take(count)
        .enumerate()
        .map(|(idx, (home, away, league, time, status, score))| {
            json!({
                "id": format!("demo-{}", idx + 1),
                "homeTeam": home,
                "awayTeam": away,
                "league": league,
                "time": time,
                "status": status,
                "score": score,
            })
        })
        .collect();
    let body = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());
    if rng.gen_bool(0.5) {
        format!("Voici les matchs du jour :\n```json\n{body}\n```\nBonne journée !")
    } else {
        format!("```json\n{body}\n```")
    }
}

fn demo_analysis(fixture: Option<&Match>, rng: &mut impl Rng) -> String {
    let (home, away) = match fixture {
        Some(fixture) => (fixture.home_team.clone(), fixture.away_team.clone()),
        None => ("Domicile".to_string(), "Extérieur".to_string()),
    };
    let confidence: u8 = rng.gen_range(52..=86);
    let risk = match confidence {
        75.. => "Faible",
        62..=74 => "Moyen",
        _ => "Élevé",
    };
    let favourite = [&home, &away].choose(rng).copied().unwrap_or(&home).clone();
    let payload = json!({
        "prediction": format!("Victoire {favourite}"),
        "confidence": confidence,
        "riskLevel": risk,
        "reasoning": [
            format!("{favourite} reste sur une bonne série de résultats."),
            format!("Peu d'absences majeures annoncées pour {home} et {away}."),
        ],
        "keyStats": [
            format!("{home} : 3 victoires sur les 5 derniers matchs"),
            format!("{away} : 7 buts encaissés sur les 5 derniers matchs"),
        ],
    });
    format!("D'après les dernières informations trouvées :\n{payload}\nAnalyse indicative (mode démo).")
}

type SeedFixture = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

fn seed_fixtures() -> Vec<SeedFixture> {
    vec![
        ("Paris Saint-Germain", "Olympique de Marseille", "Ligue 1", "LIVE", "LIVE", Some("1-0")),
        ("Arsenal", "Chelsea", "Premier League", "17:30", "UPCOMING", None),
        ("Real Madrid", "FC Barcelone", "La Liga", "21:00", "UPCOMING", None),
        ("Inter", "Juventus", "Serie A", "FINI", "FINISHED", Some("2-2")),
        ("Bayern Munich", "Borussia Dortmund", "Bundesliga", "LIVE", "LIVE", Some("0-1")),
        ("Olympique Lyonnais", "AS Monaco", "Ligue 1", "19:00", "UPCOMING", None),
        ("Liverpool", "Manchester City", "Premier League", "FINI", "FINISHED", Some("3-1")),
        ("Benfica", "FC Porto", "Liga Portugal", "20:15", "UPCOMING", None),
    ]
}
