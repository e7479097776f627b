use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;

use pronostiq_terminal::extract::{ExtractError, Shape};
use pronostiq_terminal::generator::{GenerateRequest, TextGenerator, parse_generate_response};
use pronostiq_terminal::model::{Match, MatchStatus, RiskLevel};
use pronostiq_terminal::predictions::{
    ANALYSIS_SYSTEM_INSTRUCTION, ANALYSIS_USER_MESSAGE, AnalysisError, LISTING_SYSTEM_INSTRUCTION,
    RetrievalError, analyze_match, fetch_live_matches,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

struct Scripted {
    reply: Result<String, String>,
    seen: RefCell<Vec<(String, String, bool, Shape)>>,
}

impl Scripted {
    fn ok(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl TextGenerator for Scripted {
    fn generate(&self, request: &GenerateRequest<'_>) -> anyhow::Result<String> {
        self.seen.borrow_mut().push((
            request.prompt.to_string(),
            request.system_instruction.to_string(),
            request.use_search,
            request.expect,
        ));
        self.reply.clone().map_err(|msg| anyhow!(msg))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

fn fixture() -> Match {
    Match {
        id: "psg-om".to_string(),
        home_team: "Paris Saint-Germain".to_string(),
        away_team: "Olympique de Marseille".to_string(),
        league: "Ligue 1".to_string(),
        time: "21:00".to_string(),
        status: MatchStatus::Upcoming,
        score: None,
    }
}

#[test]
fn listing_parses_fenced_fixture() {
    let generator = Scripted::ok(read_fixture("listing_fenced.txt"));
    let listing = fetch_live_matches(&generator, today(), 8).expect("listing");
    assert_eq!(listing.matches.len(), 3);
    assert!(listing.dropped.is_empty());
    assert_eq!(listing.matches[0].score.as_deref(), Some("2-1"));
    assert_eq!(listing.matches[1].id, "2");
    assert_eq!(listing.matches[1].score, None);
    assert_eq!(listing.matches[2].status, MatchStatus::Finished);
}

#[test]
fn listing_request_uses_search_and_list_shape() {
    let generator = Scripted::ok("[]");
    let listing = fetch_live_matches(&generator, today(), 8).expect("empty listing");
    assert!(listing.matches.is_empty());

    let seen = generator.seen.borrow();
    assert_eq!(seen.len(), 1);
    let (prompt, system, use_search, expect) = &seen[0];
    assert!(prompt.contains("samedi 17 octobre 2026"));
    assert_eq!(system, LISTING_SYSTEM_INSTRUCTION);
    assert!(*use_search);
    assert_eq!(*expect, Shape::List);
}

#[test]
fn listing_without_json_is_a_retrieval_failure() {
    let generator = Scripted::ok("no json here");
    let err = fetch_live_matches(&generator, today(), 8)
        .err()
        .expect("no payload");
    assert!(matches!(
        err,
        RetrievalError::Extract(ExtractError::NoPayload { .. })
    ));
}

#[test]
fn listing_service_error_is_a_retrieval_failure() {
    let generator = Scripted::failing("http 503 Service Unavailable");
    let err = fetch_live_matches(&generator, today(), 8)
        .err()
        .expect("request error");
    assert!(matches!(err, RetrievalError::Request(ref msg) if msg.contains("503")));
}

#[test]
fn listing_drops_rows_without_team_names() {
    let generator = Scripted::ok(
        r#"[{"id":"1","homeTeam":"","awayTeam":"B","league":"L","time":"12:00","status":"UPCOMING"},
            {"homeTeam":"C","awayTeam":"D","league":"L","time":"LIVE","status":"live","score":""}]"#,
    );
    let listing = fetch_live_matches(&generator, today(), 8).expect("listing");
    assert_eq!(listing.matches.len(), 1);
    assert_eq!(listing.dropped.len(), 1);
    assert_eq!(listing.matches[0].id, "match-2");
    assert_eq!(listing.matches[0].status, MatchStatus::Live);
    assert_eq!(listing.matches[0].score, None);
}

#[test]
fn analysis_parses_object_wrapped_in_prose() {
    let generator = Scripted::ok(read_fixture("analysis_prose.txt"));
    let detail = analyze_match(&generator, &fixture()).expect("analysis");
    assert_eq!(detail.prediction, "Victoire Paris Saint-Germain");
    assert_eq!(detail.confidence, 74);
    assert_eq!(detail.risk_level, RiskLevel::Medium);
    assert_eq!(detail.reasoning.len(), 2);
    assert_eq!(detail.key_stats.len(), 2);

    let seen = generator.seen.borrow();
    let (prompt, system, use_search, expect) = &seen[0];
    assert!(prompt.contains("entre Paris Saint-Germain et Olympique de Marseille (Ligue 1)"));
    assert_eq!(system, ANALYSIS_SYSTEM_INSTRUCTION);
    assert!(*use_search);
    assert_eq!(*expect, Shape::Object);
}

#[test]
fn analysis_failures_are_typed_but_share_one_message() {
    let missing = analyze_match(&Scripted::ok("Désolé, aucune donnée."), &fixture())
        .expect_err("no object");
    assert!(matches!(
        missing,
        AnalysisError::Extract(ExtractError::NoPayload { .. })
    ));

    let malformed = analyze_match(&Scripted::ok("{\"prediction\": }"), &fixture())
        .expect_err("bad object");
    assert!(matches!(
        malformed,
        AnalysisError::Extract(ExtractError::Malformed(_))
    ));

    let blank = analyze_match(
        &Scripted::ok(r#"{"prediction":"  ","confidence":50,"riskLevel":"Moyen"}"#),
        &fixture(),
    )
    .expect_err("blank label");
    assert!(matches!(blank, AnalysisError::Invalid(_)));

    let request = analyze_match(&Scripted::failing("timeout"), &fixture()).expect_err("request");
    assert!(matches!(request, AnalysisError::Request(_)));

    for err in [missing, malformed, blank, request] {
        assert_eq!(err.user_message(), ANALYSIS_USER_MESSAGE);
    }
}

#[test]
fn gemini_response_text_parts_are_joined() {
    let text = parse_generate_response(&read_fixture("generate_content.json")).expect("response");
    let generator = Scripted::ok(text);
    let listing = fetch_live_matches(&generator, today(), 8).expect("listing");
    assert_eq!(listing.matches.len(), 1);
    assert_eq!(listing.matches[0].score.as_deref(), Some("1-0"));
}

#[test]
fn gemini_blocked_prompt_is_an_error() {
    let err = parse_generate_response(&read_fixture("generate_content_blocked.json"))
        .expect_err("blocked");
    assert!(err.to_string().contains("SAFETY"));
}

#[test]
fn gemini_response_without_candidates_is_empty_text() {
    let text = parse_generate_response(r#"{"candidates":[]}"#).expect("response");
    assert!(text.is_empty());
}

#[test]
fn bad_listing_rows_are_dropped_one_by_one() {
    let generator = Scripted::ok(
        r#"Voici les matchs :
[
  {"id":"ok","homeTeam":"Lens","awayTeam":"Lille","league":"Ligue 1","time":"LIVE","status":"LIVE","score":"1-1"},
  {"id":"a","homeTeam":null,"awayTeam":"Brest","league":"Ligue 1","time":"15:00","status":"UPCOMING"},
  {"id":"b","homeTeam":"Nantes","awayTeam":"Angers","league":null,"time":null,"status":"UPCOMING"},
  {"id":"c","homeTeam":"Toulouse","awayTeam":"Metz","league":"Ligue 1","time":"17:00"},
  {"id":"d","homeTeam":"Lorient","awayTeam":"Reims","league":"Ligue 1","time":"MT","status":"HALFTIME","score":"0-0"},
  {"id":"e","homeTeam":"Nice","awayTeam":"Auxerre","league":"Ligue 1","time":"-","status":"POSTPONED"},
  "Monaco - Le Havre"
]"#,
    );
    let listing = fetch_live_matches(&generator, today(), 8).expect("listing survives bad rows");

    let ids: Vec<&str> = listing.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["ok", "b", "d"]);
    assert_eq!(listing.matches[1].league, "");
    assert_eq!(listing.matches[1].time, "");
    assert_eq!(listing.matches[2].status, MatchStatus::Live);

    assert_eq!(listing.dropped.len(), 4);
    assert!(listing.dropped[0].starts_with("row 1: missing team name"));
    assert!(listing.dropped[1].starts_with("row 3: missing status"));
    assert!(listing.dropped[2].contains("POSTPONED"));
    assert!(listing.dropped[3].starts_with("row 6: not an object"));
}
