use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pronostiq_terminal::extract::{Shape, extract_json};
use pronostiq_terminal::generator::parse_generate_response;
use pronostiq_terminal::history::{HISTORY_KEY, HistoryStore};
use pronostiq_terminal::model::{Match, MatchStatus, PredictionDetail};
use pronostiq_terminal::store::{KeyValueStore, MemoryStore};

fn bench_listing_extract(c: &mut Criterion) {
    c.bench_function("listing_extract", |b| {
        b.iter(|| {
            let rows: Vec<Match> = extract_json(black_box(LISTING_TXT), Shape::List).unwrap();
            black_box(rows.len());
        })
    });
}

fn bench_analysis_extract(c: &mut Criterion) {
    c.bench_function("analysis_extract", |b| {
        b.iter(|| {
            let detail: PredictionDetail =
                extract_json(black_box(ANALYSIS_TXT), Shape::Object).unwrap();
            black_box(detail.confidence);
        })
    });
}

fn bench_generate_response_parse(c: &mut Criterion) {
    c.bench_function("generate_response_parse", |b| {
        b.iter(|| {
            let text = parse_generate_response(black_box(GENERATE_JSON)).unwrap();
            black_box(text.len());
        })
    });
}

fn bench_match_filtering(c: &mut Criterion) {
    let leagues = ["Ligue 1", "Premier League", "Serie A", "La Liga", "Bundesliga"];
    let matches: Vec<Match> = (0..500)
        .map(|idx| Match {
            id: idx.to_string(),
            home_team: format!("Home {idx}"),
            away_team: format!("Away {idx}"),
            league: leagues[idx % leagues.len()].to_string(),
            time: "20:00".to_string(),
            status: MatchStatus::Upcoming,
            score: None,
        })
        .collect();

    c.bench_function("match_filtering", |b| {
        b.iter(|| {
            let hits = matches
                .iter()
                .filter(|m| m.matches_query(black_box("premier")))
                .count();
            black_box(hits);
        })
    });
}

fn bench_history_load(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, HISTORY_JSON).unwrap();

    c.bench_function("history_load", |b| {
        b.iter(|| {
            let mut history = HistoryStore::new(Box::new(store.clone()));
            let loaded = history.load().unwrap();
            black_box(history.filtered("inter").len() + loaded);
        })
    });
}

criterion_group!(
    perf,
    bench_listing_extract,
    bench_analysis_extract,
    bench_generate_response_parse,
    bench_match_filtering,
    bench_history_load
);
criterion_main!(perf);

static LISTING_TXT: &str = include_str!("../tests/fixtures/listing_fenced.txt");
static ANALYSIS_TXT: &str = include_str!("../tests/fixtures/analysis_prose.txt");
static GENERATE_JSON: &str = include_str!("../tests/fixtures/generate_content.json");
static HISTORY_JSON: &str = include_str!("../tests/fixtures/history_store.json");
