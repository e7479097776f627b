use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use chrono::{Local, NaiveDate};

use crate::generator::TextGenerator;
use crate::model::Match;
use crate::predictions;
use crate::state::{Delta, ProviderCommand};

pub struct ProviderOptions {
    pub match_count: usize,
    /// Fixed listing date; `None` uses the local date at request time.
    pub date: Option<NaiveDate>,
}

/// Runs model requests on a worker thread, one command at a time. The thread
/// exits when the command channel closes or the UI stops listening.
pub fn spawn_provider<G>(
    generator: G,
    options: ProviderOptions,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()>
where
    G: TextGenerator + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let delivered = match cmd {
                ProviderCommand::FetchMatches => {
                    let today = options.date.unwrap_or_else(|| Local::now().date_naive());
                    let matches = refresh_matches(&generator, today, options.match_count, &tx);
                    tx.send(Delta::SetMatches(matches)).is_ok()
                }
                ProviderCommand::Analyze {
                    generation,
                    fixture,
                } => run_analysis(&generator, generation, fixture, &tx),
            };
            if !delivered {
                break;
            }
        }
    })
}

fn refresh_matches<G: TextGenerator + ?Sized>(
    generator: &G,
    today: NaiveDate,
    count: usize,
    tx: &Sender<Delta>,
) -> Vec<Match> {
    match predictions::fetch_live_matches(generator, today, count) {
        Ok(listing) => {
            for note in listing.dropped {
                let _ = tx.send(Delta::Log(format!("[WARN] Listing row skipped: {note}")));
            }
            listing.matches
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Match listing error: {err}")));
            Vec::new()
        }
    }
}

fn run_analysis<G: TextGenerator + ?Sized>(
    generator: &G,
    generation: u64,
    fixture: Match,
    tx: &Sender<Delta>,
) -> bool {
    match predictions::analyze_match(generator, &fixture) {
        Ok(prediction) => tx
            .send(Delta::AnalysisReady {
                generation,
                fixture,
                prediction,
            })
            .is_ok(),
        Err(err) => {
            let _ = tx.send(Delta::Log(format!(
                "[WARN] Analysis error for {}: {err}",
                fixture.title()
            )));
            tx.send(Delta::AnalysisFailed {
                generation,
                message: err.user_message().to_string(),
            })
            .is_ok()
        }
    }
}
