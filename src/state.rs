use std::collections::VecDeque;

use crate::history::HistoryStore;
use crate::model::{HistoryItem, Match, PredictionDetail};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Matches,
    History,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Loading,
    Ready(PredictionDetail),
    Failed(String),
}

/// The match currently shown in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub fixture: Match,
    pub analysis: AnalysisState,
    /// Opened from a stored history entry rather than a fresh request.
    pub from_history: bool,
    pub scroll: u16,
}

#[derive(Debug)]
pub struct AppState {
    pub tab: Tab,
    pub search: String,
    pub search_active: bool,
    pub matches: Vec<Match>,
    pub matches_loading: bool,
    pub selected: usize,
    pub history: HistoryStore,
    pub history_selected: usize,
    pub detail: Option<Detail>,
    /// Bumped for every analysis request or detail change; replies carrying
    /// an older value are not displayed.
    pub analysis_generation: u64,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub confirm_clear: bool,
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetMatches(Vec<Match>),
    AnalysisReady {
        generation: u64,
        fixture: Match,
        prediction: PredictionDetail,
    },
    AnalysisFailed {
        generation: u64,
        message: String,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchMatches,
    Analyze { generation: u64, fixture: Match },
}

impl AppState {
    pub fn new(history: HistoryStore) -> Self {
        Self {
            tab: Tab::Matches,
            search: String::new(),
            search_active: false,
            matches: Vec::with_capacity(16),
            matches_loading: false,
            selected: 0,
            history,
            history_selected: 0,
            detail: None,
            analysis_generation: 0,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
            confirm_clear: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn filtered_matches(&self) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.matches_query(&self.search))
            .collect()
    }

    pub fn filtered_history(&self) -> Vec<&HistoryItem> {
        self.history.filtered(&self.search)
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.filtered_matches().get(self.selected).copied()
    }

    pub fn selected_history_item(&self) -> Option<&HistoryItem> {
        self.filtered_history().get(self.history_selected).copied()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.confirm_clear = false;
        }
    }

    pub fn cycle_tab(&mut self) {
        let next = match self.tab {
            Tab::Matches => Tab::History,
            Tab::History => Tab::Matches,
        };
        self.set_tab(next);
    }

    fn visible_len(&self) -> usize {
        match self.tab {
            Tab::Matches => self.filtered_matches().len(),
            Tab::History => self.filtered_history().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.tab {
            Tab::Matches => &mut self.selected,
            Tab::History => &mut self.history_selected,
        }
    }

    pub fn select_next(&mut self) {
        let total = self.visible_len();
        let cursor = self.cursor_mut();
        if total == 0 {
            *cursor = 0;
            return;
        }
        *cursor = (*cursor + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.visible_len();
        let cursor = self.cursor_mut();
        if total == 0 {
            *cursor = 0;
        } else if *cursor == 0 {
            *cursor = total - 1;
        } else {
            *cursor -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let matches_total = self.filtered_matches().len();
        let history_total = self.filtered_history().len();
        self.selected = self.selected.min(matches_total.saturating_sub(1));
        self.history_selected = self.history_selected.min(history_total.saturating_sub(1));
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.selected = 0;
        self.history_selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.clamp_selection();
    }

    /// Marks the listing as loading. Returns false if a refresh is already running.
    pub fn begin_matches_refresh(&mut self) -> bool {
        if self.matches_loading {
            return false;
        }
        self.matches_loading = true;
        true
    }

    /// Opens the detail view in the loading state and returns the request token.
    pub fn begin_analysis(&mut self, fixture: Match) -> u64 {
        self.analysis_generation += 1;
        self.detail = Some(Detail {
            fixture,
            analysis: AnalysisState::Loading,
            from_history: false,
            scroll: 0,
        });
        self.analysis_generation
    }

    pub fn open_history_item(&mut self, item: &HistoryItem) {
        self.analysis_generation += 1;
        self.detail = Some(Detail {
            fixture: item.fixture.clone(),
            analysis: AnalysisState::Ready(item.prediction.clone()),
            from_history: true,
            scroll: 0,
        });
    }

    pub fn open_selected_history_item(&mut self) -> bool {
        let Some(item) = self.selected_history_item().cloned() else {
            return false;
        };
        self.open_history_item(&item);
        true
    }

    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.analysis_generation += 1;
        }
    }

    pub fn scroll_detail(&mut self, down: bool) {
        if let Some(detail) = self.detail.as_mut() {
            detail.scroll = if down {
                detail.scroll.saturating_add(1)
            } else {
                detail.scroll.saturating_sub(1)
            };
        }
    }

    pub fn delete_selected_history(&mut self) {
        let Some(item) = self.selected_history_item() else {
            return;
        };
        let id = item.id.clone();
        let title = item.fixture.title();
        match self.history.delete(&id) {
            Ok(true) => self.push_log(format!("[INFO] Deleted prediction for {title}")),
            Ok(false) => {}
            Err(err) => self.push_log(format!("[WARN] History write error: {err:#}")),
        }
        self.clamp_selection();
    }

    pub fn request_clear_history(&mut self) {
        if !self.history.is_empty() {
            self.confirm_clear = true;
        }
    }

    pub fn confirm_clear_history(&mut self) {
        if !self.confirm_clear {
            return;
        }
        self.confirm_clear = false;
        match self.history.clear() {
            Ok(()) => self.push_log("[INFO] History cleared"),
            Err(err) => self.push_log(format!("[WARN] History clear error: {err:#}")),
        }
        self.history_selected = 0;
    }

    pub fn cancel_clear_history(&mut self) {
        self.confirm_clear = false;
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetMatches(matches) => {
            let selected_id = state.selected_match().map(|m| m.id.clone());
            state.matches = matches;
            state.matches_loading = false;
            state.selected = selected_id
                .and_then(|id| state.filtered_matches().iter().position(|m| m.id == id))
                .unwrap_or(0);
            state.clamp_selection();
            state.push_log(format!("[INFO] {} matches loaded", state.matches.len()));
        }
        Delta::AnalysisReady {
            generation,
            fixture,
            prediction,
        } => {
            let title = fixture.title();
            // Completed analyses are recorded even when nobody is looking at them anymore.
            match state.history.add(fixture, prediction.clone()) {
                Ok(item) => {
                    // Keep the cursor on the same entry after the prepend.
                    if state.tab == Tab::History
                        && item.matches_query(&state.search)
                        && state.filtered_history().len() > 1
                    {
                        state.history_selected += 1;
                    }
                }
                Err(err) => state.push_log(format!("[WARN] History write error: {err:#}")),
            }
            state.clamp_selection();

            if generation != state.analysis_generation {
                state.push_log(format!("[INFO] Stale analysis for {title} not displayed"));
                return;
            }
            if let Some(detail) = state.detail.as_mut() {
                detail.analysis = AnalysisState::Ready(prediction);
            }
            state.push_log(format!("[INFO] Analysis ready: {title}"));
        }
        Delta::AnalysisFailed {
            generation,
            message,
        } => {
            if generation != state.analysis_generation {
                return;
            }
            if let Some(detail) = state.detail.as_mut() {
                detail.analysis = AnalysisState::Failed(message);
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
