use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use pronostiq_terminal::config::AppConfig;
use pronostiq_terminal::demo::DemoGenerator;
use pronostiq_terminal::generator::{GeminiClient, TextGenerator};
use pronostiq_terminal::history::HistoryStore;
use pronostiq_terminal::model::{HistoryItem, Match, MatchStatus, PredictionDetail, RiskLevel};
use pronostiq_terminal::provider::{ProviderOptions, spawn_provider};
use pronostiq_terminal::state::{
    AnalysisState, AppState, Delta, Detail, ProviderCommand, Tab, apply_delta,
};
use pronostiq_terminal::store::{FileStore, KeyValueStore, MemoryStore};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    source_label: String,
}

impl App {
    fn new(
        state: AppState,
        cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
        source_label: String,
    ) -> Self {
        Self {
            state,
            should_quit: false,
            cmd_tx,
            source_label,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            self.on_search_key(key);
            return;
        }
        if self.state.confirm_clear {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.state.confirm_clear_history(),
                _ => self.state.cancel_clear_history(),
            }
            return;
        }
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }
        if self.state.detail.is_some() {
            self.on_detail_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.state.cycle_tab(),
            KeyCode::Char('1') => self.state.set_tab(Tab::Matches),
            KeyCode::Char('2') => self.state.set_tab(Tab::History),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('/') => self.state.search_active = true,
            KeyCode::Esc => self.state.clear_search(),
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_matches(true),
            KeyCode::Enter | KeyCode::Char('d') => match self.state.tab {
                Tab::Matches => self.request_analysis(),
                Tab::History => {
                    if !self.state.open_selected_history_item() {
                        self.state.push_log("[INFO] No prediction selected");
                    }
                }
            },
            KeyCode::Char('x') | KeyCode::Delete if self.state.tab == Tab::History => {
                self.state.delete_selected_history();
            }
            KeyCode::Char('C') if self.state.tab == Tab::History => {
                self.state.request_clear_history();
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.search_active = false,
            KeyCode::Backspace => self.state.pop_search_char(),
            KeyCode::Char(ch) => self.state.push_search_char(ch),
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Enter => self.state.close_detail(),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_detail(true),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_detail(false),
            KeyCode::Char('r') | KeyCode::Char('R') => self.retry_analysis(),
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }

    fn request_matches(&mut self, announce: bool) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Match listing unavailable");
            return;
        };
        if !self.state.begin_matches_refresh() {
            if announce {
                self.state.push_log("[INFO] Match listing already loading");
            }
            return;
        }
        if tx.send(ProviderCommand::FetchMatches).is_err() {
            self.state.matches_loading = false;
            self.state.push_log("[WARN] Match listing request failed");
        } else if announce {
            self.state.push_log("[INFO] Match listing request sent");
        }
    }

    fn request_analysis(&mut self) {
        let Some(fixture) = self.state.selected_match().cloned() else {
            self.state.push_log("[INFO] No match selected");
            return;
        };
        self.send_analysis(fixture);
    }

    fn retry_analysis(&mut self) {
        let Some(detail) = &self.state.detail else {
            return;
        };
        if detail.from_history || !matches!(detail.analysis, AnalysisState::Failed(_)) {
            return;
        }
        let fixture = detail.fixture.clone();
        self.send_analysis(fixture);
    }

    fn send_analysis(&mut self, fixture: Match) {
        let title = fixture.title();
        let generation = self.state.begin_analysis(fixture.clone());
        let Some(tx) = &self.cmd_tx else {
            apply_delta(
                &mut self.state,
                Delta::AnalysisFailed {
                    generation,
                    message: "Analysis unavailable".to_string(),
                },
            );
            return;
        };
        if tx
            .send(ProviderCommand::Analyze {
                generation,
                fixture,
            })
            .is_err()
        {
            self.state.push_log("[WARN] Analysis request failed");
            apply_delta(
                &mut self.state,
                Delta::AnalysisFailed {
                    generation,
                    message: "Analysis worker stopped".to_string(),
                },
            );
        } else {
            self.state.push_log(format!("[INFO] Analyzing {title}"));
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = AppConfig::from_env();

    let mut startup_logs = Vec::new();
    let history = open_history(&config, &mut startup_logs);
    let mut state = AppState::new(history);
    for line in startup_logs {
        state.push_log(line);
    }

    let (generator, source_label) = build_generator(&config, &mut state);
    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_provider(
        generator,
        ProviderOptions {
            match_count: config.match_count,
            date: None,
        },
        tx,
        cmd_rx,
    );

    let mut app = App::new(state, Some(cmd_tx), source_label);
    app.request_matches(false);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn open_history(config: &AppConfig, logs: &mut Vec<String>) -> HistoryStore {
    let mut quarantine = None;
    let store: Box<dyn KeyValueStore + Send> = match config
        .store_path
        .clone()
        .map(FileStore::new)
        .or_else(FileStore::default_location)
    {
        Some(store) => {
            logs.push(format!("[INFO] History file: {}", store.path().display()));
            if store.verify().is_err() {
                quarantine = Some(store.quarantine_path());
            }
            Box::new(store)
        }
        None => {
            logs.push("[WARN] No data directory; history kept in memory only".to_string());
            Box::new(MemoryStore::new())
        }
    };
    let mut history = HistoryStore::new(store);
    match history.load() {
        Ok(count) => logs.push(format!("[INFO] {count} saved predictions")),
        Err(err) => {
            logs.push(format!("[WARN] History load error: {err:#}"));
            if let Some(path) = quarantine {
                logs.push(format!(
                    "[WARN] Unreadable history file is moved to {} on the next save",
                    path.display()
                ));
            }
        }
    }
    history
}

fn build_generator(
    config: &AppConfig,
    state: &mut AppState,
) -> (Box<dyn TextGenerator + Send>, String) {
    if config.use_demo() {
        state.push_log("[INFO] No GEMINI_API_KEY set; using demo data");
        return (Box::new(DemoGenerator::new(config.match_count)), "DEMO".to_string());
    }
    match GeminiClient::from_config(config) {
        Ok(client) => {
            let label = client.model().to_string();
            (Box::new(client), label)
        }
        Err(err) => {
            state.push_log(format!("[WARN] Gemini client error: {err:#}; using demo data"));
            (Box::new(DemoGenerator::new(config.match_count)), "DEMO".to_string())
        }
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(app))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.tab {
        Tab::Matches => render_matches(frame, chunks[1], &app.state),
        Tab::History => render_history(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[3]);

    if let Some(detail) = &app.state.detail {
        render_detail(frame, frame.size(), detail);
    }
    if app.state.confirm_clear {
        render_confirm_clear(frame, frame.size(), app.state.history.len());
    }
    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(app: &App) -> String {
    let state = &app.state;
    let tab = match state.tab {
        Tab::Matches => format!(
            "[MATCHES {}]  history {}",
            state.filtered_matches().len(),
            state.filtered_history().len()
        ),
        Tab::History => format!(
            "matches {}  [HISTORY {}]",
            state.filtered_matches().len(),
            state.filtered_history().len()
        ),
    };
    let cursor = if state.search_active { "_" } else { "" };
    let search = if state.search.is_empty() && !state.search_active {
        "Search: -".to_string()
    } else {
        format!("Search: {}{cursor}", state.search)
    };
    let loading = if state.matches_loading { " | Loading..." } else { "" };
    let line1 = format!(" PRONOSTIQ | {tab} | {search}{loading}");
    let line2 = format!(" Source: {} + web search", app.source_label);
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    if state.search_active {
        return "Type to filter | Backspace Delete | Enter/Esc Done".to_string();
    }
    if state.detail.is_some() {
        return "b/Esc Back | j/k Scroll | r Retry | ? Help | q Quit".to_string();
    }
    match state.tab {
        Tab::Matches => {
            "Tab/1/2 Switch | j/k/↑/↓ Move | Enter Analyze | r Refresh | / Search | ? Help | q Quit"
                .to_string()
        }
        Tab::History => {
            "Tab/1/2 Switch | j/k/↑/↓ Move | Enter View | x Delete | C Clear all | / Search | q Quit"
                .to_string()
        }
    }
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = match_columns();
    render_header_row(
        frame,
        sections[0],
        &widths,
        &["Time", "Status", "Match", "Score", "League"],
    );

    let list_area = sections[1];
    let rows = state.filtered_matches();
    if rows.is_empty() {
        let text = if state.matches_loading {
            "Searching today's matches..."
        } else if state.matches.is_empty() {
            "No matches found. Press r to retry."
        } else {
            "No match fits this search"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.selected, rows.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let selected = idx == state.selected;
        let row_style = row_style(selected);
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let m = rows[idx];
        let score = m.score.clone().unwrap_or_else(|| "-".to_string());
        render_cell_text(frame, cols[0], &m.time, row_style);
        render_cell_text(frame, cols[1], m.status.label(), status_style(m.status, row_style));
        render_cell_text(frame, cols[2], &m.title(), row_style);
        render_cell_text(frame, cols[3], &score, row_style);
        render_cell_text(frame, cols[4], &m.league, row_style);
    }
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = history_columns();
    render_header_row(
        frame,
        sections[0],
        &widths,
        &["Saved", "Match", "Prediction", "Conf", "Risk"],
    );

    let list_area = sections[1];
    let rows = state.filtered_history();
    if rows.is_empty() {
        let text = if state.history.is_empty() {
            "No saved predictions yet"
        } else {
            "No prediction fits this search"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.history_selected, rows.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let selected = idx == state.history_selected;
        let style = row_style(selected);
        if selected {
            frame.render_widget(Block::default().style(style), row_area);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let item: &HistoryItem = rows[idx];
        let conf = format!("{}%", item.prediction.confidence);
        render_cell_text(frame, cols[0], &format_saved_at(item.timestamp), style);
        render_cell_text(frame, cols[1], &item.fixture.title(), style);
        render_cell_text(frame, cols[2], &item.prediction.prediction, style);
        render_cell_text(frame, cols[3], &conf, style);
        render_cell_text(
            frame,
            cols[4],
            item.prediction.risk_level.label(),
            style.fg(risk_color(item.prediction.risk_level)),
        );
    }
}

fn match_columns() -> [Constraint; 5] {
    [
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Min(30),
        Constraint::Length(7),
        Constraint::Length(22),
    ]
}

fn history_columns() -> [Constraint; 5] {
    [
        Constraint::Length(13),
        Constraint::Min(28),
        Constraint::Min(24),
        Constraint::Length(6),
        Constraint::Length(8),
    ]
}

fn render_header_row(frame: &mut Frame, area: Rect, widths: &[Constraint], labels: &[&str]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);
    for (col, label) in cols.iter().zip(labels) {
        render_cell_text(frame, *col, label, style);
    }
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text.to_string()).style(style);
    frame.render_widget(paragraph, text_area);
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn status_style(status: MatchStatus, base: Style) -> Style {
    match status {
        MatchStatus::Live => base.fg(Color::Red).add_modifier(Modifier::BOLD),
        MatchStatus::Upcoming => base.fg(Color::Cyan),
        MatchStatus::Finished => base.fg(Color::Gray),
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn format_saved_at(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.with_timezone(&Local).format("%d/%m %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &Detail) {
    let popup_area = centered_rect(76, 84, area);
    frame.render_widget(Clear, popup_area);

    let title = if detail.from_history {
        format!("{} (saved)", detail.fixture.title())
    } else {
        detail.fixture.title()
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let fixture = &detail.fixture;
    let score = fixture
        .score
        .as_deref()
        .map(|s| format!(" | Score {s}"))
        .unwrap_or_default();
    let info = format!(
        "{} | {} | {}{score}",
        fixture.league,
        fixture.time,
        fixture.status.label()
    );
    frame.render_widget(Paragraph::new(info), rows[0]);

    match &detail.analysis {
        AnalysisState::Loading => {
            let text = Paragraph::new("Analyzing form, injuries, head-to-head and standings...")
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true });
            frame.render_widget(text, rows[1].union(rows[2]));
        }
        AnalysisState::Failed(message) => {
            let text = Paragraph::new(format!("{message}\n\nPress r to retry."))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(text, rows[1].union(rows[2]));
        }
        AnalysisState::Ready(prediction) => {
            let gauge = Gauge::default()
                .block(Block::default().title("Confidence").borders(Borders::ALL))
                .gauge_style(Style::default().fg(risk_color(prediction.risk_level)))
                .percent(u16::from(prediction.confidence.min(100)))
                .label(format!("{}%", prediction.confidence));
            frame.render_widget(gauge, rows[1]);

            let body = Paragraph::new(prediction_lines(prediction))
                .wrap(Wrap { trim: false })
                .scroll((detail.scroll, 0));
            frame.render_widget(body, rows[2]);
        }
    }
}

fn prediction_lines(prediction: &PredictionDetail) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            prediction.prediction.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Risk: "),
            Span::styled(
                prediction.risk_level.label(),
                Style::default().fg(risk_color(prediction.risk_level)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Reasoning",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ];
    lines.extend(prediction.reasoning.iter().map(|r| Line::from(format!("• {r}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Key stats",
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    lines.extend(prediction.key_stats.iter().map(|s| Line::from(format!("• {s}"))));
    lines
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_confirm_clear(frame: &mut Frame, area: Rect, count: usize) {
    let popup_area = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup_area);
    let text = format!("Delete all {count} saved predictions?\n\ny Confirm | any key Cancel");
    let popup = Paragraph::new(text)
        .block(Block::default().title("Clear history").borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(popup, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "PronostIQ Terminal - Help",
        "",
        "Global:",
        "  Tab / 1 / 2  Matches / History",
        "  j/k or ↑/↓   Move",
        "  /            Search team or league",
        "  Esc          Clear search / close",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Matches:",
        "  Enter / d    Analyze match",
        "  r            Refresh listing",
        "",
        "History:",
        "  Enter / d    View prediction",
        "  x / Del      Delete entry",
        "  C            Clear all",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
