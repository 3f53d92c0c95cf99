// src/tui.rs
use crate::config;
use crate::error::{AppResult, TuiError};
use crate::generator;
use crate::models::{GeneratedRecord, PasswordConfig, PasswordHistory, MAX_LENGTH, MIN_LENGTH};
use crate::random::OsRandom;
use crate::store::HistoryStore;

use arboard; // For clipboard
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{stdout, Stdout};
use std::time::Duration;
use log;

const NUM_FORM_FIELDS: usize = 6; // Purpose, Length, Lower, Upper, Digits, Symbols
const FIRST_TOGGLE_FIELD: usize = 2;

#[derive(PartialEq, Debug, Clone)]
pub enum InputMode {
    Normal,
    Generating,
    EditingPurpose { record_id: String },
    ConfirmingClear,
}

#[derive(Clone)]
struct GenerateFormData {
    purpose: String,
    length: String, // free text, parsed on submit
    use_lower: bool,
    use_upper: bool,
    use_digits: bool,
    use_symbols: bool,
}

impl GenerateFormData {
    fn from_defaults(defaults: &PasswordConfig) -> Self {
        GenerateFormData {
            purpose: String::new(),
            length: defaults.length.to_string(),
            use_lower: defaults.use_lower,
            use_upper: defaults.use_upper,
            use_digits: defaults.use_digits,
            use_symbols: defaults.use_symbols,
        }
    }
}

pub struct App {
    should_quit: bool,
    history: PasswordHistory,
    // Selection is a display index over the newest-first list.
    selected_index: Option<usize>,
    list_state: ListState,
    store: HistoryStore,
    defaults: PasswordConfig,
    app_status: String,
    input_mode: InputMode,
    current_input_value: String,
    form_field_index: usize,
    form: GenerateFormData,
}

fn base_keys() -> &'static str {
    "(q) Quit | (j/k) Nav | (g) Generate | (e) Edit purpose | (d) Del | (C) Clear | (x) Copy pass"
}

fn class_summary(config: &PasswordConfig) -> String {
    let mut parts = Vec::new();
    if config.use_lower {
        parts.push("lower");
    }
    if config.use_upper {
        parts.push("upper");
    }
    if config.use_digits {
        parts.push("digits");
    }
    if config.use_symbols {
        parts.push("symbols");
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" + ")
    }
}

impl App {
    pub fn new(store: HistoryStore, defaults: PasswordConfig) -> Self {
        let form = GenerateFormData::from_defaults(&defaults);
        App {
            should_quit: false,
            history: PasswordHistory::new(),
            selected_index: None,
            list_state: ListState::default(),
            store,
            defaults,
            app_status: "Initializing...".to_string(),
            input_mode: InputMode::Normal,
            current_input_value: String::new(),
            form_field_index: 0,
            form,
        }
    }

    /// Maps a display index (newest first) to an index into the history,
    /// which is stored oldest first.
    fn record_index(&self, display_index: usize) -> Option<usize> {
        let len = self.history.records.len();
        if display_index < len {
            Some(len - 1 - display_index)
        } else {
            None
        }
    }

    fn selected_record(&self) -> Option<&GeneratedRecord> {
        self.selected_index
            .and_then(|display_index| self.record_index(display_index))
            .and_then(|index| self.history.records.get(index))
    }

    fn copy_to_clipboard(&mut self, content: String, field_name: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(content) {
                Ok(_) => {
                    self.app_status = format!("{} copied to clipboard!", field_name);
                    log::info!("Copied {} to clipboard.", field_name);
                }
                Err(err) => {
                    self.app_status = format!("Error copying {}: {}", field_name, err);
                    log::error!("Error setting clipboard text for {}: {}", field_name, err);
                }
            },
            Err(err) => {
                self.app_status = format!("Error initializing clipboard: {}", err);
                log::error!("Error initializing clipboard: {}", err);
            }
        }
    }

    pub fn on_key(&mut self, key_event: KeyEvent) {
        log::debug!("Key event received: {:?}", key_event);
        let key_code = key_event.code;

        match self.input_mode.clone() {
            InputMode::Normal => match key_code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.move_selection(1);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.move_selection(-1);
                }
                KeyCode::Char('g') => {
                    self.input_mode = InputMode::Generating;
                    log::info!("Switched to InputMode::Generating");
                    self.form = GenerateFormData::from_defaults(&self.defaults);
                    self.form_field_index = 0;
                    self.load_current_input_from_field();
                    self.app_status = "Generating new password... (Esc to cancel)".to_string();
                }
                KeyCode::Char('e') => {
                    if let Some(record) = self.selected_record() {
                        let record_id = record.id.clone();
                        let purpose = record.purpose.clone();
                        self.input_mode = InputMode::EditingPurpose { record_id: record_id.clone() };
                        log::info!("Switched to InputMode::EditingPurpose for record_id: {}", record_id);
                        self.current_input_value = purpose.clone();
                        self.app_status = format!("Editing purpose of '{}'... (Esc to cancel)", purpose);
                    } else {
                        self.app_status = "No record selected to edit.".to_string();
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(record) = self.selected_record() {
                        let record_id = record.id.clone();
                        let purpose = record.purpose.clone();
                        match self.store.delete(&record_id) {
                            Ok(()) => {
                                log::info!("Deleted record '{}' (ID: {})", purpose, record_id);
                                self.reload_history();
                                self.app_status = format!("Record '{}' deleted.", purpose);
                            }
                            Err(e) => {
                                log::error!("Failed to delete record {}: {}", record_id, e);
                                self.app_status = format!("Failed to delete record: {}", e);
                            }
                        }
                    } else {
                        self.app_status = "No record selected to delete.".to_string();
                    }
                }
                KeyCode::Char('C') => {
                    if self.history.records.is_empty() {
                        self.app_status = "History is already empty.".to_string();
                    } else {
                        self.input_mode = InputMode::ConfirmingClear;
                        log::info!("Switched to InputMode::ConfirmingClear");
                        self.app_status = "Clear the ENTIRE history? (y/N)".to_string();
                    }
                }
                KeyCode::Char('x') => {
                    if let Some(record) = self.selected_record() {
                        let password = record.password.clone();
                        self.copy_to_clipboard(password, "Password");
                    } else {
                        self.app_status = "No record selected to copy password.".to_string();
                    }
                }
                _ => {}
            },
            InputMode::Generating => match key_code {
                KeyCode::Char(c) => self.on_form_char(c),
                KeyCode::Backspace => {
                    if self.form_field_index < FIRST_TOGGLE_FIELD {
                        self.current_input_value.pop();
                    }
                }
                KeyCode::Tab => {
                    self.store_current_input_to_field();
                    self.form_field_index = (self.form_field_index + 1) % NUM_FORM_FIELDS;
                    self.load_current_input_from_field();
                }
                KeyCode::Enter => {
                    self.store_current_input_to_field();
                    if self.form_field_index == NUM_FORM_FIELDS - 1 {
                        self.submit_generate_form();
                    } else {
                        self.form_field_index = (self.form_field_index + 1) % NUM_FORM_FIELDS;
                        self.load_current_input_from_field();
                    }
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    log::info!("Switched to InputMode::Normal via Esc from generate form.");
                    self.reset_form_state();
                    self.app_status = format!("Generate cancelled. | {}", base_keys());
                }
                _ => {}
            },
            InputMode::EditingPurpose { record_id } => match key_code {
                KeyCode::Char(c) => {
                    self.current_input_value.push(c);
                }
                KeyCode::Backspace => {
                    self.current_input_value.pop();
                }
                KeyCode::Enter => {
                    self.submit_purpose_edit(&record_id);
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    log::info!("Switched to InputMode::Normal via Esc from purpose edit.");
                    self.current_input_value = String::new();
                    self.app_status = format!("Edit cancelled. | {}", base_keys());
                }
                _ => {}
            },
            InputMode::ConfirmingClear => {
                match key_code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => match self.store.clear() {
                        Ok(()) => {
                            log::info!("History cleared from TUI.");
                            self.reload_history();
                            self.app_status = "History cleared.".to_string();
                        }
                        Err(e) => {
                            log::error!("Failed to clear history: {}", e);
                            self.app_status = format!("Failed to clear history: {}", e);
                        }
                    },
                    _ => {
                        self.app_status = format!("Clear cancelled. | {}", base_keys());
                    }
                }
                self.input_mode = InputMode::Normal;
            }
        }
    }

    fn on_form_char(&mut self, c: char) {
        match self.form_field_index {
            0 => self.current_input_value.push(c),
            1 => {
                if c.is_ascii_digit() {
                    self.current_input_value.push(c);
                }
            }
            _ => {
                // Toggle fields: y enables, n disables, space flips.
                let value = match self.form_field_index {
                    2 => &mut self.form.use_lower,
                    3 => &mut self.form.use_upper,
                    4 => &mut self.form.use_digits,
                    5 => &mut self.form.use_symbols,
                    _ => return,
                };
                match c {
                    'y' | 'Y' => *value = true,
                    'n' | 'N' => *value = false,
                    ' ' => *value = !*value,
                    _ => {}
                }
            }
        }
    }

    fn store_current_input_to_field(&mut self) {
        match self.form_field_index {
            0 => self.form.purpose = self.current_input_value.clone(),
            1 => self.form.length = self.current_input_value.clone(),
            _ => {} // toggle fields hold their own state
        }
    }

    fn load_current_input_from_field(&mut self) {
        self.current_input_value = match self.form_field_index {
            0 => self.form.purpose.clone(),
            1 => self.form.length.clone(),
            _ => String::new(),
        };
    }

    fn reset_form_state(&mut self) {
        self.form = GenerateFormData::from_defaults(&self.defaults);
        self.current_input_value = String::new();
        self.form_field_index = 0;
    }

    fn submit_generate_form(&mut self) {
        let length: usize = match self.form.length.trim().parse() {
            Ok(length) => length,
            Err(_) => {
                let err = TuiError::InputError(format!("'{}' is not a valid length", self.form.length));
                log::warn!("Generate form rejected: {}", err);
                self.app_status = format!("{}. (Tab to edit, Esc to cancel)", err);
                self.form_field_index = 1;
                self.load_current_input_from_field();
                return;
            }
        };
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            self.app_status = format!(
                "Length must be between {} and {}. (Tab to edit, Esc to cancel)",
                MIN_LENGTH, MAX_LENGTH
            );
            self.form_field_index = 1;
            self.load_current_input_from_field();
            return;
        }

        let gen_config = PasswordConfig {
            length,
            use_lower: self.form.use_lower,
            use_upper: self.form.use_upper,
            use_digits: self.form.use_digits,
            use_symbols: self.form.use_symbols,
        };

        match generator::generate(&gen_config, &mut OsRandom) {
            Ok(password) => {
                let record = GeneratedRecord::new(password.clone(), &self.form.purpose, gen_config);
                let purpose = record.purpose.clone();
                match self.store.append(record) {
                    Ok(()) => {
                        log::info!("Generated and recorded password for '{}'.", purpose);
                        self.reload_history();
                        // Newest first: the fresh record sits at display index 0.
                        if !self.history.records.is_empty() {
                            self.selected_index = Some(0);
                            self.list_state.select(Some(0));
                        }
                        self.app_status = format!("Generated password for '{}'. (x) Copy pass", purpose);
                    }
                    Err(e) => {
                        // Generation succeeded; the password must still reach
                        // the user even though it was not recorded.
                        log::error!("Generated password was not saved: {}", e);
                        self.app_status =
                            format!("NOT saved ({}). Password: {}", e, password);
                    }
                }
                self.input_mode = InputMode::Normal;
                log::info!("Switched to InputMode::Normal after generate form.");
                self.reset_form_state();
            }
            Err(e) => {
                log::warn!("Generation failed: {}", e);
                self.app_status = format!("{}. (Tab to edit, Esc to cancel)", e);
            }
        }
    }

    fn submit_purpose_edit(&mut self, record_id: &str) {
        let new_purpose = self.current_input_value.trim().to_string();
        if new_purpose.is_empty() {
            self.app_status = "Purpose cannot be empty. (Esc to cancel)".to_string();
            return;
        }

        let existing = self
            .history
            .records
            .iter()
            .find(|r| r.id == record_id)
            .cloned();
        match existing {
            Some(mut record) => {
                record.purpose = new_purpose.clone();
                match self.store.update(record_id, record) {
                    Ok(()) => {
                        log::info!("Updated purpose of record {} to '{}'.", record_id, new_purpose);
                        self.reload_history();
                        self.app_status = format!("Purpose changed to '{}'.", new_purpose);
                    }
                    Err(e) => {
                        log::error!("Failed to update record {}: {}", record_id, e);
                        self.app_status = format!("Failed to update record: {}", e);
                    }
                }
            }
            None => {
                log::error!("Record {} vanished before the purpose edit was saved.", record_id);
                self.app_status = "Error: record no longer exists.".to_string();
            }
        }
        self.input_mode = InputMode::Normal;
        self.current_input_value = String::new();
    }

    fn reload_history(&mut self) {
        match self.store.load() {
            Ok(history) => {
                self.history = history;
                let len = self.history.records.len();
                if len == 0 {
                    self.selected_index = None;
                } else {
                    let selected = self.selected_index.unwrap_or(0).min(len - 1);
                    self.selected_index = Some(selected);
                }
                self.list_state.select(self.selected_index);
            }
            Err(e) => {
                log::error!("Failed to reload history: {}", e);
                self.app_status = format!("Failed to reload history: {}", e);
            }
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.input_mode != InputMode::Normal {
            return;
        }

        let num_records = self.history.records.len();
        if num_records == 0 {
            self.selected_index = None;
            self.list_state.select(None);
            return;
        }

        let current_index = self.selected_index.unwrap_or(0);
        let mut new_index = current_index as i32 + delta;
        if new_index < 0 {
            new_index = 0;
        } else if new_index >= num_records as i32 {
            new_index = num_records as i32 - 1;
        }

        self.selected_index = Some(new_index as usize);
        self.list_state.select(self.selected_index);
    }

    fn load_initial_history(&mut self) {
        log::info!("Attempting to load history from: {:?}", self.store.path());
        match self.store.load() {
            Ok(history) => {
                let num_records = history.records.len();
                self.history = history;
                if num_records > 0 {
                    self.selected_index = Some(0);
                    self.list_state.select(Some(0));
                    self.app_status = format!("Loaded {} records. {}", num_records, base_keys());
                    log::info!("History loaded successfully with {} records.", num_records);
                } else {
                    self.selected_index = None;
                    self.list_state.select(None);
                    self.app_status = format!("History empty. {}", base_keys());
                    log::info!("History loaded successfully, but it's empty.");
                }
            }
            Err(e) => {
                self.app_status = format!("Error loading history: {}. Press 'q' to quit.", e);
                self.history = PasswordHistory::new();
                self.selected_index = None;
                self.list_state.select(None);
                log::error!("Failed to load history: {}", e);
            }
        }
    }
}

pub fn run_tui() -> AppResult<()> {
    log::info!("Initializing TUI...");
    let app_config = config::load_config();
    let store = HistoryStore::new(app_config.history_path());

    enable_raw_mode().map_err(|e| { log::error!("Failed to enable raw mode: {}", e); TuiError::Io(e) })?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| { log::error!("Failed to setup terminal screen: {}", e); TuiError::Io(e) })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| { log::error!("Failed to create terminal: {}", e); TuiError::Io(e) })?;

    let mut app = App::new(store, app_config.defaults.clone());
    app.load_initial_history();

    log::info!("Starting TUI application loop.");
    let res = run_app_loop(&mut terminal, &mut app);
    log::info!("TUI application loop finished.");

    disable_raw_mode().map_err(|e| { log::error!("Failed to disable raw mode: {}", e); TuiError::Io(e) })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| { log::error!("Failed to restore terminal screen: {}", e); TuiError::Io(e) })?;

    if let Err(err) = res {
        return Err(err.into());
    }

    log::info!("TUI shutdown complete.");
    Ok(())
}

fn run_app_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<(), TuiError> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app)).map_err(|e| { log::error!("Terminal draw error: {}", e); TuiError::Io(e) })?;

        if event::poll(Duration::from_millis(100)).map_err(|e| { log::error!("Event poll error: {}", e); TuiError::Io(e) })? {
            if let Event::Key(key_event) = event::read().map_err(|e| { log::error!("Event read error: {}", e); TuiError::Io(e) })? {
                if key_event.kind == KeyEventKind::Press {
                    app.on_key(key_event);
                }
            }
        }
    }
    Ok(())
}

fn draw_main_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.size());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(chunks[0]);

    let list_area = main_chunks[0];
    let detail_area = main_chunks[1];
    let status_bar_area = chunks[1];

    // History list, newest first
    let history_block_title = format!("History ({})", app.history.records.len());
    let history_block = Block::default().borders(Borders::ALL).title(history_block_title);

    if !app.history.records.is_empty() {
        let list_items: Vec<ListItem> = app
            .history
            .records
            .iter()
            .rev()
            .map(|record| {
                ListItem::new(Span::raw(format!("{} - {}", record.purpose, record.created_at)))
            })
            .collect();
        let list = List::new(list_items)
            .block(history_block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::Gray))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, list_area, &mut app.list_state);
    } else {
        let no_records_text = Paragraph::new("No passwords in the history yet. Press 'g' to generate one.")
            .block(history_block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(no_records_text, list_area);
    }

    // Detail view
    let details_block = Block::default().borders(Borders::ALL).title("Details");
    if let Some(record) = app.selected_record() {
        let detail_text = vec![
            Line::from(vec![Span::styled("Purpose: ", Style::default().bold()), Span::raw(&record.purpose)]),
            Line::from(vec![Span::styled("Password: ", Style::default().bold()), Span::raw(&record.password)]),
            Line::from(vec![
                Span::styled("Length: ", Style::default().bold()),
                Span::raw(format!("{} characters", record.config.length)),
            ]),
            Line::from(vec![
                Span::styled("Classes: ", Style::default().bold()),
                Span::raw(class_summary(&record.config)),
            ]),
            Line::from(vec![Span::styled("Created: ", Style::default().bold()), Span::raw(&record.created_at)]),
            Line::from(vec![Span::styled("Id: ", Style::default().bold()), Span::raw(&record.id)]),
        ];
        let details_paragraph = Paragraph::new(detail_text).block(details_block).wrap(Wrap { trim: true });
        f.render_widget(details_paragraph, detail_area);
    } else {
        let text = Paragraph::new("Select a record to see details.")
            .block(details_block)
            .alignment(Alignment::Center);
        f.render_widget(text, detail_area);
    }

    // Status bar
    let status_text = if app.input_mode == InputMode::Normal {
        format!("{} | {}", app.app_status, base_keys())
    } else {
        app.app_status.clone()
    };
    let status_paragraph = Paragraph::new(status_text).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_paragraph, status_bar_area);
}

fn draw_generate_form(f: &mut Frame, app: &App) {
    let form_area = centered_rect(60, 80, f.size());
    f.render_widget(Clear, form_area);

    let form_block = Block::default().title("Generate New Password").borders(Borders::ALL);
    f.render_widget(form_block, form_area);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ].as_ref())
        .split(form_area);

    let field_labels = [
        "Purpose:",
        "Length (4-50):",
        "Lowercase a-z (y/n):",
        "Uppercase A-Z (y/n):",
        "Digits 0-9 (y/n):",
        "Symbols !@#$... (y/n):",
    ];

    for i in 0..NUM_FORM_FIELDS {
        let field_text = if i < FIRST_TOGGLE_FIELD {
            let stored_value = match i {
                0 => app.form.purpose.clone(),
                _ => app.form.length.clone(),
            };
            if app.form_field_index == i {
                format!("{}▋", app.current_input_value)
            } else {
                stored_value
            }
        } else {
            let enabled = match i {
                2 => app.form.use_lower,
                3 => app.form.use_upper,
                4 => app.form.use_digits,
                _ => app.form.use_symbols,
            };
            if enabled { "yes".to_string() } else { "no".to_string() }
        };

        let paragraph = Paragraph::new(field_text)
            .block(Block::default().borders(Borders::ALL).title(field_labels[i]))
            .style(if app.form_field_index == i {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            });
        f.render_widget(paragraph, form_chunks[i]);
    }

    let help_text = "(Tab) Next | (Enter) Next/Generate | (y/n/Space) Toggle | (Esc) Cancel";
    let help_paragraph = Paragraph::new(help_text).alignment(Alignment::Center);
    f.render_widget(help_paragraph, form_chunks[NUM_FORM_FIELDS + 1]);
}

fn draw_purpose_edit_form(f: &mut Frame, app: &App) {
    let form_area = centered_rect(50, 20, f.size());
    f.render_widget(Clear, form_area);

    let form_block = Block::default().title("Edit Purpose").borders(Borders::ALL);
    f.render_widget(form_block, form_area);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(form_area);

    let input = Paragraph::new(format!("{}▋", app.current_input_value))
        .block(Block::default().borders(Borders::ALL).title("New purpose:"))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(input, form_chunks[0]);

    let help_paragraph = Paragraph::new("(Enter) Save | (Esc) Cancel").alignment(Alignment::Center);
    f.render_widget(help_paragraph, form_chunks[2]);
}

/// Renders the UI widgets based on the application mode.
fn ui(f: &mut Frame, app: &mut App) {
    match app.input_mode {
        InputMode::Normal | InputMode::ConfirmingClear => {
            draw_main_ui(f, app);
        }
        InputMode::Generating => {
            draw_main_ui(f, app);
            draw_generate_form(f, app);
        }
        InputMode::EditingPurpose { .. } => {
            draw_main_ui(f, app);
            draw_purpose_edit_form(f, app);
        }
    }
}

/// Helper to create a centered rect for popups.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
