// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive shell (ratatui + crossterm) over one session: browse
//! sections, edit lines and placeholders, toggle checklist items, raw-edit
//! whole sections, search, and export. Collaborator calls run on a worker
//! and land as events drained once per tick; failures surface as toasts and
//! never touch the report.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::assist::scripted::{demo_intake, ScriptedAssistant};
use crate::assist::{AssistEvent, AssistWorker, NoteAssistant};
use crate::export::{write_document, WriteDurability};
use crate::format::serialize_line;
use crate::model::{LineId, SectionKind, Session};
use crate::ops::{self, Op};
use crate::query::{line_search, note_outline, SearchHit, SearchMode};
use crate::render::{render_report, tokenize_line, PageOptions, RunStyle};

const TOAST_TTL: Duration = Duration::from_secs(4);
const SECTION_PANE_WIDTH: u16 = 34;
const PLACEHOLDER_COLOR: Color = Color::Cyan;
const HEADING_COLOR: Color = Color::LightGreen;

#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub export_path: PathBuf,
    pub page_options: PageOptions,
    pub durability: WriteDurability,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("chartmate-report.txt"),
            page_options: PageOptions::default(),
            durability: WriteDurability::BestEffort,
        }
    }
}

/// A session pre-filled from the built-in collaborator.
pub fn demo_session() -> Session {
    let mut session = Session::new(demo_intake());
    if let Ok(output) = ScriptedAssistant::new().generate_note(session.intake()) {
        session.apply_generated(0, &output);
    }
    session
}

/// Runs the interactive terminal UI on the demo session.
pub fn run_demo() -> Result<(), Box<dyn Error>> {
    run_with_session(demo_session(), Arc::new(ScriptedAssistant::new()), TuiConfig::default())
}

pub fn run_with_session(
    session: Session,
    assistant: Arc<dyn NoteAssistant>,
    config: TuiConfig,
) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    let (worker, events) = AssistWorker::new(assistant, runtime.handle().clone());
    let mut app = App::new(session, worker, events, config);

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        app.drain_events();
        app.expire_toast();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SuggestionPanel {
    Inactive,
    Pending,
    Ready { items: Vec<String>, selected: usize },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LineEditor {
    section: SectionKind,
    line_id: LineId,
    input: String,
    cursor: usize,
    placeholder: bool,
    panel: SuggestionPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawEditor {
    section: SectionKind,
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl RawEditor {
    fn new(section: SectionKind, raw: &str) -> Self {
        Self {
            section,
            lines: raw.split('\n').map(str::to_owned).collect(),
            row: 0,
            col: 0,
        }
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn clamp_col(&mut self) {
        let len = self.lines[self.row].chars().count();
        self.col = self.col.min(len);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Search,
    Autofill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prompt {
    kind: PromptKind,
    input: String,
    cursor: usize,
    regex: bool,
}

impl Prompt {
    fn new(kind: PromptKind) -> Self {
        Self { kind, input: String::new(), cursor: 0, regex: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Browse,
    EditLine(LineEditor),
    RawEdit(RawEditor),
    Prompt(Prompt),
}

/// One selectable display row of the right pane.
///
/// In the clinical-note outline view heading rows are structural; they map
/// to no line and mutation keys ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowRef {
    line_id: Option<LineId>,
    display: String,
    heading: bool,
    indent: bool,
    checkable: bool,
    checked: bool,
    placeholder: bool,
}

struct Toast {
    message: String,
    at: Instant,
}

pub(crate) struct App {
    session: Session,
    worker: AssistWorker,
    events: UnboundedReceiver<AssistEvent>,
    config: TuiConfig,
    section_index: usize,
    line_index: usize,
    mode: Mode,
    toast: Option<Toast>,
    search_hits: Vec<SearchHit>,
    search_cursor: usize,
    should_quit: bool,
}

impl App {
    fn new(
        session: Session,
        worker: AssistWorker,
        events: UnboundedReceiver<AssistEvent>,
        config: TuiConfig,
    ) -> Self {
        Self {
            session,
            worker,
            events,
            config,
            section_index: 0,
            line_index: 0,
            mode: Mode::Browse,
            toast: None,
            search_hits: Vec::new(),
            search_cursor: 0,
            should_quit: false,
        }
    }

    fn current_section(&self) -> SectionKind {
        SectionKind::ALL[self.section_index]
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), at: Instant::now() });
    }

    fn expire_toast(&mut self) {
        if matches!(&self.toast, Some(toast) if toast.at.elapsed() > TOAST_TTL) {
            self.toast = None;
        }
    }

    fn display_rows(&self) -> Vec<RowRef> {
        let kind = self.current_section();
        let section = self.session.report().section(kind);

        if kind == SectionKind::ClinicalNote {
            let outline = note_outline(section);
            if !outline.is_empty() {
                let mut rows = Vec::new();
                for subsection in &outline {
                    rows.push(RowRef {
                        line_id: None,
                        display: format!("{}:", subsection.heading.label()),
                        heading: true,
                        indent: false,
                        checkable: false,
                        checked: false,
                        placeholder: false,
                    });
                    for row in &subsection.rows {
                        rows.push(RowRef {
                            line_id: Some(row.line.id()),
                            display: if row.continuation {
                                row.text.to_string()
                            } else {
                                serialize_line(row.line)
                            },
                            heading: false,
                            indent: true,
                            checkable: row.line.check().is_checkable(),
                            checked: row.line.check().is_checked(),
                            placeholder: row.line.is_placeholder(),
                        });
                    }
                }
                return rows;
            }
        }

        section
            .lines()
            .iter()
            .map(|line| RowRef {
                line_id: Some(line.id()),
                display: serialize_line(line),
                heading: false,
                indent: false,
                checkable: line.check().is_checkable(),
                checked: line.check().is_checked(),
                placeholder: line.is_placeholder(),
            })
            .collect()
    }

    fn clamp_selection(&mut self) {
        let rows = self.display_rows().len();
        if rows == 0 {
            self.line_index = 0;
        } else if self.line_index >= rows {
            self.line_index = rows - 1;
        }
    }

    fn selected_row(&self) -> Option<RowRef> {
        self.display_rows().get(self.line_index).cloned()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &self.mode {
            Mode::Browse => self.browse_key(key),
            Mode::EditLine(_) => self.editor_key(key),
            Mode::RawEdit(_) => self.raw_key(key),
            Mode::Prompt(_) => self.prompt_key(key),
        }
    }

    fn browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char(']') => {
                self.section_index = (self.section_index + 1) % SectionKind::ALL.len();
                self.line_index = 0;
            }
            KeyCode::BackTab | KeyCode::Char('[') => {
                self.section_index =
                    (self.section_index + SectionKind::ALL.len() - 1) % SectionKind::ALL.len();
                self.line_index = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.line_index += 1;
                self.clamp_selection();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.line_index = self.line_index.saturating_sub(1);
            }
            KeyCode::Char(' ') => self.toggle_check(),
            KeyCode::Enter => self.open_editor(),
            KeyCode::Char('a') => {
                let section = self.current_section();
                ops::apply(&mut self.session, &[Op::AddLine { section }]);
                self.line_index = self.display_rows().len().saturating_sub(1);
            }
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('e') => self.open_raw_editor(),
            KeyCode::Char('g') => {
                self.worker.request_generate(self.session.intake().clone());
                self.set_toast("Generating report…");
            }
            KeyCode::Char('i') => self.mode = Mode::Prompt(Prompt::new(PromptKind::Autofill)),
            KeyCode::Char('/') => self.mode = Mode::Prompt(Prompt::new(PromptKind::Search)),
            KeyCode::Char('n') => self.jump_hit(1),
            KeyCode::Char('N') => self.jump_hit(-1),
            KeyCode::Char('x') => self.export(),
            _ => {}
        }
    }

    fn toggle_check(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let (Some(line_id), true) = (row.line_id, row.checkable) else {
            return;
        };
        let section = self.current_section();
        ops::apply(
            &mut self.session,
            &[Op::SetCheck { section, line_id, checked: !row.checked }],
        );
    }

    fn delete_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let Some(line_id) = row.line_id else {
            return;
        };
        let section = self.current_section();
        ops::apply(&mut self.session, &[Op::RemoveLine { section, line_id }]);
        self.clamp_selection();
    }

    fn open_editor(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let Some(line_id) = row.line_id else {
            return;
        };
        let section = self.current_section();
        let Some(line) = self.session.report().section(section).line(line_id) else {
            return;
        };

        let placeholder = line.is_placeholder();
        let input = if placeholder {
            line.placeholder_content().to_owned()
        } else {
            line.text().to_owned()
        };
        let cursor = input.chars().count();

        let panel = if placeholder {
            match self.session.cached_suggestions(line_id) {
                Some(cached) => SuggestionPanel::Ready { items: cached.to_vec(), selected: 0 },
                None => {
                    self.worker.request_suggestions(
                        line_id,
                        self.session.intake().clone(),
                        line.placeholder_content().to_owned(),
                    );
                    SuggestionPanel::Pending
                }
            }
        } else {
            SuggestionPanel::Inactive
        };

        self.mode = Mode::EditLine(LineEditor { section, line_id, input, cursor, placeholder, panel });
    }

    fn open_raw_editor(&mut self) {
        let section = self.current_section();
        ops::enter_raw_edit(&mut self.session, section);
        let raw = self.session.raw_edit_buffer(section).unwrap_or("").to_owned();
        self.mode = Mode::RawEdit(RawEditor::new(section, &raw));
    }

    fn editor_key(&mut self, key: KeyEvent) {
        let Mode::EditLine(editor) = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                let (section, line_id, text) =
                    (editor.section, editor.line_id, editor.input.clone());
                ops::apply(&mut self.session, &[Op::ReplaceLine { section, line_id, text }]);
                self.mode = Mode::Browse;
            }
            KeyCode::Tab => {
                if let SuggestionPanel::Ready { items, selected } = &editor.panel {
                    if let Some(chosen) = items.get(*selected) {
                        editor.input = chosen.clone();
                        editor.cursor = editor.input.chars().count();
                    }
                }
            }
            KeyCode::Down => {
                if let SuggestionPanel::Ready { items, selected } = &mut editor.panel {
                    *selected = (*selected + 1) % items.len();
                }
            }
            KeyCode::Up => {
                if let SuggestionPanel::Ready { items, selected } = &mut editor.panel {
                    *selected = (*selected + items.len() - 1) % items.len();
                }
            }
            KeyCode::Left => editor.cursor = editor.cursor.saturating_sub(1),
            KeyCode::Right => {
                editor.cursor = (editor.cursor + 1).min(editor.input.chars().count());
            }
            KeyCode::Home => editor.cursor = 0,
            KeyCode::End => editor.cursor = editor.input.chars().count(),
            KeyCode::Backspace => {
                if editor.cursor > 0 {
                    let idx = byte_index(&editor.input, editor.cursor - 1);
                    editor.input.remove(idx);
                    editor.cursor -= 1;
                }
            }
            KeyCode::Char(ch) => {
                let idx = byte_index(&editor.input, editor.cursor);
                editor.input.insert(idx, ch);
                editor.cursor += 1;
            }
            _ => {}
        }
    }

    fn raw_key(&mut self, key: KeyEvent) {
        let Mode::RawEdit(editor) = &mut self.mode else {
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            let section = editor.section;
            let text = editor.text();
            if let Some(buffer) = self.session.raw_edit_buffer_mut(section) {
                *buffer = text;
            }
            let _ = ops::commit_raw_edit(&mut self.session, section);
            self.mode = Mode::Browse;
            self.clamp_selection();
            self.set_toast("Section updated");
            return;
        }

        match key.code {
            KeyCode::Esc => {
                let section = editor.section;
                ops::cancel_raw_edit(&mut self.session, section);
                self.mode = Mode::Browse;
                self.set_toast("Edit discarded");
            }
            KeyCode::Enter => {
                let idx = byte_index(&editor.lines[editor.row], editor.col);
                let tail = editor.lines[editor.row].split_off(idx);
                editor.lines.insert(editor.row + 1, tail);
                editor.row += 1;
                editor.col = 0;
            }
            KeyCode::Backspace => {
                if editor.col > 0 {
                    let idx = byte_index(&editor.lines[editor.row], editor.col - 1);
                    editor.lines[editor.row].remove(idx);
                    editor.col -= 1;
                } else if editor.row > 0 {
                    let tail = editor.lines.remove(editor.row);
                    editor.row -= 1;
                    editor.col = editor.lines[editor.row].chars().count();
                    editor.lines[editor.row].push_str(&tail);
                }
            }
            KeyCode::Left => {
                if editor.col > 0 {
                    editor.col -= 1;
                } else if editor.row > 0 {
                    editor.row -= 1;
                    editor.col = editor.lines[editor.row].chars().count();
                }
            }
            KeyCode::Right => {
                let len = editor.lines[editor.row].chars().count();
                if editor.col < len {
                    editor.col += 1;
                } else if editor.row + 1 < editor.lines.len() {
                    editor.row += 1;
                    editor.col = 0;
                }
            }
            KeyCode::Up => {
                editor.row = editor.row.saturating_sub(1);
                editor.clamp_col();
            }
            KeyCode::Down => {
                editor.row = (editor.row + 1).min(editor.lines.len() - 1);
                editor.clamp_col();
            }
            KeyCode::Home => editor.col = 0,
            KeyCode::End => editor.col = editor.lines[editor.row].chars().count(),
            KeyCode::Char(ch) => {
                let idx = byte_index(&editor.lines[editor.row], editor.col);
                editor.lines[editor.row].insert(idx, ch);
                editor.col += 1;
            }
            _ => {}
        }
    }

    fn prompt_key(&mut self, key: KeyEvent) {
        let Mode::Prompt(prompt) = &mut self.mode else {
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('r')
            && prompt.kind == PromptKind::Search
        {
            prompt.regex = !prompt.regex;
            return;
        }

        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                let prompt = prompt.clone();
                self.mode = Mode::Browse;
                match prompt.kind {
                    PromptKind::Search => self.run_search(&prompt),
                    PromptKind::Autofill => {
                        self.worker.request_autofill(prompt.input);
                        self.set_toast("Autofill requested…");
                    }
                }
            }
            KeyCode::Left => prompt.cursor = prompt.cursor.saturating_sub(1),
            KeyCode::Right => {
                prompt.cursor = (prompt.cursor + 1).min(prompt.input.chars().count());
            }
            KeyCode::Backspace => {
                if prompt.cursor > 0 {
                    let idx = byte_index(&prompt.input, prompt.cursor - 1);
                    prompt.input.remove(idx);
                    prompt.cursor -= 1;
                }
            }
            KeyCode::Char(ch) => {
                let idx = byte_index(&prompt.input, prompt.cursor);
                prompt.input.insert(idx, ch);
                prompt.cursor += 1;
            }
            _ => {}
        }
    }

    fn run_search(&mut self, prompt: &Prompt) {
        let mode = if prompt.regex { SearchMode::Regex } else { SearchMode::Substring };
        match line_search(self.session.report(), &prompt.input, mode) {
            Ok(hits) if hits.is_empty() => {
                self.search_hits.clear();
                self.set_toast("No matches");
            }
            Ok(hits) => {
                self.set_toast(format!("{} match(es)", hits.len()));
                self.search_hits = hits;
                self.search_cursor = 0;
                self.focus_hit();
            }
            Err(error) => self.set_toast(format!("Search failed: {error}")),
        }
    }

    fn jump_hit(&mut self, step: isize) {
        if self.search_hits.is_empty() {
            return;
        }
        let len = self.search_hits.len() as isize;
        let cursor = (self.search_cursor as isize + step).rem_euclid(len);
        self.search_cursor = cursor as usize;
        self.focus_hit();
    }

    fn focus_hit(&mut self) {
        let Some(hit) = self.search_hits.get(self.search_cursor).copied() else {
            return;
        };
        if let Some(index) = SectionKind::ALL.iter().position(|kind| *kind == hit.section) {
            self.section_index = index;
        }
        let rows = self.display_rows();
        self.line_index = rows
            .iter()
            .position(|row| row.line_id == Some(hit.line_id))
            .unwrap_or(0);
    }

    fn export(&mut self) {
        let doc = render_report(self.session.report(), &self.config.page_options);
        if doc.is_empty() {
            self.set_toast("Nothing to export yet");
            return;
        }
        match write_document(&self.config.export_path, &doc, self.config.durability) {
            Ok(()) => {
                self.set_toast(format!("Exported to {}", self.config.export_path.display()));
            }
            Err(error) => self.set_toast(format!("Export failed: {error}")),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                AssistEvent::Generated { request, result } => match result {
                    Ok(output) => {
                        self.session.apply_generated(request, &output);
                        self.search_hits.clear();
                        self.line_index = 0;
                        if matches!(self.mode, Mode::EditLine(_) | Mode::RawEdit(_)) {
                            self.mode = Mode::Browse;
                        }
                        self.set_toast("Report generated");
                    }
                    Err(error) => self.set_toast(format!("Generation failed: {error}")),
                },
                AssistEvent::Autofilled { request: _, result } => match result {
                    Ok(patch) if patch.is_empty() => self.set_toast("Autofill found no fields"),
                    Ok(patch) => {
                        patch.apply_to(self.session.intake_mut());
                        self.set_toast("Intake fields updated");
                    }
                    Err(error) => self.set_toast(format!("Autofill failed: {error}")),
                },
                AssistEvent::Suggested { line_id, result } => {
                    self.finish_suggestions(line_id, result);
                }
            }
        }
    }

    fn finish_suggestions(
        &mut self,
        line_id: LineId,
        result: Result<Vec<String>, crate::assist::AssistError>,
    ) {
        let items = match result {
            Ok(items) => {
                self.session.cache_suggestions(line_id, items.clone());
                items
            }
            Err(_) => {
                self.set_toast("Could not fetch suggestions");
                Vec::new()
            }
        };

        // A result for a line that was removed (or whose editor closed) in
        // the meantime is dropped here; the cache entry above is inert.
        if let Mode::EditLine(editor) = &mut self.mode {
            if editor.line_id == line_id && editor.panel == SuggestionPanel::Pending {
                editor.panel = if items.is_empty() {
                    SuggestionPanel::Empty
                } else {
                    SuggestionPanel::Ready { items, selected: 0 }
                };
            }
        }
    }

    fn bottom_height(&self) -> u16 {
        match &self.mode {
            Mode::Browse | Mode::RawEdit(_) => 0,
            Mode::Prompt(_) => 3,
            Mode::EditLine(editor) => {
                let extra = match &editor.panel {
                    SuggestionPanel::Inactive => 0,
                    SuggestionPanel::Pending | SuggestionPanel::Empty => 1,
                    SuggestionPanel::Ready { items, .. } => items.len() as u16,
                };
                3 + extra
            }
        }
    }
}

fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

fn styled_spans(raw: &str) -> Vec<Span<'static>> {
    tokenize_line(raw)
        .into_iter()
        .map(|run| match run.style {
            RunStyle::Normal => Span::raw(run.text),
            RunStyle::Bold => {
                Span::styled(run.text, Style::default().add_modifier(Modifier::BOLD))
            }
            RunStyle::Placeholder => Span::styled(
                run.text,
                Style::default().fg(PLACEHOLDER_COLOR).add_modifier(Modifier::ITALIC),
            ),
            RunStyle::Checkbox { .. } => Span::raw(run.text),
        })
        .collect()
}

fn draw(frame: &mut Frame, app: &mut App) {
    let bottom = app.bottom_height();
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(bottom),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_header(frame, app, areas[0]);
    draw_body(frame, app, areas[1]);
    draw_bottom(frame, app, areas[2]);
    draw_footer(frame, app, areas[3]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let patient = app.session.intake().patient_name.as_str();
    let patient = if patient.is_empty() { "(no patient)" } else { patient };
    let header = Line::from(vec![
        Span::styled("Chartmate", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  ·  {patient}")),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SECTION_PANE_WIDTH), Constraint::Min(1)])
        .split(area);

    draw_sections(frame, app, panes[0]);
    match &app.mode {
        Mode::RawEdit(editor) => draw_raw_editor(frame, editor, panes[1]),
        _ => draw_lines(frame, app, panes[1]),
    }
}

fn draw_sections(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let count = app.session.report().section(kind).len();
            let label = format!("{} ({count})", kind.title());
            let style = if count == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(label, style))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Sections"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.section_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_lines(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.display_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            if row.heading {
                return ListItem::new(Span::styled(
                    row.display.clone(),
                    Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD),
                ));
            }
            let mut spans = Vec::new();
            if row.indent {
                spans.push(Span::raw("  "));
            }
            spans.extend(styled_spans(&row.display));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let kind = app.current_section();
    let title = if app.session.is_raw_editing(kind) {
        format!("{} [raw edit pending]", kind.title())
    } else {
        kind.title().to_owned()
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.line_index.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_raw_editor(frame: &mut Frame, editor: &RawEditor, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} — raw edit (ctrl-s save, esc discard)", editor.section.title()));
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = editor.row.saturating_sub(inner_height.saturating_sub(1)) as u16;

    let text: Vec<Line> = editor.lines.iter().map(|line| Line::from(line.clone())).collect();
    let paragraph = Paragraph::new(text).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    let cursor_y = area.y + 1 + (editor.row as u16).saturating_sub(scroll);
    let cursor_x = area.x + 1 + editor.col as u16;
    if cursor_y < area.y + area.height - 1 {
        frame.set_cursor(cursor_x.min(area.x + area.width.saturating_sub(2)), cursor_y);
    }
}

fn draw_bottom(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }

    match &app.mode {
        Mode::Prompt(prompt) => {
            let title = match (prompt.kind, prompt.regex) {
                (PromptKind::Search, false) => "Search",
                (PromptKind::Search, true) => "Search (regex)",
                (PromptKind::Autofill, _) => "Autofill from text",
            };
            let paragraph = Paragraph::new(prompt.input.as_str())
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(paragraph, area);
            frame.set_cursor(area.x + 1 + prompt.cursor as u16, area.y + 1);
        }
        Mode::EditLine(editor) => {
            let title = if editor.placeholder { "Placeholder value" } else { "Line text" };
            let mut lines = vec![Line::from(editor.input.clone())];
            match &editor.panel {
                SuggestionPanel::Inactive => {}
                SuggestionPanel::Pending => {
                    lines.push(Line::from(Span::styled(
                        "Generating suggestions…",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                SuggestionPanel::Empty => {
                    lines.push(Line::from(Span::styled(
                        "No suggestions available.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                SuggestionPanel::Ready { items, selected } => {
                    for (index, item) in items.iter().enumerate() {
                        let style = if index == *selected {
                            Style::default().add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        lines.push(Line::from(Span::styled(format!("  {item}"), style)));
                    }
                }
            }
            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(title))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
            frame.set_cursor(area.x + 1 + editor.cursor as u16, area.y + 1);
        }
        Mode::Browse | Mode::RawEdit(_) => {}
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(toast) = &app.toast {
        Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let hints = match &app.mode {
            Mode::Browse => {
                "q quit · tab section · ↑↓ line · enter edit · space toggle · a add · d delete · e raw · g generate · i autofill · / search · x export"
            }
            Mode::EditLine(_) => "enter apply · tab use suggestion · ↑↓ pick · esc cancel",
            Mode::RawEdit(_) => "ctrl-s save · esc discard",
            Mode::Prompt(prompt) => match prompt.kind {
                PromptKind::Search => "enter search · ctrl-r regex · esc cancel",
                PromptKind::Autofill => "enter submit · esc cancel",
            },
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray)))
    };
    frame.render_widget(Paragraph::new(content), area);
}
