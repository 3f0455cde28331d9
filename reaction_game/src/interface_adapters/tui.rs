// Terminal presentation: draws snapshots and turns key presses into game events.

use crate::interface_adapters::view::{
    IDLE_TEXT, Screen, USERNAME_PROMPT, WAITING_TEXT, leaderboard_lines, leaderboard_title,
    outcome_text,
};
use crate::use_cases::{GameEvent, GameSnapshot};
use crossterm::event::{Event as CEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use std::io::{self, Stdout};
use tokio::select;
use tokio::sync::{mpsc, watch};

const GREEN: Color = Color::Rgb(0x1e, 0xc3, 0x1e);
const PANEL: Color = Color::Rgb(0x11, 0x11, 0x11);

/// Local view state: the latest snapshot plus the username being typed.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub draft: String,
    pub snapshot: GameSnapshot,
}

impl UiState {
    pub fn new(snapshot: GameSnapshot) -> Self {
        Self {
            draft: String::new(),
            snapshot,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::from_snapshot(&self.snapshot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Send(GameEvent),
    Redraw,
    Quit,
    Ignore,
}

/// Maps one terminal event to a user intent for the current screen.
pub fn handle_key_event(ev: CEvent, ui: &mut UiState) -> KeyAction {
    let CEvent::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = ev
    else {
        return KeyAction::Redraw;
    };
    if kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match (code, modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
        _ => {}
    }

    match ui.screen() {
        Screen::UsernamePrompt => match code {
            KeyCode::Enter => KeyAction::Send(GameEvent::ConfirmUsername(ui.draft.clone())),
            KeyCode::Backspace => {
                ui.draft.pop();
                KeyAction::Redraw
            }
            KeyCode::Char(c) if !c.is_control() => {
                ui.draft.push(c);
                KeyAction::Redraw
            }
            _ => KeyAction::Ignore,
        },
        Screen::Idle { .. } => match code {
            KeyCode::Enter | KeyCode::Char('s') => KeyAction::Send(GameEvent::Start),
            KeyCode::Char('l') => toggle_leaderboard(ui),
            _ => KeyAction::Ignore,
        },
        // Early taps still go through; the controller ignores them.
        Screen::GetReady | Screen::TapNow => match code {
            KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Send(GameEvent::Tap),
            _ => KeyAction::Ignore,
        },
        Screen::Outcome { .. } => match code {
            KeyCode::Enter | KeyCode::Char('p') => KeyAction::Send(GameEvent::PlayAgain),
            KeyCode::Char('l') => toggle_leaderboard(ui),
            _ => KeyAction::Ignore,
        },
    }
}

fn toggle_leaderboard(ui: &UiState) -> KeyAction {
    if ui.snapshot.leaderboard_visible {
        KeyAction::Send(GameEvent::HideLeaderboard)
    } else {
        KeyAction::Send(GameEvent::ShowLeaderboard)
    }
}

/// Owns the terminal while the game runs; restores it on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, ui: &UiState) -> io::Result<()> {
        self.terminal.draw(|f| draw_ui(f, ui))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

/// Leaves raw mode and the alternate screen. Safe to call when neither is active.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

/// Runs the terminal front end until the user quits or the game loop goes away.
pub async fn run_terminal(
    event_tx: mpsc::Sender<GameEvent>,
    mut snapshot_rx: watch::Receiver<GameSnapshot>,
) -> io::Result<()> {
    let mut terminal = TerminalGuard::enter()?;
    let mut ui = UiState::new(snapshot_rx.borrow_and_update().clone());
    let mut events = EventStream::new();

    loop {
        terminal.draw(&ui)?;

        select! {
            maybe_ev = events.next() => {
                let Some(ev) = maybe_ev else { break };
                match handle_key_event(ev?, &mut ui) {
                    KeyAction::Send(event) => {
                        if event_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    KeyAction::Quit => {
                        let _ = event_tx.send(GameEvent::Shutdown).await;
                        break;
                    }
                    KeyAction::Redraw | KeyAction::Ignore => {}
                }
            }
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                ui.snapshot = snapshot_rx.borrow_and_update().clone();
            }
        }
    }

    Ok(())
}

fn draw_ui(f: &mut ratatui::Frame, ui: &UiState) {
    let screen = ui.screen();
    let background = if screen == Screen::TapNow { GREEN } else { Color::Black };
    f.render_widget(
        Block::default().style(Style::default().bg(background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(25),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let text_style = Style::default()
        .fg(Color::White)
        .bg(background)
        .add_modifier(Modifier::BOLD);

    match &screen {
        Screen::UsernamePrompt => {
            f.render_widget(centered(USERNAME_PROMPT, text_style), chunks[1]);
            let input = Paragraph::new(ui.draft.as_str())
                .style(Style::default().fg(Color::White).bg(Color::Rgb(0x22, 0x22, 0x22)))
                .block(Block::default().borders(Borders::ALL).title("Username"));
            f.render_widget(input, narrow(chunks[2], 40));
        }
        Screen::Idle { .. } => f.render_widget(centered(IDLE_TEXT, text_style), chunks[1]),
        Screen::GetReady => f.render_widget(centered(WAITING_TEXT, text_style), chunks[1]),
        Screen::TapNow => f.render_widget(centered("TAP!", text_style), chunks[1]),
        Screen::Outcome { reaction_time, .. } => {
            f.render_widget(centered(&outcome_text(*reaction_time), text_style), chunks[1]);
        }
    }

    if screen != Screen::UsernamePrompt {
        f.render_widget(actions_line(&screen, background), chunks[2]);
    }

    if screen.shows_leaderboard() {
        let mut items: Vec<ListItem> = leaderboard_lines(&ui.snapshot.leaderboard)
            .into_iter()
            .map(|line| ListItem::new(Line::raw(line)))
            .collect();
        if items.is_empty() {
            items.push(ListItem::new(Line::raw("No results yet")));
        }
        let list = List::new(items)
            .style(Style::default().fg(Color::White).bg(PANEL))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(leaderboard_title(ui.snapshot.leaderboard_capacity)),
            );
        f.render_widget(list, narrow(chunks[3], 60));
    }

    let player = ui.snapshot.username.as_deref().unwrap_or("-");
    let status = Paragraph::new(format!("Player: {player} | Esc quits"))
        .style(Style::default().fg(Color::Gray).bg(background));
    f.render_widget(status, chunks[4]);
}

fn centered<'a>(text: &'a str, style: Style) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
}

fn actions_line(screen: &Screen, background: Color) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (label, key) in screen.actions() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[{key}] {label}"),
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(background))
        .alignment(Alignment::Center)
}

// Horizontally centered slice of `area`, at most `width` columns wide.
fn narrow(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
