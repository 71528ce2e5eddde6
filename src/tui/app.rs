//! Application loop: event routing and view synchronization.
//!
//! The session log, the sidebar list, and the map markers are three views
//! of the same collection. They are only touched together, at two sites:
//! hydration from storage and a successful form submit.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use crate::config::Config;
use crate::model::{Discipline, Workout};
use crate::session::SessionLog;
use crate::storage::Storage;

use super::map::MapPanel;
use super::screens::{FormScreen, LogPanel};

/// Zoom applied when a log entry is focused on the map.
const FOCUS_ZOOM: i32 = 13;

/// Runs the TUI event loop until the user quits.
pub fn run(storage: &Storage, config: &Config) -> io::Result<()> {
    let mut terminal = ratatui::init();
    io::stdout().execute(EnableMouseCapture)?;
    let result = event_loop(&mut terminal, storage, config);
    let _ = io::stdout().execute(DisableMouseCapture);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    storage: &Storage,
    config: &Config,
) -> io::Result<()> {
    let mut session = SessionLog::new();
    session.replace(storage.load().map_err(io::Error::other)?);

    let mut map = MapPanel::new(config.start_coords(), config.zoom);
    for workout in session.all() {
        add_marker(&mut map, workout);
    }
    let mut log = LogPanel::new();
    let mut form: Option<FormScreen> = None;

    loop {
        terminal.draw(|frame| render(frame, &session, &mut map, &mut log, form.as_ref()))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                match &mut form {
                    Some(active) => match key.code {
                        KeyCode::Enter => {
                            if let Some(workout) = active.on_enter() {
                                add_marker(&mut map, &workout);
                                session.append(workout);
                                storage
                                    .save(session.all())
                                    .map_err(io::Error::other)?;
                                form = None;
                            }
                        }
                        KeyCode::Tab | KeyCode::Down => active.next_field(),
                        KeyCode::BackTab | KeyCode::Up => active.prev_field(),
                        KeyCode::Left | KeyCode::Right => active.on_toggle(),
                        KeyCode::Backspace => active.on_backspace(),
                        KeyCode::Char(c) => active.on_char(c),
                        _ => {}
                    },
                    None => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Up | KeyCode::Char('k') => log.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => log.move_down(session.len()),
                        KeyCode::Enter => focus_selected(&mut map, &log, &session),
                        KeyCode::Char('+' | '=') => map.zoom_in(),
                        KeyCode::Char('-') => map.zoom_out(),
                        _ => {}
                    },
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(coords) = map.coords_at(column, row) {
                    // A map click opens the form, or re-targets an open one.
                    match &mut form {
                        Some(active) => active.set_coords(coords),
                        None => form = Some(FormScreen::new(coords)),
                    }
                } else if let Some(index) = log.entry_at(column, row, session.len()) {
                    log.select(index, session.len());
                    focus_selected(&mut map, &log, &session);
                }
            }
            _ => {}
        }
    }
}

/// Re-centers the map on the selected entry's stored coordinates.
fn focus_selected(map: &mut MapPanel, log: &LogPanel, session: &SessionLog) {
    if let Some(id) = log.selected_id(session) {
        if let Some(workout) = session.find(id) {
            map.set_view(workout.coords, FOCUS_ZOOM);
        }
    }
}

fn add_marker(map: &mut MapPanel, workout: &Workout) {
    let color = match workout.details {
        Discipline::Running { .. } => Color::Green,
        Discipline::Cycling { .. } => Color::Yellow,
    };
    let label = format!("{} {}", workout.kind().icon(), workout.description());
    map.add_marker(workout.coords, label, color);
}

fn render(
    frame: &mut Frame,
    session: &SessionLog,
    map: &mut MapPanel,
    log: &mut LogPanel,
    form: Option<&FormScreen>,
) {
    let [sidebar, map_area] =
        Layout::horizontal([Constraint::Length(40), Constraint::Min(20)]).areas(frame.area());

    let (title_area, form_area, log_area, help_area) = if form.is_some() {
        let [t, f, l, h] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(sidebar);
        (t, Some(f), l, h)
    } else {
        let [t, l, h] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(sidebar);
        (t, None, l, h)
    };

    let title = Paragraph::new(Line::from(Span::styled(
        " Waymark",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_area);

    if let (Some(form), Some(form_area)) = (form, form_area) {
        form.render(frame, form_area);
    }

    log.render(frame, log_area, session);

    let help = if form.is_some() {
        " ⇥ field  ←→ type  ⏎ save  click map to move"
    } else {
        " click map to add  ↑↓ entries  ⏎ focus  +- zoom  q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );

    map.render(frame, map_area);
}
