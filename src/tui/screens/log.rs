//! Workout log sidebar: one entry per logged session.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use uuid::Uuid;

use crate::model::{Discipline, Workout, pace, speed};
use crate::session::SessionLog;

/// Lines each rendered entry occupies.
const ENTRY_HEIGHT: u16 = 2;

/// The workout list: renders the session log and tracks the selection.
#[derive(Default)]
pub struct LogPanel {
    selected: usize,
    area: Rect,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    /// The identifier tag of the selected entry, for lookup in the log.
    pub fn selected_id(&self, session: &SessionLog) -> Option<Uuid> {
        session.all().get(self.selected).map(|w| w.id)
    }

    /// Maps a mouse position to the index of the entry under it.
    pub fn entry_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let index = usize::from((row - self.area.y) / ENTRY_HEIGHT);
        (index < len).then_some(index)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, session: &SessionLog) {
        self.area = area;

        if session.is_empty() {
            let hint = Paragraph::new(Line::styled(
                " Click the map to log a workout.",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = session
            .all()
            .iter()
            .enumerate()
            .map(|(i, workout)| self.entry(i, workout))
            .collect();
        frame.render_widget(List::new(items), area);
    }

    fn entry(&self, index: usize, workout: &Workout) -> ListItem<'static> {
        let accent = match workout.details {
            Discipline::Running { .. } => Color::Green,
            Discipline::Cycling { .. } => Color::Yellow,
        };
        let selected = index == self.selected;
        let title_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        let detail_style = if selected {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let pointer = if selected { "› " } else { "  " };

        let metrics = match workout.details {
            Discipline::Running { cadence } => format!(
                "{} km · {} min · {:.1} min/km · {cadence} spm",
                workout.distance_km,
                workout.duration_min,
                pace(workout.distance_km, workout.duration_min),
            ),
            Discipline::Cycling { elevation_gain } => format!(
                "{} km · {} min · {:.1} km/h · {elevation_gain} m",
                workout.distance_km,
                workout.duration_min,
                speed(workout.distance_km, workout.duration_min),
            ),
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(pointer.to_string(), title_style),
                Span::styled(
                    format!("{} {}", workout.kind().icon(), workout.description()),
                    title_style,
                ),
            ]),
            Line::from(Span::styled(format!("    {metrics}"), detail_style)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    use crate::model::Coords;

    fn session_of(n: usize) -> SessionLog {
        let mut session = SessionLog::new();
        for i in 0..n {
            session.append(Workout {
                id: Uuid::now_v7(),
                recorded_at: Timestamp::new(1_784_116_800, 0).unwrap(),
                coords: Coords {
                    lat: f64::from(u32::try_from(i).unwrap()),
                    lon: 0.0,
                },
                distance_km: 5.0,
                duration_min: 30.0,
                details: Discipline::Running { cadence: 150.0 },
            });
        }
        session
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut panel = LogPanel::new();

        panel.move_up();
        assert_eq!(panel.selected, 0);

        panel.move_down(3);
        panel.move_down(3);
        panel.move_down(3);
        assert_eq!(panel.selected, 2);
    }

    #[test]
    fn selected_id_looks_up_in_the_session() {
        let session = session_of(3);
        let mut panel = LogPanel::new();
        panel.move_down(3);

        let id = panel.selected_id(&session).unwrap();
        let workout = session.find(id).unwrap();
        assert_eq!(workout.coords.lat, 1.0);
    }

    #[test]
    fn selected_id_on_empty_session_is_none() {
        let session = SessionLog::new();
        let panel = LogPanel::new();
        assert!(panel.selected_id(&session).is_none());
    }

    #[test]
    fn entry_at_maps_rows_to_indices() {
        let mut panel = LogPanel::new();
        panel.area = Rect::new(0, 2, 40, 10);

        assert_eq!(panel.entry_at(5, 2, 3), Some(0));
        assert_eq!(panel.entry_at(5, 3, 3), Some(0));
        assert_eq!(panel.entry_at(5, 4, 3), Some(1));
        assert_eq!(panel.entry_at(5, 7, 3), Some(2));
    }

    #[test]
    fn entry_at_ignores_positions_outside_the_list() {
        let mut panel = LogPanel::new();
        panel.area = Rect::new(0, 2, 40, 10);

        // Outside the panel entirely.
        assert_eq!(panel.entry_at(50, 3, 3), None);
        assert_eq!(panel.entry_at(5, 1, 3), None);
        // Inside the panel but past the last entry.
        assert_eq!(panel.entry_at(5, 10, 3), None);
    }

    #[test]
    fn select_clamps_to_len() {
        let mut panel = LogPanel::new();
        panel.select(2, 3);
        assert_eq!(panel.selected, 2);

        panel.select(9, 3);
        assert_eq!(panel.selected, 2);
    }
}
