//! Workout entry form: opened by a map click, closed by a valid submit.

use jiff::Timestamp;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use uuid::Uuid;

use crate::model::{Coords, Discipline, DisciplineKind, Workout};

/// Which form row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Kind,
    Distance,
    Duration,
    Metric,
}

/// The workout entry form, opened on a map click with the clicked
/// coordinates captured.
///
/// The form stays open until a submit passes validation. A further map
/// click only re-captures the coordinates; there is no explicit cancel.
pub struct FormScreen {
    coords: Coords,
    kind: DisciplineKind,
    active: Field,
    distance: String,
    duration: String,
    cadence: String,
    elevation: String,
    error: Option<String>,
}

impl FormScreen {
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            kind: DisciplineKind::Running,
            active: Field::Distance,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
            error: None,
        }
    }

    /// Re-captures the target position: the implicit re-click. Typed input
    /// stays; only the coordinates move.
    pub fn set_coords(&mut self, coords: Coords) {
        self.coords = coords;
    }

    /// Handle a character being typed into the active field.
    pub fn on_char(&mut self, c: char) {
        match self.active {
            // The selector row reacts to the toggle keys only.
            Field::Kind => {
                if c == ' ' {
                    self.toggle_kind();
                }
            }
            Field::Distance => self.distance.push(c),
            Field::Duration => self.duration.push(c),
            Field::Metric => self.metric_buffer_mut().push(c),
        }
    }

    /// Handle backspace.
    pub fn on_backspace(&mut self) {
        match self.active {
            Field::Kind => {}
            Field::Distance => {
                self.distance.pop();
            }
            Field::Duration => {
                self.duration.pop();
            }
            Field::Metric => {
                self.metric_buffer_mut().pop();
            }
        }
    }

    /// ←/→ swap the discipline when the selector row is active.
    pub fn on_toggle(&mut self) {
        if self.active == Field::Kind {
            self.toggle_kind();
        }
    }

    /// Swap running/cycling. Both metric buffers survive the swap, so
    /// toggling back restores what was typed.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub fn next_field(&mut self) {
        self.active = match self.active {
            Field::Kind => Field::Distance,
            Field::Distance => Field::Duration,
            Field::Duration => Field::Metric,
            Field::Metric => Field::Kind,
        };
    }

    pub fn prev_field(&mut self) {
        self.active = match self.active {
            Field::Kind => Field::Metric,
            Field::Distance => Field::Kind,
            Field::Duration => Field::Distance,
            Field::Metric => Field::Duration,
        };
    }

    /// Handle Enter: validate and construct. Returns `Some(workout)` when
    /// the input passes; otherwise records the error and keeps every buffer
    /// intact for correction.
    ///
    /// One rule for both disciplines: distance, duration, and cadence must
    /// be positive finite numbers; elevation gain only has to be finite,
    /// since a net descent is a legitimate ride.
    pub fn on_enter(&mut self) -> Option<Workout> {
        let distance_km = positive_number(&self.distance);
        let duration_min = positive_number(&self.duration);
        let details = match self.kind {
            DisciplineKind::Running => {
                positive_number(&self.cadence).map(|cadence| Discipline::Running { cadence })
            }
            DisciplineKind::Cycling => number(&self.elevation)
                .map(|elevation_gain| Discipline::Cycling { elevation_gain }),
        };

        let (Some(distance_km), Some(duration_min), Some(details)) =
            (distance_km, duration_min, details)
        else {
            self.error = Some("Inputs must be positive, finite numbers.".to_string());
            return None;
        };

        Some(Workout {
            id: Uuid::now_v7(),
            recorded_at: Timestamp::now(),
            coords: self.coords,
            distance_km,
            duration_min,
            details,
        })
    }

    fn metric_buffer_mut(&mut self) -> &mut String {
        match self.kind {
            DisciplineKind::Running => &mut self.cadence,
            DisciplineKind::Cycling => &mut self.elevation,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let chunks = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // kind
            Constraint::Length(1), // distance
            Constraint::Length(1), // duration
            Constraint::Length(1), // metric
            Constraint::Length(1), // error
        ])
        .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(" New workout at ", muted),
            Span::styled(
                format!("{:.4}, {:.4}", self.coords.lat, self.coords.lon),
                Style::default().fg(Color::Gray),
            ),
        ]));
        frame.render_widget(title, chunks[0]);

        let kind_style = if self.active == Field::Kind {
            highlight
        } else {
            Style::default().fg(Color::Gray)
        };
        let kind_row = Paragraph::new(Line::from(vec![
            Span::styled(" Type      ", muted),
            Span::styled(format!("‹ {} ›", self.kind.label()), kind_style),
        ]));
        frame.render_widget(kind_row, chunks[1]);

        frame.render_widget(
            self.input_row("Distance", &self.distance, "km", Field::Distance),
            chunks[2],
        );
        frame.render_widget(
            self.input_row("Duration", &self.duration, "min", Field::Duration),
            chunks[3],
        );
        let (label, unit, value) = match self.kind {
            DisciplineKind::Running => ("Cadence", "spm", &self.cadence),
            DisciplineKind::Cycling => ("Elevation", "m", &self.elevation),
        };
        frame.render_widget(self.input_row(label, value, unit, Field::Metric), chunks[4]);

        if let Some(error) = &self.error {
            let error_row = Paragraph::new(Line::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(error_row, chunks[5]);
        }
    }

    fn input_row(
        &self,
        label: &'static str,
        value: &str,
        unit: &'static str,
        field: Field,
    ) -> Paragraph<'static> {
        let muted = Style::default().fg(Color::DarkGray);
        let active = self.active == field;
        let value_style = if active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if active { "█" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {label:<9} "), muted),
            Span::styled(format!("{value}{cursor}"), value_style),
            Span::styled(format!(" {unit}"), muted),
        ]))
    }
}

fn number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn positive_number(raw: &str) -> Option<f64> {
    number(raw).filter(|v| *v > 0.0)
}
