//! Map panel: the mapping-widget boundary.
//!
//! Renders a braille world map with one marker per workout and converts
//! terminal mouse positions back to coordinates. The viewport spans
//! `360 / 2^zoom` degrees of longitude across the panel; the latitude span
//! follows the panel aspect, corrected for the 1:2 cell shape of terminal
//! fonts.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};

use crate::model::Coords;

const MIN_ZOOM: i32 = 1;
const MAX_ZOOM: i32 = 18;

/// A rendered workout position: a colored point with a popup-style label.
struct Marker {
    coords: Coords,
    label: String,
    color: Color,
}

/// The interactive map: viewport state plus the markers laid on it.
pub struct MapPanel {
    center: Coords,
    zoom: i32,
    markers: Vec<Marker>,
    area: Rect,
}

impl MapPanel {
    pub fn new(center: Coords, zoom: i32) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            markers: Vec::new(),
            area: Rect::default(),
        }
    }

    /// Adds a marker. Markers accumulate; there is no removal.
    pub fn add_marker(&mut self, coords: Coords, label: String, color: Color) {
        self.markers.push(Marker {
            coords,
            label,
            color,
        });
    }

    /// Re-centers the view, e.g. when a log entry is activated.
    pub fn set_view(&mut self, center: Coords, zoom: i32) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1).max(MIN_ZOOM);
    }

    /// Converts a terminal mouse position to map coordinates.
    /// Returns `None` for positions outside the rendered panel.
    pub fn coords_at(&self, column: u16, row: u16) -> Option<Coords> {
        self.coords_in(self.area, column, row)
    }

    fn coords_in(&self, area: Rect, column: u16, row: u16) -> Option<Coords> {
        if area.width == 0 || area.height == 0 || !area.contains(Position::new(column, row)) {
            return None;
        }
        let ([west, east], [south, north]) = self.bounds(area);
        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        Some(Coords {
            lat: north - fy * (north - south),
            lon: west + fx * (east - west),
        })
    }

    /// Longitude and latitude bounds of the viewport in the given area.
    fn bounds(&self, area: Rect) -> ([f64; 2], [f64; 2]) {
        let lon_span = 360.0 / 2f64.powi(self.zoom);
        let aspect = f64::from(area.height) / f64::from(area.width.max(1));
        // Terminal cells are roughly twice as tall as they are wide.
        let lat_span = lon_span * aspect * 2.0;
        (
            [
                self.center.lon - lon_span / 2.0,
                self.center.lon + lon_span / 2.0,
            ],
            [
                self.center.lat - lat_span / 2.0,
                self.center.lat + lat_span / 2.0,
            ],
        )
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        let (x_bounds, y_bounds) = self.bounds(area);
        // One cell of longitude, used to offset labels off their point.
        let lon_step = (x_bounds[1] - x_bounds[0]) / f64::from(area.width.max(1));
        let markers = &self.markers;

        let canvas = Canvas::default()
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                for marker in markers {
                    ctx.draw(&Points {
                        coords: &[(marker.coords.lon, marker.coords.lat)],
                        color: marker.color,
                    });
                    ctx.print(
                        marker.coords.lon + lon_step,
                        marker.coords.lat,
                        Line::styled(marker.label.clone(), marker.color),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coords = Coords {
        lat: 51.5,
        lon: -0.1,
    };

    #[test]
    fn center_cell_maps_back_to_center() {
        let panel = MapPanel::new(LONDON, 13);
        let area = Rect::new(0, 0, 100, 50);

        let coords = panel.coords_in(area, 50, 25).unwrap();
        assert!((coords.lat - LONDON.lat).abs() < 0.01, "{coords:?}");
        assert!((coords.lon - LONDON.lon).abs() < 0.01, "{coords:?}");
    }

    #[test]
    fn corners_map_to_viewport_edges() {
        let panel = MapPanel::new(LONDON, 13);
        let area = Rect::new(0, 0, 100, 50);
        let ([west, east], [south, north]) = panel.bounds(area);

        let top_left = panel.coords_in(area, 0, 0).unwrap();
        assert!(top_left.lon < west + (east - west) * 0.02);
        assert!(top_left.lat > north - (north - south) * 0.04);

        let bottom_right = panel.coords_in(area, 99, 49).unwrap();
        assert!(bottom_right.lon > east - (east - west) * 0.02);
        assert!(bottom_right.lat < south + (north - south) * 0.04);
    }

    #[test]
    fn positions_outside_the_panel_are_ignored() {
        let panel = MapPanel::new(LONDON, 13);
        let area = Rect::new(10, 5, 40, 20);

        assert!(panel.coords_in(area, 0, 0).is_none());
        assert!(panel.coords_in(area, 50, 10).is_none());
        assert!(panel.coords_in(area, 20, 25).is_none());
        assert!(panel.coords_in(area, 20, 10).is_some());
    }

    #[test]
    fn unrendered_panel_swallows_clicks() {
        let panel = MapPanel::new(LONDON, 13);
        assert!(panel.coords_at(0, 0).is_none());
    }

    #[test]
    fn zooming_in_narrows_the_span() {
        let area = Rect::new(0, 0, 100, 50);
        let wide = MapPanel::new(LONDON, 10);
        let narrow = MapPanel::new(LONDON, 11);

        let ([w0, e0], _) = wide.bounds(area);
        let ([w1, e1], _) = narrow.bounds(area);
        assert!(((e1 - w1) - (e0 - w0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn set_view_recenters() {
        let mut panel = MapPanel::new(LONDON, 13);
        let paris = Coords { lat: 48.8, lon: 2.3 };
        let area = Rect::new(0, 0, 100, 50);

        panel.set_view(paris, 13);
        let coords = panel.coords_in(area, 50, 25).unwrap();
        assert!((coords.lat - paris.lat).abs() < 0.01);
        assert!((coords.lon - paris.lon).abs() < 0.01);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut panel = MapPanel::new(LONDON, 99);
        assert_eq!(panel.zoom, MAX_ZOOM);

        panel.zoom_in();
        assert_eq!(panel.zoom, MAX_ZOOM);

        panel.set_view(LONDON, MIN_ZOOM);
        panel.zoom_out();
        assert_eq!(panel.zoom, MIN_ZOOM);
    }

    #[test]
    fn markers_accumulate() {
        let mut panel = MapPanel::new(LONDON, 13);
        panel.add_marker(LONDON, "🏃 Running on July 15".to_string(), Color::Green);
        panel.add_marker(
            Coords { lat: 48.8, lon: 2.3 },
            "🚴 Cycling on July 16".to_string(),
            Color::Yellow,
        );
        assert_eq!(panel.markers.len(), 2);
    }
}
