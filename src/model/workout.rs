//! Workout types: the unit of logging in Waymark.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

/// A logged exercise session, pinned to the map point it was logged at.
///
/// Records are immutable once constructed. Pace, speed, and the description
/// are derived from the stored fields on demand rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub recorded_at: Timestamp,
    pub coords: Coords,

    /// Covered distance in kilometers.
    pub distance_km: f64,

    /// Elapsed time in minutes.
    pub duration_min: f64,

    #[serde(flatten)]
    pub details: Discipline,
}

/// The discipline-specific slice of a workout.
///
/// Serialized with an explicit `discipline` tag so a reloaded record
/// reconstructs the same variant it was saved as.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "lowercase")]
pub enum Discipline {
    Running {
        /// Steps per minute.
        cadence: f64,
    },

    Cycling {
        /// Net elevation gain in meters. Negative on descent-heavy rides.
        elevation_gain: f64,
    },
}

/// Discipline selector without the per-variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineKind {
    Running,
    Cycling,
}

impl Discipline {
    pub fn kind(&self) -> DisciplineKind {
        match self {
            Discipline::Running { .. } => DisciplineKind::Running,
            Discipline::Cycling { .. } => DisciplineKind::Cycling,
        }
    }
}

impl DisciplineKind {
    /// Display name, capitalized as it appears in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            DisciplineKind::Running => "Running",
            DisciplineKind::Cycling => "Cycling",
        }
    }

    /// Marker and list icon.
    pub fn icon(self) -> &'static str {
        match self {
            DisciplineKind::Running => "🏃",
            DisciplineKind::Cycling => "🚴",
        }
    }

    /// The other discipline, for the form's type toggle.
    pub fn toggled(self) -> Self {
        match self {
            DisciplineKind::Running => DisciplineKind::Cycling,
            DisciplineKind::Cycling => DisciplineKind::Running,
        }
    }
}

impl Workout {
    pub fn kind(&self) -> DisciplineKind {
        self.details.kind()
    }

    /// Human-readable title, e.g. "Running on August 6".
    ///
    /// Month and day come from the recording timestamp in the system
    /// time zone.
    pub fn description(&self) -> String {
        let date = self.recorded_at.to_zoned(TimeZone::system());
        format!(
            "{} on {} {}",
            self.kind().label(),
            date.strftime("%B"),
            date.day()
        )
    }
}

/// Average running pace in minutes per kilometer, rounded to one decimal.
pub fn pace(distance_km: f64, duration_min: f64) -> f64 {
    round1(duration_min / distance_km)
}

/// Average cycling speed in kilometers per hour, rounded to one decimal.
pub fn speed(distance_km: f64, duration_min: f64) -> f64 {
    round1(distance_km / (duration_min / 60.0))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
