//! Core data model for Waymark: workout records and their derived metrics.

mod workout;

pub use workout::{Coords, Discipline, DisciplineKind, Workout, pace, speed};
