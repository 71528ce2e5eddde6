//! Output formatting for CLI display.

use crate::model::{Discipline, Workout, pace, speed};

/// Format a workout for human-readable display.
pub(super) fn format_workout(workout: &Workout) -> String {
    let head = format!(
        "{} {} — {} km in {} min at ({:.4}, {:.4})",
        workout.kind().icon(),
        workout.description(),
        workout.distance_km,
        workout.duration_min,
        workout.coords.lat,
        workout.coords.lon,
    );
    match workout.details {
        Discipline::Running { cadence } => format!(
            "{head}, pace {:.1} min/km, cadence {cadence} spm",
            pace(workout.distance_km, workout.duration_min)
        ),
        Discipline::Cycling { elevation_gain } => format!(
            "{head}, speed {:.1} km/h, elevation {elevation_gain} m",
            speed(workout.distance_km, workout.duration_min)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use uuid::Uuid;

    use crate::model::Coords;

    #[test]
    fn formats_running_with_pace() {
        let workout = Workout {
            id: Uuid::now_v7(),
            recorded_at: Timestamp::new(1_784_116_800, 0).unwrap(),
            coords: Coords { lat: 51.5, lon: -0.1 },
            distance_km: 5.0,
            duration_min: 30.0,
            details: Discipline::Running { cadence: 150.0 },
        };

        let line = format_workout(&workout);
        assert!(line.contains("Running on"), "{line}");
        assert!(line.contains("5 km in 30 min"), "{line}");
        assert!(line.contains("pace 6.0 min/km"), "{line}");
        assert!(line.contains("cadence 150 spm"), "{line}");
    }

    #[test]
    fn formats_cycling_with_speed() {
        let workout = Workout {
            id: Uuid::now_v7(),
            recorded_at: Timestamp::new(1_784_116_800, 0).unwrap(),
            coords: Coords { lat: 48.8, lon: 2.3 },
            distance_km: 20.0,
            duration_min: 60.0,
            details: Discipline::Cycling {
                elevation_gain: 400.0,
            },
        };

        let line = format_workout(&workout);
        assert!(line.contains("Cycling on"), "{line}");
        assert!(line.contains("speed 20.0 km/h"), "{line}");
        assert!(line.contains("elevation 400 m"), "{line}");
    }
}
