//! In-memory session log: the ordered collection of logged workouts.
//!
//! The log exclusively owns the collection. Renderers and the persistence
//! bridge only read it through [`SessionLog::all`]; entries are never
//! mutated or individually removed once appended.

use uuid::Uuid;

use crate::model::Workout;

/// Ordered, append-only collection of the workouts logged so far.
#[derive(Debug, Default)]
pub struct SessionLog {
    workouts: Vec<Workout>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a workout. Insertion order is the only order.
    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// The full ordered collection.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Wholesale overwrite, used when hydrating from storage.
    pub fn replace(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    /// Looks a workout up by its identifier.
    pub fn find(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    use crate::model::{Coords, Discipline};

    fn sample(lat: f64) -> Workout {
        Workout {
            id: Uuid::now_v7(),
            recorded_at: Timestamp::new(1_784_116_800, 0).unwrap(),
            coords: Coords { lat, lon: -0.1 },
            distance_km: 5.0,
            duration_min: 30.0,
            details: Discipline::Running { cadence: 150.0 },
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut log = SessionLog::new();
        log.append(sample(1.0));
        log.append(sample(2.0));
        log.append(sample(3.0));

        let lats: Vec<f64> = log.all().iter().map(|w| w.coords.lat).collect();
        assert_eq!(lats, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn append_never_shrinks() {
        let mut log = SessionLog::new();
        for i in 0..10 {
            let before = log.len();
            log.append(sample(f64::from(i)));
            assert_eq!(log.len(), before + 1);
        }
    }

    #[test]
    fn find_by_id() {
        let mut log = SessionLog::new();
        let workout = sample(51.5);
        let id = workout.id;
        log.append(workout);
        log.append(sample(48.8));

        let found = log.find(id).unwrap();
        assert_eq!(found.coords.lat, 51.5);
        assert!(log.find(Uuid::now_v7()).is_none());
    }

    #[test]
    fn replace_overwrites_wholesale() {
        let mut log = SessionLog::new();
        log.append(sample(1.0));

        log.replace(vec![sample(7.0), sample(8.0)]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0].coords.lat, 7.0);
    }

    #[test]
    fn empty_log() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        assert!(log.all().is_empty());
    }
}
