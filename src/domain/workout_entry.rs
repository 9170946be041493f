use crate::domain::workout::{Workout, WorkoutDetails};
use crate::domain::workout_kind::WorkoutKind;

/// One labelled value of a list entry, e.g. "⏱ 30 min"
#[derive(Clone, Debug, PartialEq)]
pub struct EntryField {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str
}

impl EntryField {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// Renderable view of a [Workout] for the workout list.
/// Fields are distance, duration, derived metric, and cadence or elevation gain.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutEntry {
    pub id: String,
    pub kind: WorkoutKind,
    pub description: String,
    pub fields: Vec<EntryField>
}

impl From<&Workout> for WorkoutEntry {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        let mut fields = vec![
            EntryField::new(kind.icon(), workout.distance().to_string(), "km"),
            EntryField::new("⏱", workout.duration().to_string(), "min")
        ];
        match *workout.details() {
            WorkoutDetails::Running { cadence, pace } => {
                fields.push(EntryField::new("⚡️", format!("{pace:.1}"), "min/km"));
                fields.push(EntryField::new("🦶🏼", cadence.to_string(), "spm"));
            }
            WorkoutDetails::Cycling { elevation_gain, speed } => {
                fields.push(EntryField::new("⚡️", format!("{speed:.1}"), "km/h"));
                fields.push(EntryField::new("⛰", elevation_gain.to_string(), "m"));
            }
        }
        Self {
            id: workout.id().to_string(),
            kind,
            description: workout.description().to_string(),
            fields
        }
    }
}

impl std::fmt::Display for WorkoutEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}:", self.id, self.description)?;
        for field in &self.fields {
            write!(f, "  {} {} {}", field.icon, field.value, field.unit)?;
        }
        Ok(())
    }
}
