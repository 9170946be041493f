use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::TrackerError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling
}

impl WorkoutKind {
    pub const VALUES: [Self; 2] = [Self::Running, Self::Cycling];

    /// Lowercase name as used in forms and persisted records
    pub fn name(&self) -> &'static str {
        match *self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling"
        }
    }

    /// Name with an upper-case first character, e.g. "Running"
    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new()
        }
    }

    pub fn icon(&self) -> &'static str {
        match *self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚴‍♀️"
        }
    }

    /// Style hint for the map popup
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::VALUES.into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrackerError::UnknownKind(s.to_string()))
    }
}
