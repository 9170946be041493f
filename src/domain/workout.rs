use log::debug;
use serde::{Deserialize, Serialize};
use crate::domain::coords::Coords;
use crate::domain::locale::Locale;
use crate::domain::workout_kind::WorkoutKind;
use crate::error::TrackerError;
use crate::util::iso8601;
use crate::util::numeric::{require_finite, require_positive};

/// Variant data of a workout. The derived metric (pace or speed) is computed once
/// by [Workout::new] and never recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence: f64, // steps per minute
        #[serde(default)]
        pace: f64 // min/km
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64, // meters
        #[serde(default)]
        speed: f64 // km/h
    }
}

impl WorkoutDetails {
    fn derive(kind: WorkoutKind, distance: f64, duration: f64, extra: f64) -> Result<Self, TrackerError> {
        Ok(match kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence: require_positive("cadence", extra)?,
                pace: require_finite("pace", duration / distance)?
            },
            // Elevation gain must be positive as well, for compatibility with existing records
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain: require_positive("elevation gain", extra)?,
                speed: require_finite("speed", distance / (duration / 60.0))?
            }
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling
        }
    }

    /// Cadence for running, elevation gain for cycling
    pub fn extra(&self) -> f64 {
        match *self {
            WorkoutDetails::Running { cadence, .. } => cadence,
            WorkoutDetails::Cycling { elevation_gain, .. } => elevation_gain
        }
    }
}

/// A logged workout. All fields are fixed at construction except the click counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkoutRecord")]
pub struct Workout {
    id: String,
    date: String,
    coords: Coords,
    distance: f64,
    duration: f64,
    clicks: u32,
    description: String,
    #[serde(flatten)]
    details: WorkoutDetails
}

impl Workout {
    /// Validates the raw attributes, then derives the metric and the description.
    /// `extra` is the cadence of a run or the elevation gain of a ride.
    pub fn new(id: String, date: String, kind: WorkoutKind, coords: Coords, distance: f64,
               duration: f64, extra: f64, locale: Locale) -> Result<Self, TrackerError> {
        let distance = require_positive("distance", distance)?;
        let duration = require_positive("duration", duration)?;
        let details = WorkoutDetails::derive(kind, distance, duration, extra)?;
        let description = Self::describe(kind, &date, locale)?;
        debug!("Created {} workout {} at {}", kind.name(), id, coords);
        Ok(Self { id, date, coords, distance, duration, clicks: 0, description, details })
    }

    /// Builds "<Kind> on <month day>" from the ISO-8601 creation date
    fn describe(kind: WorkoutKind, date: &str, locale: Locale) -> Result<String, TrackerError> {
        let (month, day) = iso8601::month_and_day(date)
            .ok_or_else(|| TrackerError::validation("date", date))?;
        Ok(format!("{} on {}", kind.label(), locale.month_day(month, day)))
    }

    /// Registers a user interaction and returns the new count
    pub fn click(&mut self) -> u32 {
        self.clicks += 1;
        self.clicks
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None
        }
    }

    /// Popup text of the map marker
    pub fn marker_label(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description)
    }
}

/// Persisted shape of a [Workout]. Records are passed through [Workout::new] again
/// on load, so the derived metric is recomputed and the raw values are re-validated.
#[derive(Deserialize)]
struct WorkoutRecord {
    id: String,
    date: String,
    coords: Coords,
    distance: f64,
    duration: f64,
    #[serde(default)]
    clicks: u32,
    description: Option<String>,
    #[serde(flatten)]
    details: WorkoutDetails
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = TrackerError;

    fn try_from(record: WorkoutRecord) -> Result<Self, Self::Error> {
        let id = record.id.clone();
        let mut workout = Workout::new(record.id, record.date, record.details.kind(), record.coords,
                                       record.distance, record.duration, record.details.extra(), Locale::default())
            .map_err(|e| TrackerError::CorruptRecord { id, reason: e.to_string() })?;
        workout.clicks = record.clicks;
        if let Some(description) = record.description {
            workout.description = description;
        }
        Ok(workout)
    }
}
