use log::{debug, info};
use crate::domain::workout::Workout;
use crate::error::TrackerError;
use crate::storage::key_value::KeyValueStorage;

pub const DEFAULT_KEY: &'static str = "workouts";

/// Persists the complete workout collection as one JSON array under a fixed key
pub struct WorkoutStorage {
    backend: Box<dyn KeyValueStorage>,
    key: String
}

impl WorkoutStorage {
    pub fn new(backend: Box<dyn KeyValueStorage>, key: &str) -> Self {
        Self { backend, key: key.to_string() }
    }

    /// Overwrites the stored collection with `workouts`
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), TrackerError> {
        let json = serde_json::to_string(workouts)?;
        self.backend.set_item(&self.key, &json)?;
        debug!("Saved {} workouts under key '{}'", workouts.len(), self.key);
        Ok(())
    }

    /// Returns the stored collection in its original order, or an empty one if nothing is stored
    pub fn load(&mut self) -> Result<Vec<Workout>, TrackerError> {
        match self.backend.get_item(&self.key)? {
            Some(json) => {
                let workouts: Vec<Workout> = serde_json::from_str(&json)?;
                info!("Loaded {} workouts from storage", workouts.len());
                Ok(workouts)
            }
            None => {
                debug!("Nothing stored under key '{}'", self.key);
                Ok(Vec::new())
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), TrackerError> {
        info!("Remove all workouts from storage");
        self.backend.remove_item(&self.key)
    }
}
