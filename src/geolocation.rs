use std::future::Future;
use log::debug;
use crate::domain::coords::Coords;
use crate::error::TrackerError;

/// Source of the user's current position. The answer may arrive late or never,
/// callers are expected to bound the wait.
pub trait GeolocationProvider {
    fn current_position(&self) -> impl Future<Output = Result<Coords, TrackerError>>;
}

/// Always reports the same, configured position
pub struct FixedPosition(pub Coords);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> impl Future<Output = Result<Coords, TrackerError>> {
        let coords = self.0;
        async move {
            debug!("Current position is {coords}");
            Ok(coords)
        }
    }
}

/// Used when no position is configured
pub struct NoGeolocation;

impl GeolocationProvider for NoGeolocation {
    fn current_position(&self) -> impl Future<Output = Result<Coords, TrackerError>> {
        async {
            Err(TrackerError::GeolocationUnavailable("no position source configured".to_string()))
        }
    }
}
