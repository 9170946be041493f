//! Narrow interfaces to the collaborators of a tracking session: the map widget,
//! the workout list, the input form, and the hosting environment.

pub mod console;
#[cfg(test)]
pub mod recording;

use crate::domain::coords::Coords;
use crate::domain::map_zoom::MapZoom;
use crate::domain::workout_entry::WorkoutEntry;
use crate::domain::workout_kind::WorkoutKind;

pub trait MapView {
    fn initialize(&mut self, center: Coords, zoom: MapZoom);
    fn add_marker(&mut self, coords: Coords, label: &str, style_hint: &str);
    fn pan_to(&mut self, coords: Coords, zoom: MapZoom, animate: bool);
}

pub trait ListView {
    fn append_entry(&mut self, entry: &WorkoutEntry);
}

pub trait FormView {
    /// Shows the form with the focus on the distance field
    fn show(&mut self);
    /// Clears all input fields and hides the form
    fn hide(&mut self);
    /// Switches between the cadence and the elevation gain field
    fn toggle_kind_field(&mut self, kind: WorkoutKind);
}

pub trait SessionHost {
    /// Blocking, user-facing error message
    fn alert(&mut self, message: &str);
    /// Non-blocking warning
    fn warn(&mut self, message: &str);
    /// Requests a new session from a blank state
    fn restart(&mut self);
}

/// The collaborators a session talks to
pub struct Views {
    pub map: Box<dyn MapView>,
    pub list: Box<dyn ListView>,
    pub form: Box<dyn FormView>,
    pub host: Box<dyn SessionHost>
}
