use std::cell::Cell;
use std::rc::Rc;
use log::{debug, info, warn};
use crate::domain::coords::Coords;
use crate::domain::map_zoom::MapZoom;
use crate::domain::workout_entry::WorkoutEntry;
use crate::domain::workout_kind::WorkoutKind;
use crate::view::{FormView, ListView, MapView, SessionHost, Views};

/// Prints map operations instead of drawing them
pub struct ConsoleMap;

impl MapView for ConsoleMap {
    fn initialize(&mut self, center: Coords, zoom: MapZoom) {
        println!("Map centered at {} with zoom {}", center, zoom.value());
    }

    fn add_marker(&mut self, coords: Coords, label: &str, style_hint: &str) {
        debug!("Marker style {style_hint}");
        println!("Marker at {coords}: {label}");
    }

    fn pan_to(&mut self, coords: Coords, zoom: MapZoom, animate: bool) {
        debug!("Pan animated: {animate}");
        println!("Map moved to {} with zoom {}", coords, zoom.value());
    }
}

pub struct ConsoleList;

impl ListView for ConsoleList {
    fn append_entry(&mut self, entry: &WorkoutEntry) {
        println!("{entry}");
    }
}

pub struct ConsoleForm;

impl FormView for ConsoleForm {
    fn show(&mut self) {
        println!("Enter: submit <distance> <duration> <cadence|elevation>");
    }

    fn hide(&mut self) {
        debug!("Form cleared and hidden");
    }

    fn toggle_kind_field(&mut self, kind: WorkoutKind) {
        let field = match kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation gain"
        };
        println!("Workout type {}, third field is {field}", kind.name());
    }
}

/// Reports messages on the terminal and records restart requests in a shared flag
pub struct ConsoleHost {
    restart: Rc<Cell<bool>>
}

impl ConsoleHost {
    pub fn new(restart: Rc<Cell<bool>>) -> Self {
        Self { restart }
    }
}

impl SessionHost for ConsoleHost {
    fn alert(&mut self, message: &str) {
        warn!("Alert: {message}");
        eprintln!("Error: {message}");
    }

    fn warn(&mut self, message: &str) {
        warn!("{message}");
    }

    fn restart(&mut self) {
        info!("Session restart requested");
        self.restart.set(true);
    }
}

impl Views {
    /// Terminal collaborators. The returned flag is raised when the session asks for a restart.
    pub fn console() -> (Self, Rc<Cell<bool>>) {
        let restart = Rc::new(Cell::new(false));
        let views = Self {
            map: Box::new(ConsoleMap),
            list: Box::new(ConsoleList),
            form: Box::new(ConsoleForm),
            host: Box::new(ConsoleHost::new(restart.clone()))
        };
        (views, restart)
    }
}
