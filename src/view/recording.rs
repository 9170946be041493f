use std::cell::RefCell;
use std::rc::Rc;
use crate::domain::coords::Coords;
use crate::domain::map_zoom::MapZoom;
use crate::domain::workout_entry::WorkoutEntry;
use crate::domain::workout_kind::WorkoutKind;
use crate::view::{FormView, ListView, MapView, SessionHost, Views};

/// Everything the session asked its collaborators to do
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    MapInitialized(Coords, u8),
    Marker(Coords, String, String),
    PanTo(Coords, u8, bool),
    Entry(WorkoutEntry),
    FormShown,
    FormHidden,
    KindToggled(WorkoutKind),
    Alert(String),
    Warning(String),
    Restart
}

pub type EventLog = Rc<RefCell<Vec<ViewEvent>>>;

struct Recorder(EventLog);

impl Recorder {
    fn push(&self, event: ViewEvent) {
        self.0.borrow_mut().push(event);
    }
}

impl MapView for Recorder {
    fn initialize(&mut self, center: Coords, zoom: MapZoom) {
        self.push(ViewEvent::MapInitialized(center, zoom.value()));
    }

    fn add_marker(&mut self, coords: Coords, label: &str, style_hint: &str) {
        self.push(ViewEvent::Marker(coords, label.to_string(), style_hint.to_string()));
    }

    fn pan_to(&mut self, coords: Coords, zoom: MapZoom, animate: bool) {
        self.push(ViewEvent::PanTo(coords, zoom.value(), animate));
    }
}

impl ListView for Recorder {
    fn append_entry(&mut self, entry: &WorkoutEntry) {
        self.push(ViewEvent::Entry(entry.clone()));
    }
}

impl FormView for Recorder {
    fn show(&mut self) {
        self.push(ViewEvent::FormShown);
    }

    fn hide(&mut self) {
        self.push(ViewEvent::FormHidden);
    }

    fn toggle_kind_field(&mut self, kind: WorkoutKind) {
        self.push(ViewEvent::KindToggled(kind));
    }
}

impl SessionHost for Recorder {
    fn alert(&mut self, message: &str) {
        self.push(ViewEvent::Alert(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.push(ViewEvent::Warning(message.to_string()));
    }

    fn restart(&mut self) {
        self.push(ViewEvent::Restart);
    }
}

impl Views {
    /// Collaborators that append every call to the returned log
    pub fn recording() -> (Self, EventLog) {
        let log = EventLog::default();
        let views = Self {
            map: Box::new(Recorder(log.clone())),
            list: Box::new(Recorder(log.clone())),
            form: Box::new(Recorder(log.clone())),
            host: Box::new(Recorder(log.clone()))
        };
        (views, log)
    }
}
