use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::time;
use crate::domain::coords::Coords;
use crate::domain::form_state::FormState;
use crate::domain::locale::Locale;
use crate::domain::map_zoom::MapZoom;
use crate::domain::workout::Workout;
use crate::domain::workout_entry::WorkoutEntry;
use crate::domain::workout_kind::WorkoutKind;
use crate::error::TrackerError;
use crate::geolocation::GeolocationProvider;
use crate::storage::workout_storage::WorkoutStorage;
use crate::util::{iso8601, numeric};
use crate::view::Views;

// Ids are the trailing digits of the creation time in milliseconds
const ID_DIGITS: usize = 10;

/// Session store: owns the workouts of the current session and mediates between
/// map clicks, form input, rendering, and persistence.
pub struct App {
    workouts: Vec<Workout>,
    pending_location: Option<Coords>,
    map_ready: bool,
    form_state: FormState,
    selected_kind: WorkoutKind,
    zoom: MapZoom,
    locale: Locale,
    storage: WorkoutStorage,
    views: Views
}

impl App {
    pub fn new(storage: WorkoutStorage, views: Views, zoom: MapZoom, locale: Locale) -> Self {
        Self {
            workouts: Vec::new(),
            pending_location: None,
            map_ready: false,
            form_state: FormState::Hidden,
            selected_kind: WorkoutKind::Running,
            zoom,
            locale,
            storage,
            views
        }
    }

    /// Requests the current position, loads the stored workouts while waiting for it,
    /// and initializes the map once the position is known.
    pub async fn initialize<G: GeolocationProvider>(&mut self, geolocation: &G, timeout: Duration) {
        let position = geolocation.current_position();
        self.load_workouts();
        match time::timeout(timeout, position).await {
            Ok(Ok(coords)) => self.load_map(coords),
            Ok(Err(e)) => {
                warn!("{e}");
                self.views.host.alert("Could not get your position");
            }
            Err(_) => {
                warn!("No position received within {:?}", timeout);
                self.views.host.alert("Could not get your position");
            }
        }
    }

    /// Replaces the session's workouts with the stored ones and renders them.
    /// Unreadable storage counts as empty.
    pub fn load_workouts(&mut self) {
        self.workouts = match self.storage.load() {
            Ok(workouts) => workouts,
            Err(e) => {
                warn!("Cannot load stored workouts, start empty: {e}");
                Vec::new()
            }
        };
        for workout in &self.workouts {
            self.views.list.append_entry(&WorkoutEntry::from(workout));
            if self.map_ready {
                Self::render_marker(&mut self.views, workout);
            }
        }
    }

    /// Initializes the map around `center` and renders markers of already loaded workouts
    pub fn load_map(&mut self, center: Coords) {
        info!("Load map at {center}");
        self.views.map.initialize(center, self.zoom);
        self.map_ready = true;
        for workout in &self.workouts {
            Self::render_marker(&mut self.views, workout);
        }
    }

    pub fn on_map_clicked(&mut self, coords: Coords) {
        if !self.map_ready {
            warn!("Map click at {coords} before the map was loaded, ignored");
            return;
        }
        debug!("Map clicked at {coords}");
        self.pending_location = Some(coords);
        self.form_state = FormState::Shown;
        self.views.form.show();
    }

    pub fn on_kind_changed(&mut self, kind: WorkoutKind) {
        debug!("Workout type changed to {}", kind.name());
        self.selected_kind = kind;
        self.views.form.toggle_kind_field(kind);
    }

    /// Creates a workout at the pending location from raw form input.
    /// `extra` is the cadence of a run or the elevation gain of a ride.
    pub fn on_form_submitted(&mut self, kind: WorkoutKind, distance: &str, duration: &str, extra: &str)
        -> Result<&Workout, TrackerError> {
        let extra_field = match kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation gain"
        };
        let values = numeric::parse_positive("distance", distance)
            .and_then(|distance| Ok((distance, numeric::parse_positive("duration", duration)?)))
            .and_then(|(distance, duration)| Ok((distance, duration, numeric::parse_positive(extra_field, extra)?)));
        let (distance, duration, extra) = match values {
            Ok(values) => values,
            Err(e) => {
                self.views.host.alert("Inputs have to be positive numbers!");
                return Err(e);
            }
        };

        let coords = self.pending_location.ok_or_else(|| {
            error!("Workout submitted without a map location");
            TrackerError::MissingPendingLocation
        })?;

        let date = iso8601::now();
        let id = self.next_id(&date);
        let workout = match Workout::new(id, date, kind, coords, distance, duration, extra, self.locale) {
            Ok(workout) => workout,
            Err(e) => {
                // Pace or speed out of range
                self.views.host.alert("Inputs have to be positive numbers!");
                return Err(e);
            }
        };
        self.pending_location = None;
        info!("Add workout {}: {}", workout.id(), workout.description());
        self.workouts.push(workout);
        let index = self.workouts.len() - 1;

        let workout = &self.workouts[index];
        Self::render_marker(&mut self.views, workout);
        self.views.list.append_entry(&WorkoutEntry::from(workout));
        self.views.form.hide();
        self.form_state = FormState::Hidden;
        self.persist();

        Ok(&self.workouts[index])
    }

    /// Moves the map to the selected workout and counts the interaction. Unknown ids are ignored.
    pub fn on_list_entry_selected(&mut self, id: &str) {
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id() == id) else {
            debug!("No workout with id {id}");
            return;
        };
        if self.map_ready {
            self.views.map.pan_to(workout.coords(), self.zoom, true);
        }
        let clicks = workout.click();
        debug!("Workout {id} selected {clicks} times");
        self.persist();
    }

    /// Deletes all stored workouts and asks the host for a fresh session
    pub fn reset_all(&mut self) {
        if let Err(e) = self.storage.clear() {
            warn!("Cannot clear storage: {e}");
            self.views.host.warn("Stored workouts could not be removed");
        }
        self.workouts.clear();
        self.pending_location = None;
        self.form_state = FormState::Hidden;
        self.map_ready = false;
        self.views.host.restart();
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    pub fn form_state(&self) -> FormState {
        self.form_state
    }

    pub fn selected_kind(&self) -> WorkoutKind {
        self.selected_kind
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    fn render_marker(views: &mut Views, workout: &Workout) {
        views.map.add_marker(workout.coords(), &workout.marker_label(), &workout.kind().popup_class());
    }

    /// Saves the whole collection. A failure only produces a warning.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.workouts) {
            warn!("Cannot save workouts: {e}");
            self.views.host.warn("Workouts could not be saved");
        }
    }

    /// Last digits of the creation time, incremented while already taken
    fn next_id(&self, date: &str) -> String {
        let millis = iso8601::string_to_millis(date).unwrap_or_default();
        let digits = millis.to_string();
        let mut id = digits[digits.len().saturating_sub(ID_DIGITS)..].to_string();
        let width = id.len();
        let mut value: u64 = id.parse().unwrap_or_default();
        while self.find(&id).is_some() {
            value += 1;
            id = format!("{value:0width$}");
        }
        id
    }
}
