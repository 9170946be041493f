pub mod coords;
pub mod form_state;
pub mod locale;
pub mod map_zoom;
pub mod workout;
pub mod workout_entry;
pub mod workout_kind;
