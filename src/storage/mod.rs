pub mod key_value;
pub mod sqlite_storage;
pub mod workout_storage;
