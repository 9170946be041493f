pub mod command;
pub mod database;
pub mod domain;
pub mod error;
pub mod geolocation;
pub mod settings;
pub mod state;
pub mod storage;
pub mod util;
pub mod view;
