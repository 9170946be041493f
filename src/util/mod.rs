pub mod iso8601;
pub mod numeric;
