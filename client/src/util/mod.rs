pub mod debounce;
pub mod startapp;

pub use self::debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use self::startapp::{InitPayload, START_PARAM, start_app_token};
