pub mod dashboard;
pub mod home;
pub mod insights;
pub mod placeholder;
pub mod routes;
pub mod saved_insights;

pub use routes::{App, Route};
