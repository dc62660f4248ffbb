pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod log;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use log::ActivityLog;
pub use state::AppState;
