use crate::log::ActivityLog;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Mutex<ActivityLog>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(ActivityLog::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
