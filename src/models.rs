use crate::catalog::ActivityTemplate;
use crate::log::{ActivityLog, LoggedActivity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FormRequest {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub points: u64,
    pub icon: &'static str,
}

impl From<&ActivityTemplate> for CatalogEntry {
    fn from(template: &ActivityTemplate) -> Self {
        Self {
            name: template.name,
            points: template.points,
            icon: template.icon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub name: String,
    pub points: u64,
    pub icon: String,
    pub date: String,
    pub time: String,
}

impl From<&LoggedActivity> for EntryResponse {
    fn from(entry: &LoggedActivity) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            points: entry.points,
            icon: entry.icon.clone(),
            date: entry.logged_at.format("%Y-%m-%d").to_string(),
            time: entry.logged_at.format("%H:%M").to_string(),
        }
    }
}

/// Full widget state as the page sees it. Every mutating endpoint returns
/// this so the page re-renders from a single response.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub entries: Vec<EntryResponse>,
    pub count: usize,
    pub total_points: u64,
    pub form_open: bool,
    pub selected: Option<String>,
}

impl LogResponse {
    pub fn from_log(log: &ActivityLog) -> Self {
        let stats = log.derived_stats();
        Self {
            entries: log.entries().iter().map(EntryResponse::from).collect(),
            count: stats.count,
            total_points: stats.total_points,
            form_open: log.form_open(),
            selected: log.selected().map(str::to_string),
        }
    }
}
