use crate::catalog;
use chrono::{DateTime, Local};

/// A single recorded activity. Name, points, and icon are copied out of the
/// catalog at creation time, so the record stands on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedActivity {
    pub id: i64,
    pub name: String,
    pub points: u64,
    pub icon: String,
    pub logged_at: DateTime<Local>,
}

/// Count and point total derived from the current entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub count: usize,
    pub total_points: u64,
}

/// The widget's whole state: logged entries newest first, the pending form
/// selection, and a running total kept in step with the entries.
///
/// Every mutation happens inside a single `&mut self` call, so callers never
/// see entries and total disagree.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LoggedActivity>,
    selected: Option<String>,
    form_open: bool,
    total_points: u64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LoggedActivity] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Closing the form also discards any pending selection.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.selected = None;
    }

    /// Sets the pending selection. A name that is not in the catalog is
    /// ignored; the page only offers catalog names, so this guards against
    /// stale boundary input rather than a real failure.
    pub fn select_template(&mut self, name: &str) {
        if catalog::find(name).is_some() {
            self.selected = Some(name.to_string());
        }
    }

    /// Logs the currently selected activity at the current time.
    pub fn confirm_add(&mut self) -> Option<&LoggedActivity> {
        self.confirm_add_at(Local::now())
    }

    /// Logs the currently selected activity with an explicit timestamp.
    ///
    /// With no selection this is a no-op. On success the new entry is
    /// prepended (newest first), the total grows by the template's points,
    /// and the form closes with the selection cleared.
    pub fn confirm_add_at(&mut self, now: DateTime<Local>) -> Option<&LoggedActivity> {
        let name = self.selected.take()?;
        let template = match catalog::find(&name) {
            Some(template) => template,
            None => return None,
        };

        let entry = LoggedActivity {
            id: self.next_id(now),
            name: template.name.to_string(),
            points: template.points,
            icon: template.icon.to_string(),
            logged_at: now,
        };

        self.total_points += entry.points;
        self.entries.insert(0, entry);
        self.form_open = false;

        self.entries.first()
    }

    /// Removes the entry with this id, if any, and gives its points back.
    /// Unknown ids are ignored; the page can only hold ids this log handed
    /// out, so a miss is a benign race, not a defect.
    pub fn remove_entry(&mut self, id: i64) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let removed = self.entries.remove(index);
        self.total_points -= removed.points;
        true
    }

    pub fn derived_stats(&self) -> DerivedStats {
        DerivedStats {
            count: self.entries.len(),
            total_points: self.total_points,
        }
    }

    /// Ids follow the creation timestamp in milliseconds but always exceed
    /// the newest existing id, so two adds in the same millisecond still get
    /// distinct, increasing ids.
    fn next_id(&self, now: DateTime<Local>) -> i64 {
        let stamp = now.timestamp_millis();
        match self.entries.first() {
            Some(newest) if stamp <= newest.id => newest.id + 1,
            _ => stamp,
        }
    }
}
