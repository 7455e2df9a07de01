//! Voice-reminder notification state for the header bell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bell polls `GET /notifications` on a fixed interval and on tab
//! visibility changes. At most one reminder plays at a time; `playing_id`
//! tracks which.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::types::NotificationItem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<NotificationItem>,
    pub open: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub playing_id: Option<i64>,
    pub deleting_id: Option<i64>,
    /// Bumped when another view changed reminders (e.g. a child was added).
    pub refresh_seq: u64,
}

impl NotificationsState {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Badge text; `None` hides the badge.
    pub fn badge_label(&self) -> Option<String> {
        match self.count() {
            0 => None,
            n if n > 99 => Some("99+".to_owned()),
            n => Some(n.to_string()),
        }
    }

    /// Apply a poll result. A failed poll empties the list.
    pub fn apply_load(&mut self, result: Result<Vec<NotificationItem>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
        if self.playing_id.is_some_and(|id| !self.items.iter().any(|i| i.id == id)) {
            self.playing_id = None;
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Drop a reminder after the backend confirmed the delete.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|i| i.id != id);
        if self.playing_id == Some(id) {
            self.playing_id = None;
        }
        self.deleting_id = None;
    }

    /// Play `id`, or stop it when it is already playing. Returns the new playing id.
    pub fn toggle_play(&mut self, id: i64) -> Option<i64> {
        self.playing_id = if self.playing_id == Some(id) { None } else { Some(id) };
        self.playing_id
    }

    pub fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }
}

/// Absolute URL of a reminder's audio file.
pub fn audio_src(config: &ClientConfig, audio_url: &str) -> String {
    if audio_url.starts_with("http://") || audio_url.starts_with("https://") {
        audio_url.to_owned()
    } else {
        config.endpoint(audio_url)
    }
}
