use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The reviewer's unsaved topic list, held in the cookie session until
/// committed. Nothing here touches the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftList {
    pub items: Vec<String>,
}

impl DraftList {
    pub fn add(&mut self, content: &str) {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            self.items.push(trimmed.to_string());
        }
    }

    /// Remove by position; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn session_key(review_id: i64) -> String {
    format!("topic_drafts:{review_id}")
}

pub fn load(session: &Session, review_id: i64) -> DraftList {
    session
        .get::<DraftList>(&session_key(review_id))
        .unwrap_or(None)
        .unwrap_or_default()
}

pub fn store(session: &Session, review_id: i64, drafts: &DraftList) -> Result<(), AppError> {
    session
        .insert(session_key(review_id), drafts)
        .map_err(|e| AppError::Session(e.to_string()))
}

/// Drop the draft list, after a successful commit.
pub fn clear(session: &Session, review_id: i64) {
    session.remove(&session_key(review_id));
}
