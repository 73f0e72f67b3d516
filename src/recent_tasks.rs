//! Most-recently-viewed task ids, kept in durable storage under
//! `recentTasks`.

use serde_json::Value;

use crate::constants::{RECENT_TASKS_KEY, RECENT_TASKS_LIMIT};
use crate::storage::{JsonStore, KeyValueStore};

pub struct RecentTasks<S> {
    store: JsonStore<S>,
}

impl<S: KeyValueStore> RecentTasks<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self { store }
    }

    /// Record a view of `task_id`. Returns `false` if the write failed.
    pub fn record(&self, task_id: &str) -> bool {
        let updated = promote(self.ids(), task_id, RECENT_TASKS_LIMIT);
        self.store.set(RECENT_TASKS_KEY, &updated)
    }

    /// Most-recent-first list; empty when nothing (or garbage) is stored.
    /// Numeric ids written by older pages come back as their decimal text;
    /// other non-string entries are skipped.
    pub fn ids(&self) -> Vec<String> {
        let stored: Vec<Value> = self.store.get(RECENT_TASKS_KEY).unwrap_or_default();
        stored
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) -> bool {
        self.store.remove(RECENT_TASKS_KEY)
    }
}

/// Put `id` in front, cap at `limit`, then drop later repeats. A re-push
/// into a full list therefore loses the oldest entry.
pub fn promote(mut current: Vec<String>, id: &str, limit: usize) -> Vec<String> {
    current.insert(0, id.to_string());
    current.truncate(limit);

    let mut out: Vec<String> = Vec::with_capacity(current.len());
    for candidate in current {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}
