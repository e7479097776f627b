use anyhow::{Context, Result};
use chrono::Utc;

use crate::model::{HistoryItem, Match, PredictionDetail};
use crate::store::KeyValueStore;

pub const HISTORY_KEY: &str = "pronostiq_history";

/// Past predictions, newest first. Every mutation rewrites the stored list.
pub struct HistoryStore {
    store: Box<dyn KeyValueStore + Send>,
    items: Vec<HistoryItem>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("items", &self.items.len())
            .finish()
    }
}

impl HistoryStore {
    /// Wraps a store without reading it; call [`HistoryStore::load`] at startup.
    pub fn new(store: Box<dyn KeyValueStore + Send>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Reads the stored list. On error the in-memory list is left empty.
    pub fn load(&mut self) -> Result<usize> {
        self.items.clear();
        let Some(raw) = self.store.get(HISTORY_KEY).context("read history")? else {
            return Ok(0);
        };
        self.items = serde_json::from_str(&raw).context("invalid stored history")?;
        Ok(self.items.len())
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filtered(&self, query: &str) -> Vec<&HistoryItem> {
        self.items
            .iter()
            .filter(|item| item.matches_query(query))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn add(&mut self, fixture: Match, prediction: PredictionDetail) -> Result<HistoryItem> {
        self.add_at(fixture, prediction, Utc::now().timestamp_millis())
    }

    /// Prepends an entry created at `timestamp` (Unix ms). The item stays in
    /// memory even if persisting fails.
    pub fn add_at(
        &mut self,
        fixture: Match,
        prediction: PredictionDetail,
        timestamp: i64,
    ) -> Result<HistoryItem> {
        let item = HistoryItem {
            id: self.fresh_id(timestamp),
            fixture,
            prediction,
            timestamp,
        };
        self.items.insert(0, item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Removes the entry with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.store.remove(HISTORY_KEY).context("clear history")
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.items).context("serialize history")?;
        self.store.set(HISTORY_KEY, &json).context("write history")
    }

    fn fresh_id(&self, timestamp: i64) -> String {
        let base = timestamp.to_string();
        if self.get(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryStore;
    use crate::model::{Match, MatchStatus, PredictionDetail, RiskLevel};
    use crate::store::MemoryStore;

    fn fixture() -> Match {
        Match {
            id: "1".to_string(),
            home_team: "A".to_string(),
            away_team: "B".to_string(),
            league: "L".to_string(),
            time: "20:00".to_string(),
            status: MatchStatus::Upcoming,
            score: None,
        }
    }

    fn prediction() -> PredictionDetail {
        PredictionDetail {
            prediction: "A wins".to_string(),
            confidence: 80,
            risk_level: RiskLevel::Low,
            reasoning: vec!["x".to_string()],
            key_stats: vec!["y".to_string()],
        }
    }

    #[test]
    fn same_millisecond_ids_get_suffixes() {
        let mut history = HistoryStore::new(Box::new(MemoryStore::new()));
        let a = history.add_at(fixture(), prediction(), 1_000).expect("add");
        let b = history.add_at(fixture(), prediction(), 1_000).expect("add");
        let c = history.add_at(fixture(), prediction(), 1_000).expect("add");
        assert_eq!(a.id, "1000");
        assert_eq!(b.id, "1000-2");
        assert_eq!(c.id, "1000-3");
    }
}
