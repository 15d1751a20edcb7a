use std::rc::Rc;

use crate::store::{PersistentStore, QUESTS_KEY, StoreResult};
use crate::types::Quest;

/// Ordered quest collection. Every mutation rewrites the whole collection
/// under [`QUESTS_KEY`].
pub struct QuestRepository {
    store: Rc<PersistentStore>,
    quests: Vec<Quest>,
}

impl QuestRepository {
    /// Reads the stored collection, starting empty when nothing usable is
    /// stored.
    pub fn load(store: Rc<PersistentStore>) -> Self {
        let quests: Vec<Quest> = store.load_or_default(QUESTS_KEY);
        tracing::debug!(count = quests.len(), "quests loaded");
        Self { store, quests }
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(QUESTS_KEY, &self.quests)
    }

    /// Appends `quest`; insertion order is render order. A failed write
    /// leaves the collection as it was.
    pub fn add(&mut self, quest: Quest) -> StoreResult<()> {
        let id = quest.id.clone();
        self.quests.push(quest);
        if let Err(err) = self.save() {
            self.quests.pop();
            return Err(err);
        }
        tracing::info!(%id, "quest added");
        Ok(())
    }

    /// Flips `completed` on the quest with `id` and returns the new value.
    /// An unknown id is ignored and nothing is written.
    pub fn toggle_completion(&mut self, id: &str) -> StoreResult<Option<bool>> {
        let Some(index) = self.quests.iter().position(|q| q.id == id) else {
            tracing::debug!(id, "toggle ignored for unknown quest");
            return Ok(None);
        };
        let completed = !self.quests[index].completed;
        self.quests[index].completed = completed;
        if let Err(err) = self.save() {
            self.quests[index].completed = !completed;
            return Err(err);
        }
        Ok(Some(completed))
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn all(&self) -> &[Quest] {
        &self.quests
    }

    pub fn count(&self) -> usize {
        self.quests.len()
    }

    pub fn count_completed(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::tests::FailingStore;
    use crate::types::{Difficulty, QuestType, ReminderFrequency};

    pub(crate) fn quest(id: &str, completed: bool, created_at: &str) -> Quest {
        Quest {
            id: id.to_string(),
            name: format!("quest {id}"),
            quest_type: QuestType::Hobby,
            difficulty: Difficulty::Adept,
            reminder: false,
            reminder_frequency: ReminderFrequency::None,
            completed,
            created_at: created_at.parse().unwrap(),
        }
    }

    fn repo_with_backend() -> (QuestRepository, Rc<MemoryStore>) {
        let backend = Rc::new(MemoryStore::new());
        let store = Rc::new(PersistentStore::new(Rc::clone(&backend)));
        (QuestRepository::load(store), backend)
    }

    #[test]
    fn test_empty_store_loads_empty_collection() {
        let (repo, _) = repo_with_backend();
        assert_eq!(repo.count(), 0);
        assert_eq!(repo.count_completed(), 0);
    }

    #[test]
    fn test_reload_preserves_order() {
        let backend = Rc::new(MemoryStore::new());
        let store = Rc::new(PersistentStore::new(Rc::clone(&backend)));
        let mut repo = QuestRepository::load(Rc::clone(&store));
        for id in ["c", "a", "b"] {
            repo.add(quest(id, id == "a", "2024-05-06T08:00:00Z")).unwrap();
        }

        let reloaded = QuestRepository::load(store);
        assert_eq!(reloaded.all(), repo.all());
        let ids: Vec<&str> = reloaded.all().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(backend.writes(), 3);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut repo, _) = repo_with_backend();
        repo.add(quest("x", false, "2024-05-06T08:00:00Z")).unwrap();

        assert_eq!(repo.toggle_completion("x").unwrap(), Some(true));
        assert_eq!(repo.count_completed(), 1);
        assert_eq!(repo.toggle_completion("x").unwrap(), Some(false));
        assert!(!repo.get("x").unwrap().completed);
    }

    #[test]
    fn test_unknown_id_is_silent_noop() {
        let (mut repo, backend) = repo_with_backend();
        repo.add(quest("x", false, "2024-05-06T08:00:00Z")).unwrap();
        let writes = backend.writes();

        assert_eq!(repo.toggle_completion("nope").unwrap(), None);
        assert_eq!(backend.writes(), writes);
        assert_eq!(repo.count_completed(), 0);
    }

    #[test]
    fn test_failed_write_rolls_back_add_and_toggle() {
        let mut repo = QuestRepository::load(Rc::new(PersistentStore::new(MemoryStore::new())));
        repo.add(quest("x", false, "2024-05-06T08:00:00Z")).unwrap();

        // Same contents, now backed by a store that refuses writes.
        let mut repo = QuestRepository {
            store: Rc::new(PersistentStore::new(FailingStore)),
            quests: repo.quests,
        };
        assert!(repo.add(quest("y", false, "2024-05-07T08:00:00Z")).is_err());
        assert_eq!(repo.count(), 1);
        assert!(repo.get("y").is_none());

        assert!(repo.toggle_completion("x").is_err());
        assert!(!repo.get("x").unwrap().completed);
    }
}
