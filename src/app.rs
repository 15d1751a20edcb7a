use std::rc::Rc;

use crate::quests::QuestRepository;
use crate::settings::SettingsRepository;
use crate::store::PersistentStore;

/// Process-wide state: both repositories, loaded once from the same store.
/// Controllers borrow it for the duration of an event.
pub struct AppContext {
    pub quests: QuestRepository,
    pub settings: SettingsRepository,
}

impl AppContext {
    pub fn load(store: PersistentStore) -> Self {
        let store = Rc::new(store);
        Self {
            quests: QuestRepository::load(Rc::clone(&store)),
            settings: SettingsRepository::load(store),
        }
    }
}
