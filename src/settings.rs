use std::rc::Rc;

use crate::store::{PersistentStore, SETTINGS_KEY, StoreResult};
use crate::theme::Theme;
use crate::types::{Settings, SettingsUpdate};

/// Singleton preferences record, persisted under [`SETTINGS_KEY`] after
/// every change.
pub struct SettingsRepository {
    store: Rc<PersistentStore>,
    settings: Settings,
}

impl SettingsRepository {
    pub fn load(store: Rc<PersistentStore>) -> Self {
        let settings: Settings = store.load_or_default(SETTINGS_KEY);
        Self { store, settings }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merges `update` and persists the whole record. A failed write keeps
    /// the previous settings.
    pub fn set(&mut self, update: &SettingsUpdate) -> StoreResult<&Settings> {
        let mut next = self.settings.clone();
        next.merge(update);
        self.store.save(SETTINGS_KEY, &next)?;
        tracing::debug!(?update, "settings updated");
        self.settings = next;
        Ok(&self.settings)
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<&Settings> {
        self.set(&SettingsUpdate::dark_mode(theme.is_dark()))
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.settings.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::FailingStore;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = Rc::new(PersistentStore::new(MemoryStore::new()));
        let repo = SettingsRepository::load(store);
        assert_eq!(repo.get(), &Settings::default());
        assert_eq!(repo.theme(), Theme::Light);
    }

    #[test]
    fn test_volume_round_trip_keeps_other_fields() {
        let store = Rc::new(PersistentStore::new(MemoryStore::new()));
        let mut repo = SettingsRepository::load(Rc::clone(&store));
        repo.set(&SettingsUpdate::volume(40)).unwrap();

        let reloaded = SettingsRepository::load(store);
        assert_eq!(reloaded.get().volume, 40);
        assert_eq!(
            reloaded.get(),
            &Settings {
                volume: 40,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_malformed_record_uses_defaults() {
        let backend = MemoryStore::new();
        backend.set_item(SETTINGS_KEY, "[1, 2").unwrap();
        let repo = SettingsRepository::load(Rc::new(PersistentStore::new(backend)));
        assert_eq!(repo.get(), &Settings::default());
    }

    #[test]
    fn test_stored_volume_is_clamped() {
        let backend = MemoryStore::new();
        backend
            .set_item(SETTINGS_KEY, r#"{"volume":180,"darkMode":true}"#)
            .unwrap();
        let repo = SettingsRepository::load(Rc::new(PersistentStore::new(backend)));
        assert_eq!(repo.get().volume, 100);
        assert!(repo.get().dark_mode);
    }

    #[test]
    fn test_set_theme_persists_dark_mode() {
        let store = Rc::new(PersistentStore::new(MemoryStore::new()));
        let mut repo = SettingsRepository::load(Rc::clone(&store));
        repo.set_theme(Theme::Dark).unwrap();
        assert!(SettingsRepository::load(store).get().dark_mode);
    }

    #[test]
    fn test_failed_write_keeps_previous_settings() {
        let mut repo = SettingsRepository::load(Rc::new(PersistentStore::new(FailingStore)));
        assert!(repo.set(&SettingsUpdate::volume(10)).is_err());
        assert!(repo.set_theme(Theme::Dark).is_err());
        assert_eq!(repo.get(), &Settings::default());
    }

    #[test]
    fn test_out_of_range_volume_keeps_other_fields() {
        let backend = MemoryStore::new();
        backend
            .set_item(SETTINGS_KEY, r#"{"darkMode":true,"volume":300}"#)
            .unwrap();
        let repo = SettingsRepository::load(Rc::new(PersistentStore::new(backend)));
        assert!(repo.get().dark_mode);
        assert_eq!(repo.get().volume, 100);
    }
}
