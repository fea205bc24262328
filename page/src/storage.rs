//! Browser-backed theme persistence and the OS color-scheme signal.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing or a blocked `localStorage`
//! degrades to "nothing stored" and writes are logged and dropped.

use interactions::settings::SettingsStore;
use web_sys::{Storage, Window};

/// [`SettingsStore`] over `window.localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {err:?}");
        }
    }
}

/// Whether the OS asks for a dark color scheme.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}
