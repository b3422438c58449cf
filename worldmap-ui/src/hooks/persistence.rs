// worldmap-ui/src/hooks/persistence.rs
//!
//! Browser persistence for the map view.
//!
//! The last applied transform is stored in localStorage so users come
//! back to the view they left. Storage failures are never fatal: the
//! widget falls back to the default view and logs a warning.

use serde::{Deserialize, Serialize};
use worldmap_core::Transform;

const STORAGE_KEY: &str = "worldmap_view";

/// View state persisted between sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedView {
    pub transform: Transform,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedView {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            version: Self::CURRENT_VERSION,
        }
    }
}

/// Load the persisted view. Returns `None` if no state exists, parsing
/// fails, or storage is unavailable.
pub fn load_view() -> Option<PersistedView> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY).ok()??;
    decode_view(&json)
}

/// Save the view, logging a warning if storage is unavailable or full.
pub fn save_view(view: &PersistedView) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };

    match serde_json::to_string(view) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("Failed to save view to localStorage: {:?}", e);
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize view: {}", e);
        }
    }
}

fn decode_view(json: &str) -> Option<PersistedView> {
    match serde_json::from_str::<PersistedView>(json) {
        Ok(view) => {
            if view.version == PersistedView::CURRENT_VERSION {
                Some(view)
            } else {
                log::warn!(
                    "Ignoring stored view with version {} (current: {})",
                    view.version,
                    PersistedView::CURRENT_VERSION
                );
                None
            }
        }
        Err(e) => {
            log::warn!("Failed to parse stored view: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_roundtrip() {
        let view = PersistedView::new(Transform::new(2.4, -130.5, 48.0));
        let json = serde_json::to_string(&view).unwrap();
        let restored = decode_view(&json).unwrap();
        assert_eq!(restored.transform, view.transform);
    }

    #[test]
    fn decode_rejects_unknown_version() {
        let json = r#"{"transform":{"scale":1.0,"translate_x":0.0,"translate_y":0.0},"version":99}"#;
        assert!(decode_view(json).is_none());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_view("not json").is_none());
        assert!(decode_view("{}").is_none());
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_then_load_roundtrip() {
        let view = PersistedView::new(Transform::new(1.4, 20.0, -8.5));
        save_view(&view);

        let loaded = load_view().expect("view should have been persisted");
        assert_eq!(loaded.transform, view.transform);
    }

    #[wasm_bindgen_test]
    fn load_with_nothing_stored_is_none() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.remove_item(STORAGE_KEY).unwrap();
        assert!(load_view().is_none());
    }
}
