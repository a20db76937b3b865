use wasm_bindgen::JsValue;

use crate::theme::{PreferenceStore, RootElement};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}

/// `localStorage`, absent when the browsing context has storage disabled.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        storage()
            .ok_or_else(|| anyhow::anyhow!("no local storage"))?
            .set_item(key, value)
            .map_err(|e: JsValue| anyhow::anyhow!("{e:#?}"))
    }
}

/// Class list of `document.body`.
pub struct BodyClasses;

impl RootElement for BodyClasses {
    fn add_class(&mut self, class: &str) {
        if let Some(body) = body() {
            let _ = body.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Some(body) = body() {
            let _ = body.class_list().remove_1(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        body().map(|b| b.class_list().contains(class)).unwrap_or(false)
    }
}
