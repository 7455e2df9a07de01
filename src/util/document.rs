//! Document-level locale attributes.
//!
//! Applies `lang` and `dir` to the `<html>` element so Arabic renders
//! right-to-left. Requires a browser; SSR paths no-op and the shell renders
//! the default locale's attributes instead.

use crate::i18n::Locale;

/// Set `<html lang dir>` for `locale`.
pub fn apply_locale(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", locale.code());
            let _ = el.set_attribute("dir", locale.dir());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Whether the tab is currently visible. Always true outside the browser.
pub fn is_visible() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .is_none_or(|d| d.visibility_state() == web_sys::VisibilityState::Visible)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// A `visibilitychange` listener on the document, removed when dropped.
#[cfg(feature = "hydrate")]
pub struct VisibilityListener {
    document: web_sys::Document,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl VisibilityListener {
    /// Call `on_change` on every `visibilitychange`. `None` without a document.
    pub fn install(on_change: impl Fn() + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window().and_then(|w| w.document())?;
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| on_change()) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(e) = document.add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref()) {
            log::warn!("visibilitychange listener not installed: {e:?}");
            return None;
        }
        Some(Self { document, callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for VisibilityListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .document
            .remove_event_listener_with_callback("visibilitychange", self.callback.as_ref().unchecked_ref());
    }
}
