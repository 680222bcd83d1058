//! Blocking browser dialogs and page reload.
//!
//! Only meaningful in the hydrated client; server builds log instead, since
//! event handlers never run during server rendering.

#[cfg(feature = "hydrate")]
pub fn confirm(message: &str) -> bool {
    leptos::prelude::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

#[cfg(feature = "hydrate")]
pub fn alert(message: &str) {
    if leptos::prelude::window().alert_with_message(message).is_err() {
        leptos::logging::error!("{message}");
    }
}

#[cfg(feature = "hydrate")]
pub fn reload() {
    if let Err(e) = leptos::prelude::window().location().reload() {
        leptos::logging::error!("Cannot reload page: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn confirm(_message: &str) -> bool {
    false
}

#[cfg(not(feature = "hydrate"))]
pub fn alert(message: &str) {
    leptos::logging::error!("{message}");
}

#[cfg(not(feature = "hydrate"))]
pub fn reload() {}
