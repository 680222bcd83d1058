//! Top navigation bar component.

use leptos::prelude::*;

/// Site-wide navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <a href="/" class="nav-logo">"Species Catalog"</a>
            </div>
            <div class="nav-links">
                <a href="/" class="nav-link">"Home"</a>
                <a href="/species" class="nav-link">"Species"</a>
            </div>
        </nav>
    }
}
