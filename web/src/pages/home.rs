//! Home page – where signed-out visitors land.

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Species Catalog"</h1>
            <p>
                "A shared catalog of species, written by its members. "
                "Sign in to browse the list and add your own entries."
            </p>
            <a href="/species" class="button">"Browse species"</a>
        </div>
    }
}
