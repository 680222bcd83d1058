//! Species card: image, names, description preview, author and an
//! owner-only delete button.

use catalog_common::card::{self, AfterDelete, CardState, DELETE_CONFIRMATION};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::browser;
use super::server_message;
use super::species_details_dialog::SpeciesDetailsDialog;
use crate::model::Species;

// ─── Server functions ────────────────────────────────────────────────────────

#[server(GetAuthorDisplayName, "/api")]
pub async fn get_author_display_name(author: String) -> Result<String, ServerFnError> {
    use crate::server::catalog;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    catalog::author_display_name(&state.db_path, &author)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(DeleteSpecies, "/api")]
pub async fn delete_species(id: i64) -> Result<(), ServerFnError> {
    use crate::server::{catalog, session};
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let user = session::current_user(&state);
    catalog::delete_species(&state.db_path, user.as_deref(), id)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

// ─── Component ───────────────────────────────────────────────────────────────

/// A card for one species, as seen by `current_user`.
#[component]
pub fn SpeciesCard(
    #[prop(into)] species: Signal<Species>,
    #[prop(into)] current_user: String,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let author_name = RwSignal::new(String::new());
    let current_user = StoredValue::new(current_user);

    // Look the author up on mount and again whenever the author changes.
    // Late answers for a key that is no longer current, or for a card that
    // has been torn down, are dropped.
    let author_key = Memo::new(move |_| species.with(|s| s.author.clone()));
    Effect::new(move |_| {
        let requested = author_key.get();
        if !card::should_fetch_author(&requested) {
            return;
        }
        spawn_local(async move {
            match get_author_display_name(requested.clone()).await {
                Ok(name) => {
                    let current = author_key.try_get_untracked();
                    if card::accept_author_result(current.as_deref(), &requested) {
                        author_name.try_set(name);
                    }
                }
                Err(e) => leptos::logging::error!("Error fetching author details: {e}"),
            }
        });
    });

    let delete = ServerAction::<DeleteSpecies>::new();
    Effect::new(move |_| {
        let Some(result) = delete.value().get() else {
            return;
        };
        match card::after_delete(&result.map_err(|e| server_message(&e))) {
            AfterDelete::Reload => browser::reload(),
            AfterDelete::Alert(message) => browser::alert(&message),
        }
    });

    let state = move || CardState {
        hovered: hovered.get(),
        author_name: author_name.get(),
    };
    let show_delete = move || {
        let hovered = state().hovered;
        species.with(|sp| current_user.with_value(|user| card::delete_button_visible(sp, user, hovered)))
    };
    let on_delete = move |_| {
        if browser::confirm(DELETE_CONFIRMATION) {
            delete.dispatch(DeleteSpecies {
                id: species.with_untracked(|s| s.id),
            });
        }
    };

    view! {
        <div
            class="species-card"
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <Show when=show_delete>
                <button class="delete-button" aria-label="Delete Species" on:click=on_delete>
                    "✕"
                </button>
            </Show>
            {move || species.with(|sp| {
                let alt = sp.scientific_name.clone();
                sp.image.clone().map(|src| view! {
                    <div class="species-img-wrap">
                        <img src=src alt=alt class="species-img" loading="lazy"/>
                    </div>
                })
            })}
            <h3 class="species-sci">{move || species.with(|s| s.scientific_name.clone())}</h3>
            <h4 class="species-common">
                {move || species.with(|s| s.common_name.clone().unwrap_or_default())}
            </h4>
            <p class="species-description">
                {move || species.with(|s| card::description_preview(s.description.as_deref()))}
            </p>
            <SpeciesDetailsDialog species=species/>
            {move || state().author_line().map(|line| view! {
                <p class="species-author">{line}</p>
            })}
        </div>
    }
}
