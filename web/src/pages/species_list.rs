//! Species list page – every species in the catalog, newest first.
//! Signed-in users only; everyone else is sent back to `/`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::add_species_dialog::AddSpeciesDialog;
use crate::components::species_card::SpeciesCard;
use crate::model::{Species, SpeciesListing};

// ─── Server function ─────────────────────────────────────────────────────────

/// `None` when the request carries no valid session.
#[server(GetSpeciesListing, "/api")]
pub async fn get_species_listing() -> Result<Option<SpeciesListing>, ServerFnError> {
    use crate::server::{catalog, session};
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;

    let user = session::current_user(&state);
    if user.is_none() {
        tracing::debug!("No session, redirecting to /");
    }
    Ok(catalog::species_listing(&state.db_path, user))
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn SpeciesListPage() -> impl IntoView {
    let listing = Resource::new(|| (), |_| get_species_listing());

    view! {
        <div class="species-list-page">
            <Suspense fallback=move || view! { <p class="loading">"Loading species…"</p> }>
                {move || listing.get().map(|res| match res {
                    Ok(Some(listing)) => view! { <SpeciesList listing=listing/> }.into_any(),
                    Ok(None) => view! { <Redirect path="/"/> }.into_any(),
                    Err(e) => view! {
                        <p class="error">"Error: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// Header, add button and one card per species, in listing order.
#[component]
fn SpeciesList(listing: SpeciesListing) -> impl IntoView {
    let SpeciesListing { current_user, species } = listing;

    view! {
        <div class="species-list-header">
            <h2>"Species List"</h2>
            <AddSpeciesDialog/>
        </div>
        <hr class="separator"/>
        <div class="species-grid">
            <For
                each=move || species.clone()
                key=|sp| sp.id
                children=move |sp: Species| {
                    view! { <SpeciesCard species=sp current_user=current_user.clone()/> }
                }
            />
        </div>
    }
}
