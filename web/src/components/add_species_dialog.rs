//! Dialog for adding a species authored by the signed-in user.

use catalog_common::Kingdom;
use leptos::form::ActionForm;
use leptos::prelude::*;

use super::browser;
use super::server_message;

#[server(AddSpecies, "/api")]
pub async fn add_species(
    scientific_name: String,
    common_name: String,
    kingdom: String,
    total_population: String,
    image: String,
    description: String,
) -> Result<i64, ServerFnError> {
    use crate::server::{catalog, session};
    use catalog_common::NewSpecies;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let species = NewSpecies::from_form(
        &scientific_name,
        &common_name,
        &kingdom,
        &total_population,
        &image,
        &description,
    )
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = session::current_user(&state);
    catalog::add_species(&state.db_path, user.as_deref(), &species)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// "Add Species" button and its form.  A successful submission reloads the
/// page so the new card shows up at the top of the list.
#[component]
pub fn AddSpeciesDialog() -> impl IntoView {
    let open = RwSignal::new(false);
    let add = ServerAction::<AddSpecies>::new();

    Effect::new(move |_| match add.value().get() {
        Some(Ok(_)) => browser::reload(),
        Some(Err(e)) => browser::alert(&format!("Error adding species: {}", server_message(&e))),
        None => {}
    });

    view! {
        <button class="add-button" on:click=move |_| open.set(true)>"Add Species"</button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog">
                    <h2 class="dialog-title">"Add Species"</h2>
                    <ActionForm action=add>
                        <label>
                            "Scientific name"
                            <input type="text" name="scientific_name" required=true/>
                        </label>
                        <label>
                            "Common name"
                            <input type="text" name="common_name"/>
                        </label>
                        <label>
                            "Kingdom"
                            <select name="kingdom">
                                {Kingdom::ALL
                                    .into_iter()
                                    .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Total population"
                            <input type="number" name="total_population" min="0"/>
                        </label>
                        <label>
                            "Image URL"
                            <input type="url" name="image"/>
                        </label>
                        <label>
                            "Description"
                            <textarea name="description"></textarea>
                        </label>
                        <div class="dialog-actions">
                            <button type="submit" disabled=move || add.pending().get()>
                                "Add Species"
                            </button>
                            <button type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                        </div>
                    </ActionForm>
                </div>
            </div>
        </Show>
    }
}
