//! "Learn More" dialog with everything known about a species.

use leptos::prelude::*;

use crate::model::Species;

#[component]
pub fn SpeciesDetailsDialog(#[prop(into)] species: Signal<Species>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <button class="details-button" on:click=move |_| open.set(true)>"Learn More"</button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div
                    class="dialog"
                    role="dialog"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    {move || species.with(|sp| {
                        let population = sp
                            .total_population
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "Unknown".into());
                        let description = sp
                            .description
                            .clone()
                            .unwrap_or_else(|| "No description provided.".into());
                        view! {
                            <h2 class="dialog-title">{sp.scientific_name.clone()}</h2>
                            <h3 class="species-common">{sp.common_name.clone().unwrap_or_default()}</h3>
                            <dl class="species-facts">
                                <dt>"Kingdom"</dt>
                                <dd>{sp.kingdom.to_string()}</dd>
                                <dt>"Total population"</dt>
                                <dd>{population}</dd>
                            </dl>
                            <p class="species-description full">{description}</p>
                        }
                    })}
                    <button class="close-button" on:click=move |_| open.set(false)>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
