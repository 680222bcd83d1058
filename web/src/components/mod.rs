pub mod add_species_dialog;
pub mod browser;
pub mod nav;
pub mod species_card;
pub mod species_details_dialog;

use leptos::prelude::ServerFnError;

/// The message a server function failed with, without transport decoration.
pub(crate) fn server_message(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(msg) => msg.clone(),
        other => other.to_string(),
    }
}
