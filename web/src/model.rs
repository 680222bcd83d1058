//! Data-transfer objects used by both server and client.

use serde::{Deserialize, Serialize};

pub use catalog_common::Species;

/// Everything the species list page needs from one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesListing {
    /// Profile id of the signed-in viewer.
    pub current_user: String,
    /// Newest first.
    pub species: Vec<Species>,
}
