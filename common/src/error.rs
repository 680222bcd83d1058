//! Domain failures surfaced by catalog operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("You must be signed in to do that")]
    NotSignedIn,

    #[error("Species {0} does not exist")]
    SpeciesNotFound(i64),

    #[error("Only the author of a species can delete it")]
    NotAuthor,

    #[error("No profile found for user {0}")]
    ProfileNotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Unknown kingdom: {0}")]
    UnknownKingdom(String),
}
