//! Types and rules shared by the catalog server and the hydrated client.

pub mod card;
pub mod config;
pub mod error;
pub mod profile;
pub mod session;
pub mod species;

pub use error::CatalogError;
pub use species::{Kingdom, NewSpecies, Species};
