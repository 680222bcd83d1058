//! Catalog operations behind the server functions.
//!
//! These take the signed-in user explicitly so they can be exercised without
//! a request; the server functions resolve the user from the session cookie.

use std::path::Path;

use catalog_common::{CatalogError, NewSpecies};

use super::db;
use super::error::StoreError;
use crate::model::SpeciesListing;

/// Species list for the signed-in user.
///
/// Without a user nothing is queried and `None` is returned; the page turns
/// that into a redirect.  A failed query yields an empty list.
pub fn species_listing(db_path: &Path, current_user: Option<String>) -> Option<SpeciesListing> {
    let current_user = current_user?;
    let species = db::list_species(db_path).unwrap_or_else(|e| {
        tracing::warn!("Cannot load species: {e}");
        Vec::new()
    });
    Some(SpeciesListing { current_user, species })
}

pub fn author_display_name(db_path: &Path, author: &str) -> Result<String, StoreError> {
    db::display_name(db_path, author).inspect_err(|e| {
        tracing::warn!("Cannot resolve author {author}: {e}");
    })
}

/// Delete a species on behalf of `current_user`, who must be its author.
///
/// Ownership is part of the `DELETE` itself; when nothing was removed the row
/// is looked up only to pick the error.
pub fn delete_species(db_path: &Path, current_user: Option<&str>, id: i64) -> Result<(), StoreError> {
    let user = current_user.ok_or(CatalogError::NotSignedIn)?;
    if db::delete_owned_species(db_path, id, user)? == 0 {
        let err = match db::species_by_id(db_path, id)? {
            Some(species) if !species.is_owned_by(user) => CatalogError::NotAuthor,
            _ => CatalogError::SpeciesNotFound(id),
        };
        return Err(err.into());
    }

    tracing::info!(species_id = id, author = user, "Deleted species");
    Ok(())
}

/// Store a new species authored by `current_user`; returns its id.
pub fn add_species(
    db_path: &Path,
    current_user: Option<&str>,
    species: &NewSpecies,
) -> Result<i64, StoreError> {
    let user = current_user.ok_or(CatalogError::NotSignedIn)?;
    let id = db::insert_species(db_path, user, species)?;
    tracing::info!(species_id = id, author = user, "Added species {}", species.scientific_name);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_common::profile::Profile;
    use catalog_common::Kingdom;
    use std::path::PathBuf;

    fn seeded() -> (tempfile::TempDir, PathBuf, i64) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        db::ensure_catalog_schema(&path).unwrap();
        for (id, name) in [("u1", "Ada"), ("u2", "Grace")] {
            db::insert_profile(
                &path,
                &Profile {
                    id: id.into(),
                    email: format!("{id}@example.org"),
                    display_name: name.into(),
                    biography: None,
                },
            )
            .unwrap();
        }
        let id = add_species(&path, Some("u1"), &oak()).unwrap();
        (dir, path, id)
    }

    fn oak() -> NewSpecies {
        NewSpecies::from_form("Quercus robur", "English oak", "Plantae", "", "", "A tree.").unwrap()
    }

    #[test]
    fn test_listing_without_user_skips_the_query() {
        // No schema at all: any query against this path would fail.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created.db");
        assert!(species_listing(&path, None).is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_listing_failure_renders_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created.db");
        let listing = species_listing(&path, Some("u1".into())).unwrap();
        assert_eq!(listing.current_user, "u1");
        assert!(listing.species.is_empty());
    }

    #[test]
    fn test_listing_is_newest_first() {
        let (_dir, path, first) = seeded();
        let second = add_species(&path, Some("u2"), &oak()).unwrap();

        let listing = species_listing(&path, Some("u2".into())).unwrap();
        let ids: Vec<i64> = listing.species.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn test_author_display_name() {
        let (_dir, path, _) = seeded();
        assert_eq!(author_display_name(&path, "u1").unwrap(), "Ada");
        assert!(author_display_name(&path, "nobody").is_err());
    }

    #[test]
    fn test_delete_requires_author() {
        let (_dir, path, id) = seeded();

        let err = delete_species(&path, None, id).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::NotSignedIn)));

        let err = delete_species(&path, Some("u2"), id).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::NotAuthor)));
        assert!(db::species_by_id(&path, id).unwrap().is_some());

        delete_species(&path, Some("u1"), id).unwrap();
        assert!(db::species_by_id(&path, id).unwrap().is_none());

        let err = delete_species(&path, Some("u1"), id).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::SpeciesNotFound(_))));
    }

    #[test]
    fn test_delete_already_removed_species_is_an_error() {
        let (_dir, path, id) = seeded();
        // removed by another writer between page load and click
        db::delete_owned_species(&path, id, "u1").unwrap();

        let err = delete_species(&path, Some("u1"), id).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::SpeciesNotFound(n)) if n == id));
        let err = delete_species(&path, Some("u2"), id).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::SpeciesNotFound(_))));
    }

    #[test]
    fn test_add_species() {
        let (_dir, path, id) = seeded();
        let stored = db::species_by_id(&path, id).unwrap().unwrap();
        assert_eq!(stored.author, "u1");
        assert_eq!(stored.kingdom, Kingdom::Plantae);

        let err = add_species(&path, None, &oak()).unwrap_err();
        assert!(matches!(err, StoreError::Catalog(CatalogError::NotSignedIn)));
    }
}
