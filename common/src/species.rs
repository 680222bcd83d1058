//! Species records as stored in the `species` table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ─── Kingdom ─────────────────────────────────────────────────────────────────

/// Taxonomic kingdom of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Kingdom {
    #[default]
    Animalia,
    Plantae,
    Fungi,
    Protista,
    Archaea,
    Bacteria,
}

impl Kingdom {
    pub const ALL: [Kingdom; 6] = [
        Kingdom::Animalia,
        Kingdom::Plantae,
        Kingdom::Fungi,
        Kingdom::Protista,
        Kingdom::Archaea,
        Kingdom::Bacteria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kingdom::Animalia => "Animalia",
            Kingdom::Plantae => "Plantae",
            Kingdom::Fungi => "Fungi",
            Kingdom::Protista => "Protista",
            Kingdom::Archaea => "Archaea",
            Kingdom::Bacteria => "Bacteria",
        }
    }
}

impl fmt::Display for Kingdom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kingdom {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kingdom::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownKingdom(s.to_string()))
    }
}

// ─── Species ─────────────────────────────────────────────────────────────────

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub kingdom: Kingdom,
    pub total_population: Option<i64>,
    /// Profile id of the user who created the record.
    pub author: String,
}

impl Species {
    /// Ownership check used both for showing the delete button and for
    /// authorising the delete itself.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.author == user_id
    }
}

// ─── New species (add dialog) ────────────────────────────────────────────────

/// A validated species submission, before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpecies {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub kingdom: Kingdom,
    pub total_population: Option<i64>,
}

impl NewSpecies {
    /// Validate raw form fields. Blank optional fields become `None`.
    pub fn from_form(
        scientific_name: &str,
        common_name: &str,
        kingdom: &str,
        total_population: &str,
        image: &str,
        description: &str,
    ) -> Result<Self, CatalogError> {
        let scientific_name = scientific_name.trim();
        if scientific_name.is_empty() {
            return Err(CatalogError::MissingField("scientific_name"));
        }

        let total_population = match non_blank(total_population) {
            None => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n >= 0 => Some(n),
                _ => {
                    return Err(CatalogError::InvalidField {
                        field: "total_population",
                        value: raw,
                    })
                }
            },
        };

        Ok(NewSpecies {
            scientific_name: scientific_name.to_string(),
            common_name: non_blank(common_name),
            description: non_blank(description),
            image: non_blank(image),
            kingdom: kingdom.parse()?,
            total_population,
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kingdom_parse_is_case_insensitive() {
        assert_eq!("plantae".parse::<Kingdom>().unwrap(), Kingdom::Plantae);
        assert_eq!(" Fungi ".parse::<Kingdom>().unwrap(), Kingdom::Fungi);
        assert!(matches!(
            "Minerals".parse::<Kingdom>(),
            Err(CatalogError::UnknownKingdom(_))
        ));
    }

    #[test]
    fn test_is_owned_by() {
        let sp = Species {
            id: 1,
            scientific_name: "Panthera leo".into(),
            common_name: Some("Lion".into()),
            description: None,
            image: None,
            kingdom: Kingdom::Animalia,
            total_population: None,
            author: "u1".into(),
        };
        assert!(sp.is_owned_by("u1"));
        assert!(!sp.is_owned_by("u2"));
        assert!(!sp.is_owned_by(""));
    }

    #[test]
    fn test_new_species_blank_optionals_become_none() {
        let sp = NewSpecies::from_form("  Quercus robur ", "", "Plantae", " ", "", "").unwrap();
        assert_eq!(
            sp,
            NewSpecies {
                scientific_name: "Quercus robur".into(),
                common_name: None,
                description: None,
                image: None,
                kingdom: Kingdom::Plantae,
                total_population: None,
            }
        );
    }

    #[test]
    fn test_new_species_requires_scientific_name() {
        let err = NewSpecies::from_form("  ", "Oak", "Plantae", "", "", "").unwrap_err();
        assert_eq!(err, CatalogError::MissingField("scientific_name"));
    }

    #[test]
    fn test_new_species_rejects_bad_population() {
        for raw in ["lots", "-3"] {
            let err = NewSpecies::from_form("Quercus robur", "", "Plantae", raw, "", "").unwrap_err();
            assert!(matches!(err, CatalogError::InvalidField { field: "total_population", .. }));
        }
        let sp = NewSpecies::from_form("Quercus robur", "", "Plantae", "1200", "", "").unwrap();
        assert_eq!(sp.total_population, Some(1200));
    }
}
