//! SQLite queries for the catalog.
//!
//! Every call opens its own short-lived connection; WAL mode is set once by
//! [`ensure_catalog_schema`] and persists in the file.

use std::path::Path;

use anyhow::Context;
use catalog_common::profile::Profile;
use catalog_common::session::Session;
use catalog_common::{CatalogError, Kingdom, NewSpecies, Species};
use chrono::{DateTime, Duration, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::error::StoreError;

const SPECIES_COLUMNS: &str =
    "id, scientific_name, common_name, description, image, kingdom, total_population, author";

/// Token of the session created by [`seed_demo`].
pub const DEMO_SESSION_TOKEN: &str = "demo-session";

fn open(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(db_path, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    conn.execute_batch("PRAGMA busy_timeout=3000;")?;
    Ok(conn)
}

fn open_rw(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(db_path, rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE)?;
    conn.execute_batch("PRAGMA busy_timeout=3000; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

// ─── Schema ──────────────────────────────────────────────────────────────────

/// Create the database file and its tables if they do not exist yet.
pub fn ensure_catalog_schema(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create DB dir {}", parent.display()))?;
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Cannot open catalog DB {}", db_path.display()))?;

    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
        CREATE TABLE IF NOT EXISTS profiles (
            id           TEXT PRIMARY KEY,
            email        TEXT NOT NULL,
            display_name TEXT NOT NULL,
            biography    TEXT
        );
        CREATE TABLE IF NOT EXISTS sessions (
            token      TEXT PRIMARY KEY,
            user_id    TEXT NOT NULL REFERENCES profiles (id) ON DELETE CASCADE,
            expires_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS species (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            scientific_name  TEXT NOT NULL,
            common_name      TEXT,
            description      TEXT,
            image            TEXT,
            kingdom          TEXT NOT NULL DEFAULT 'Animalia',
            total_population INTEGER,
            author           TEXT NOT NULL REFERENCES profiles (id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS species_author ON species (author);",
    )
    .context("Schema error")?;

    Ok(())
}

// ─── Species ─────────────────────────────────────────────────────────────────

fn species_from_row(row: &Row<'_>) -> rusqlite::Result<Species> {
    let kingdom: String = row.get(5)?;
    let kingdom = kingdom
        .parse::<Kingdom>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Species {
        id: row.get(0)?,
        scientific_name: row.get(1)?,
        common_name: row.get(2)?,
        description: row.get(3)?,
        image: row.get(4)?,
        kingdom,
        total_population: row.get(6)?,
        author: row.get(7)?,
    })
}

/// Every species, newest (highest id) first.
pub fn list_species(db_path: &Path) -> rusqlite::Result<Vec<Species>> {
    let conn = open(db_path)?;
    let mut stmt =
        conn.prepare(&format!("SELECT {SPECIES_COLUMNS} FROM species ORDER BY id DESC"))?;
    let rows = stmt.query_map([], species_from_row)?;
    rows.collect()
}

pub fn species_by_id(db_path: &Path, id: i64) -> rusqlite::Result<Option<Species>> {
    let conn = open(db_path)?;
    conn.query_row(
        &format!("SELECT {SPECIES_COLUMNS} FROM species WHERE id = ?1"),
        params![id],
        species_from_row,
    )
    .optional()
}

/// Insert a species authored by `author` and return its new id.
pub fn insert_species(db_path: &Path, author: &str, species: &NewSpecies) -> rusqlite::Result<i64> {
    let conn = open_rw(db_path)?;
    conn.execute(
        "INSERT INTO species \
         (scientific_name, common_name, description, image, kingdom, total_population, author) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            species.scientific_name,
            species.common_name,
            species.description,
            species.image,
            species.kingdom.as_str(),
            species.total_population,
            author,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete the species with `id` if `author` wrote it; returns the number of
/// rows removed.
pub fn delete_owned_species(db_path: &Path, id: i64, author: &str) -> rusqlite::Result<usize> {
    let conn = open_rw(db_path)?;
    conn.execute(
        "DELETE FROM species WHERE id = ?1 AND author = ?2",
        params![id, author],
    )
}

// ─── Profiles ────────────────────────────────────────────────────────────────

/// Display name of exactly one profile.
pub fn display_name(db_path: &Path, user_id: &str) -> Result<String, StoreError> {
    let conn = open(db_path)?;
    conn.query_row(
        "SELECT display_name FROM profiles WHERE id = ?1",
        params![user_id],
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| CatalogError::ProfileNotFound(user_id.to_string()).into())
}

pub fn insert_profile(db_path: &Path, profile: &Profile) -> rusqlite::Result<()> {
    let conn = open_rw(db_path)?;
    conn.execute(
        "INSERT INTO profiles (id, email, display_name, biography) VALUES (?1, ?2, ?3, ?4)",
        params![profile.id, profile.email, profile.display_name, profile.biography],
    )?;
    Ok(())
}

// ─── Sessions ────────────────────────────────────────────────────────────────

pub fn find_session(db_path: &Path, token: &str) -> rusqlite::Result<Option<Session>> {
    let conn = open(db_path)?;
    conn.query_row(
        "SELECT token, user_id, expires_at FROM sessions WHERE token = ?1",
        params![token],
        |row| {
            Ok(Session {
                token: row.get(0)?,
                user_id: row.get(1)?,
                expires_at: row.get::<_, DateTime<Utc>>(2)?,
            })
        },
    )
    .optional()
}

pub fn insert_session(db_path: &Path, session: &Session) -> rusqlite::Result<()> {
    let conn = open_rw(db_path)?;
    conn.execute(
        "INSERT OR REPLACE INTO sessions (token, user_id, expires_at) VALUES (?1, ?2, ?3)",
        params![session.token, session.user_id, session.expires_at],
    )?;
    Ok(())
}

// ─── Demo data ───────────────────────────────────────────────────────────────

/// Populate an empty catalog with a demo author, a session and two species.
///
/// Returns the demo session token, or `None` if the catalog already had rows.
pub fn seed_demo(db_path: &Path, now: DateTime<Utc>) -> Result<Option<String>, StoreError> {
    let count: i64 = open(db_path)?.query_row("SELECT COUNT(*) FROM species", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(None);
    }

    let author = Profile {
        id: "demo-user".into(),
        email: "demo@example.org".into(),
        display_name: "Demo Naturalist".into(),
        biography: None,
    };
    if display_name(db_path, &author.id).is_err() {
        insert_profile(db_path, &author)?;
    }

    insert_session(
        db_path,
        &Session {
            token: DEMO_SESSION_TOKEN.into(),
            user_id: author.id.clone(),
            expires_at: now + Duration::days(30),
        },
    )?;

    let samples = [
        NewSpecies {
            scientific_name: "Quercus robur".into(),
            common_name: Some("English oak".into()),
            description: Some(
                "A large deciduous tree native to most of Europe, living for many centuries \
                 and supporting more insect species than any other native tree."
                    .into(),
            ),
            image: None,
            kingdom: Kingdom::Plantae,
            total_population: None,
        },
        NewSpecies {
            scientific_name: "Ailuropoda melanoleuca".into(),
            common_name: Some("Giant panda".into()),
            description: Some("A bear native to south central China.".into()),
            image: None,
            kingdom: Kingdom::Animalia,
            total_population: Some(1864),
        },
    ];
    for sample in &samples {
        insert_species(db_path, &author.id, sample)?;
    }

    Ok(Some(DEMO_SESSION_TOKEN.to_string()))
}

// ─── tests ───────────────────────────────────────────────────────────────────
