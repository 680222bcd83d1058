//! Configuration parsing – reads a `KEY=VALUE` file such as
//! `/etc/catalog/catalog.conf`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Server configuration for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database holding profiles, sessions and species.
    pub db_path: PathBuf,
    /// Name of the cookie carrying the session token.
    pub session_cookie: String,
    /// Insert a demo profile, session and species into an empty catalog.
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from("data/catalog.db"),
            session_cookie: "catalog_session".into(),
            seed_demo_data: false,
        }
    }
}

impl Config {
    pub fn default_path() -> &'static str {
        "/etc/catalog/catalog.conf"
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_map(&parse_conf(&text));
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        info!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let defaults = Config::default();
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };

    Config {
        db_path: get("DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
        session_cookie: get("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
        seed_demo_data: get("SEED_DEMO_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.seed_demo_data),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            map.insert(key.trim().to_string(), val.trim().trim_matches('"').to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
DB_PATH="/var/lib/catalog/catalog.db"
SESSION_COOKIE=sb_session
SEED_DEMO_DATA=true
UNKNOWN=ignored
"#;
        let config = from_map(&parse_conf(text));
        assert_eq!(
            config,
            Config {
                db_path: PathBuf::from("/var/lib/catalog/catalog.db"),
                session_cookie: "sb_session".into(),
                seed_demo_data: true,
            }
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = from_map(&parse_conf("DB_PATH=\nSESSION_COOKIE=\"\"\n"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.conf");
        std::fs::write(&path, "SEED_DEMO_DATA=1\n").unwrap();

        let config = load(&path).unwrap();
        assert!(config.seed_demo_data);
        assert_eq!(config.session_cookie, "catalog_session");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.conf");
        assert!(load(&path).is_err());
        assert_eq!(load_or_default(&path).unwrap(), Config::default());
    }
}
