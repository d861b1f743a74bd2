use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Configuration stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Records per page for `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// File name of the contacts store
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the notes store
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        file_name("contacts-file", &config.contacts_file).map_err(BookError::Store)?;
        file_name("notes-file", &config.notes_file).map_err(BookError::Store)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "contacts-file" => Some(self.contacts_file.clone()),
            "notes-file" => Some(self.notes_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("page-size must be a number, got {}", value))?;
                if size == 0 {
                    return Err("page-size must be at least 1".to_string());
                }
                self.page_size = size;
            }
            "contacts-file" => self.contacts_file = file_name(key, value)?,
            "notes-file" => self.notes_file = file_name(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

/// Store files live directly in the data directory, so a name may not
/// contain a path separator or point at a parent.
fn file_name(key: &str, value: &str) -> std::result::Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", key));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(format!("{} must be a plain file name, got {}", key, value));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.contacts_file, "addressbook.json");
        assert_eq!(config.notes_file, "notes.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BookConfig::load(dir.path()).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = BookConfig::default();
        config.set("page-size", "10").unwrap();
        config.save(&nested).unwrap();

        let loaded = BookConfig::load(&nested).unwrap();
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let loaded = BookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.contacts_file, "addressbook.json");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = BookConfig::default();
        assert!(config.set("page-size", "zero").is_err());
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("notes-file", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_set_rejects_paths_outside_the_data_dir() {
        let mut config = BookConfig::default();
        for bad in ["../contacts.json", "/tmp/contacts.json", "sub/notes.json", "..\\x", ".."] {
            assert!(config.set("contacts-file", bad).is_err(), "accepted {bad:?}");
            assert!(config.set("notes-file", bad).is_err(), "accepted {bad:?}");
        }
        config.set("contacts-file", "friends.json").unwrap();
        assert_eq!(config.contacts_file, "friends.json");
    }

    #[test]
    fn test_load_rejects_hand_edited_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"contacts_file": "../escape.json"}"#,
        )
        .unwrap();

        assert!(matches!(
            BookConfig::load(dir.path()),
            Err(BookError::Store(_))
        ));
    }

    #[test]
    fn test_get_by_key() {
        let config = BookConfig::default();
        assert_eq!(config.get("page-size").as_deref(), Some("5"));
        assert_eq!(config.get("unknown"), None);
    }
}
