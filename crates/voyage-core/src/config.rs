//! Back office configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use voyage_crm::DEFAULT_COMMENT_AUTHOR;

use crate::error::CoreError;
use crate::Result;

pub const DATA_DIR_VAR: &str = "VOYAGE_DATA_DIR";
pub const PUBLIC_URL_VAR: &str = "VOYAGE_PUBLIC_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Root of the public trip pages. Without it trip links are relative.
    pub public_base_url: Option<Url>,
    /// Author stamped on CRM comments until a setting overrides it
    pub comment_author: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("voyage.db"),
            public_base_url: None,
            comment_author: DEFAULT_COMMENT_AUTHOR.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Voyage"))
            .unwrap_or_else(|| PathBuf::from(".voyage"))
    }

    /// Defaults with `VOYAGE_DATA_DIR` and `VOYAGE_PUBLIC_URL` applied
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = var(DATA_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::data_dir);

        let mut config = Self::new(data_dir);
        if let Some(raw) = var(PUBLIC_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config = config.with_public_base_url(raw.trim())?;
        }
        Ok(config)
    }

    pub fn with_public_base_url(mut self, raw: &str) -> Result<Self> {
        let mut url = Url::parse(raw)
            .map_err(|e| CoreError::Config(format!("invalid public URL '{}': {}", raw, e)))?;
        if url.cannot_be_a_base() {
            return Err(CoreError::Config(format!("'{}' cannot be a base URL", raw)));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.public_base_url = Some(url);
        Ok(self)
    }

    /// Link to a published trip's public page
    pub fn trip_url(&self, trip_id: &str) -> String {
        let path = format!("trip/{}", trip_id);
        match &self.public_base_url {
            Some(base) => base
                .join(&path)
                .map(String::from)
                .unwrap_or_else(|_| format!("/{}", path)),
            None => format!("/{}", path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_new_config() {
        let config = Config::new(PathBuf::from("/tmp/voyage"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/voyage/voyage.db"));
        assert_eq!(config.comment_author, "Current User");
        assert!(config.public_base_url.is_none());
        assert_eq!(config.trip_url("abc"), "/trip/abc");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_vars(vars(&[
            (DATA_DIR_VAR, "/srv/voyage"),
            (PUBLIC_URL_VAR, "https://trips.example.com/site"),
        ]))
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/voyage/voyage.db"));
        assert_eq!(
            config.trip_url("abc"),
            "https://trips.example.com/site/trip/abc"
        );
    }

    #[test]
    fn test_blank_vars_fall_back_to_defaults() {
        let config = Config::from_vars(vars(&[(DATA_DIR_VAR, " "), (PUBLIC_URL_VAR, "")])).unwrap();
        assert_eq!(config.database_path, Config::default().database_path);
        assert!(config.public_base_url.is_none());
    }

    #[test]
    fn test_invalid_public_url() {
        let err = Config::from_vars(vars(&[(PUBLIC_URL_VAR, "not a url")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let err = Config::new(PathBuf::from("/tmp"))
            .with_public_base_url("mailto:ops@example.com")
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
