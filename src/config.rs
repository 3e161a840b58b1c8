use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The deployed generation service.
pub const DEPLOYED_API_URL: &str = "https://x-viral-tweet-api-172353178391.us-central1.run.app";

/// Where a local development backend listens.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Optional `config.toml`, e.g.:
///
/// ```toml
/// api_url = "http://localhost:8000"
///
/// [defaults]
/// tweets_to_analyze = 20
/// min_likes = 1000
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_url: Option<String>,
    #[serde(default)]
    pub defaults: FormDefaults,
}

/// Initial values for the submission form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_tweets_to_analyze")]
    pub tweets_to_analyze: u32,
    #[serde(default = "default_tweets_to_rewrite")]
    pub tweets_to_rewrite: u32,
    #[serde(default = "default_min_likes")]
    pub min_likes: u32,
    #[serde(default = "default_min_retweets")]
    pub min_retweets: u32,
    #[serde(default)]
    pub generate_images: bool,
}

fn default_tweets_to_analyze() -> u32 {
    10
}

fn default_tweets_to_rewrite() -> u32 {
    5
}

fn default_min_likes() -> u32 {
    500
}

fn default_min_retweets() -> u32 {
    50
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            tweets_to_analyze: default_tweets_to_analyze(),
            tweets_to_rewrite: default_tweets_to_rewrite(),
            min_likes: default_min_likes(),
            min_retweets: default_min_retweets(),
            generate_images: false,
        }
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load the default config file if one exists, otherwise defaults.
    pub fn load_default() -> Result<Self> {
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("buzztui").join("config.toml"))
}

/// Resolve the base URL once at startup: explicit flag, then `--local`,
/// then the config file, then the deployed endpoint.
pub fn resolve_api_url(cli_url: Option<&str>, local: bool, file: &FileConfig) -> String {
    if let Some(url) = cli_url {
        return url.to_string();
    }
    if local {
        return LOCAL_API_URL.to_string();
    }
    if let Some(url) = &file.api_url {
        return url.clone();
    }
    DEPLOYED_API_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_precedence() {
        let file = FileConfig {
            api_url: Some("http://from-file".to_string()),
            defaults: FormDefaults::default(),
        };
        assert_eq!(
            resolve_api_url(Some("http://flag"), true, &file),
            "http://flag"
        );
        assert_eq!(resolve_api_url(None, true, &file), LOCAL_API_URL);
        assert_eq!(resolve_api_url(None, false, &file), "http://from-file");
        assert_eq!(
            resolve_api_url(None, false, &FileConfig::default()),
            DEPLOYED_API_URL
        );
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "api_url = \"http://localhost:9000\"").unwrap();
        writeln!(tmp).unwrap();
        writeln!(tmp, "[defaults]").unwrap();
        writeln!(tmp, "min_likes = 1000").unwrap();

        let config = FileConfig::load(tmp.path()).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.defaults.min_likes, 1000);
        assert_eq!(config.defaults.tweets_to_analyze, 10);
        assert!(!config.defaults.generate_images);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "api_url = [not toml").unwrap();
        assert!(FileConfig::load(tmp.path()).is_err());
    }
}
