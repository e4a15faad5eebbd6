use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::SolveError;

const DEFAULT_API_HOST: &str = "https://api.solvebio.com";
const ENV_API_HOST: &str = "SOLVEBIO_API_HOST";
const ENV_API_KEY: &str = "SOLVEBIO_API_KEY";

/// Connection settings for the SolveBio API.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: String,
    pub api_key: String,
}

impl Config {
    pub fn new(api_host: &str, api_key: &str) -> Self {
        Config {
            api_host: api_host.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Discover settings from `SOLVEBIO_API_HOST` / `SOLVEBIO_API_KEY`,
    /// falling back to the `~/.solvebio/credentials` file (`key = value`
    /// lines). The host defaults to the public API; a missing key is an
    /// error.
    pub fn discover() -> Result<Config, SolveError> {
        let file = read_credentials_file().unwrap_or_default();

        let api_host = env::var(ENV_API_HOST)
            .ok()
            .or_else(|| file.get("api_host").cloned())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        let api_key = env::var(ENV_API_KEY)
            .ok()
            .or_else(|| file.get("api_key").cloned())
            .ok_or(SolveError::MissingCredentials)?;

        Ok(Config { api_host, api_key })
    }
}

fn read_credentials_file() -> Option<HashMap<String, String>> {
    let mut path: PathBuf = dirs::home_dir()?;
    path.push(".solvebio");
    path.push("credentials");
    let contents = fs::read_to_string(path).ok()?;
    Some(parse_credentials(&contents))
}

fn parse_credentials(contents: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    entries
}
