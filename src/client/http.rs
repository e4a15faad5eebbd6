use std::collections::HashMap;

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::SolveError;

/// HTTP methods the API surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request parameters: sent as the query string for GET and as the JSON
/// body for POST.
pub type Params = HashMap<String, Value>;

/// The request function every API operation is written against.
///
/// Implemented by [`SolveClient`] for real HTTP and by fakes in tests.
/// Implementations block the calling thread until the response arrives or
/// the request fails; failures surface as-is, with no retries.
pub trait Transport {
    fn request(&self, method: Method, url: &str, params: &Params) -> Result<Value, SolveError>;
}

/// Blocking HTTP client for the SolveBio API.
pub struct SolveClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SolveClient {
    /// Create a client for the given API host and key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        SolveClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a client from discovered configuration.
    pub fn from_config(config: &Config) -> Self {
        SolveClient::new(&config.api_host, &config.api_key)
    }

    fn absolute_url(&self, url: &str) -> String {
        // pagination links come back absolute; collection URLs are relative
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }
}

impl Transport for SolveClient {
    fn request(&self, method: Method, url: &str, params: &Params) -> Result<Value, SolveError> {
        let url = self.absolute_url(url);
        debug!("{method:?} {url}");

        let request = match method {
            Method::Get => {
                let mut builder = self.client.get(&url);
                if !params.is_empty() {
                    builder = builder.query(&query_pairs(params));
                }
                builder
            }
            Method::Post => self.client.post(&url).json(params),
        };

        let resp = request
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Accept", "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SolveError::Api { status, body });
        }

        Ok(resp.json()?)
    }
}

/// Render params as query pairs; scalars keep their plain form, anything
/// structured is sent as its JSON text.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
