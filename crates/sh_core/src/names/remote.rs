//! Remote name provider.
//!
//! Fetches candidate names from a randomuser-style JSON endpoint. The
//! request is strictly time-bounded; any failure is reported as a
//! [`NameSourceError`] and recovered upstream by the directory's fallback.

use serde::Deserialize;

use crate::config::NameServiceConfig;
use crate::error::NameSourceError;

use super::NameSource;

#[derive(Debug, Deserialize)]
struct NamePayload {
    results: Vec<NameEntry>,
}

#[derive(Debug, Deserialize)]
struct NameEntry {
    name: PersonName,
}

#[derive(Debug, Deserialize)]
struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    fn full(&self) -> String {
        format!("{} {}", self.first.trim(), self.last.trim())
            .trim()
            .to_string()
    }
}

pub struct RemoteNameProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl RemoteNameProvider {
    pub fn new(config: &NameServiceConfig) -> Result<Self, NameSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| NameSourceError::Transport(e.to_string()))?;
        Ok(RemoteNameProvider {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Provider configured from defaults plus the `SH_NAME_API_URL`
    /// override.
    pub fn from_env() -> Result<Self, NameSourceError> {
        RemoteNameProvider::new(&NameServiceConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl NameSource for RemoteNameProvider {
    fn fetch_names(&self, count: usize) -> Result<Vec<String>, NameSourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("results", count.to_string()), ("inc", "name".to_string())])
            .send()
            .map_err(|e| NameSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NameSourceError::Transport(format!(
                "name service answered {status}"
            )));
        }

        let payload: NamePayload = response
            .json()
            .map_err(|e| NameSourceError::Malformed(e.to_string()))?;

        let names: Vec<String> = payload
            .results
            .iter()
            .map(|entry| entry.name.full())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(NameSourceError::Empty);
        }
        Ok(names)
    }
}
