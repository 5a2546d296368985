// Configuration type definitions

use serde::Deserialize;

use crate::suggest::DEFAULT_ENDPOINT;

/// How a submit behaves while another request is still loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Always dispatch; every outcome applies as it resolves
    #[default]
    LastResolved,
    /// Ignore submits until the outstanding request resolves
    BlockWhileLoading,
}

/// Recommendation endpoint section
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig { url: default_url() }
    }
}

/// UI behaviour section
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Milliseconds between revealed words; 0 shows text at once
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

fn default_reveal_delay_ms() -> u64 {
    50
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            reveal_delay_ms: default_reveal_delay_ms(),
            overlap: OverlapPolicy::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
