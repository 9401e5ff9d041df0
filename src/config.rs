//! Configuration for the gateway and the transformer

use std::path::Path;
use serde::{Deserialize, Serialize};
use log::debug;

/// Default OpenAI-compatible endpoint base
pub const DEFAULT_API_BASE: &str = "https://api.deepseek.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "deepseek-chat";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_MAX_TOKENS: usize = 2000;

/// Remote gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig
{   /// API base URL, without the `/chat/completions` suffix
    pub api_base: String
  , /// Model identifier sent with every request
    pub model: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Optional completion token cap
    pub max_tokens: Option<usize>
  , /// Request timeout in seconds; transport default when unset
    pub timeout_secs: Option<u64>
  , /// Credential sources, in precedence order
    pub credential_sources: Vec<crate::credentials::CredentialSource>
}

impl Default for GatewayConfig
{   fn default() -> Self
    {   GatewayConfig
        {   api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , temperature: DEFAULT_TEMPERATURE
          , max_tokens: Some(DEFAULT_MAX_TOKENS)
          , timeout_secs: None
          , credential_sources: crate::credentials::default_sources()
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinerConfig
{   pub gateway: GatewayConfig
  , /// Append the operating instructions block to remote results
    pub append_operating_instructions: bool
  , /// Enable detailed logging
    pub verbose: Option<bool>
}

impl Default for RefinerConfig
{   fn default() -> Self
    {   RefinerConfig
        {   gateway: GatewayConfig::default()
          , append_operating_instructions: true
          , verbose: None
        }
    }
}

impl RefinerConfig
{   /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("{}: {}", path.display(), e)
            )
          })?;
        serde_json::from_str(&text).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path.display(), e)
          )
        })
    }
}
