//! API credential lookup over an ordered list of named sources

use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use log::debug;

/// Value that means "not configured yet"
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Client-visible variable, checked first
pub const CLIENT_VISIBLE_KEY_VAR: &str
  = "NEXT_PUBLIC_DEEPSEEK_API_KEY";

/// Server-only variable, checked second
pub const SERVER_ONLY_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Where a credential source is meant to be visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility
{   ClientVisible
  , ServerOnly
}

impl Visibility
{   fn label(&self) -> &'static str
    {   match self
        {   Visibility::ClientVisible => "客户端可见配置"
          , Visibility::ServerOnly => "仅服务端配置"
        }
    }
}

/// One named place an API key may come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSource
{   pub name: String
  , pub visibility: Visibility
}

impl CredentialSource
{   pub fn new(name: &str, visibility: Visibility) -> Self
    {   CredentialSource
        {   name: name.to_string()
          , visibility
        }
    }
}

/// Default precedence: client-visible first, then server-only
pub fn default_sources() -> Vec<CredentialSource>
{   vec![
      CredentialSource::new(
        CLIENT_VISIBLE_KEY_VAR,
        Visibility::ClientVisible
      )
    , CredentialSource::new(
        SERVER_ONLY_KEY_VAR,
        Visibility::ServerOnly
      )
    ]
}

/// A resolved API key. Never printed in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey
{   pub fn expose(&self) -> &str
    {   &self.0
    }
}

impl fmt::Debug for ApiKey
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("ApiKey([REDACTED])")
    }
}

/// Lookup from source name to raw value
pub type Lookup
  = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Lookup backed by the process environment
pub fn env_lookup() -> Lookup
{   Arc::new(|name: &str| std::env::var(name).ok())
}

fn is_usable(value: &str) -> bool
{   let value = value.trim();
    !value.is_empty() && value != PLACEHOLDER_API_KEY
}

/// Walk `sources` in order and return the first usable value
pub fn resolve(
  sources: &[CredentialSource]
, lookup: &Lookup
) -> Result<ApiKey, crate::error::Error>
{   for source in sources
    {   match lookup(&source.name)
        {   Some(value) if is_usable(&value) => {
              debug!("Using API key from {}", source.name);
              return Ok(ApiKey(value.trim().to_string()));
            }
          , Some(_) => {
              debug!(
                "Skipping {}: blank or placeholder",
                source.name
              );
            }
          , None => {
              debug!("Skipping {}: not set", source.name);
            }
        }
    }

    debug!("No usable API key in {} sources", sources.len());
    Err(crate::error::Error::Configuration(
      missing_key_message(sources)
    ))
}

fn missing_key_message(sources: &[CredentialSource]) -> String
{   let mut message = String::from("DeepSeek API 密钥未配置。请检查：");
    for (i, source) in sources.iter().enumerate()
    {   message.push_str(&format!(
          "\n{}. {}中是否设置了 {}",
          i + 1,
          source.visibility.label(),
          source.name
        ));
    }
    message
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> Lookup
    {   let map: HashMap<String, String> = pairs
          .iter()
          .map(|(k, v)| (k.to_string(), v.to_string()))
          .collect();
        Arc::new(move |name: &str| map.get(name).cloned())
    }

    #[test]
    fn client_visible_source_wins()
    {   let lookup = lookup_from(&[
          (CLIENT_VISIBLE_KEY_VAR, "client-key")
        , (SERVER_ONLY_KEY_VAR, "server-key")
        ]);
        let key = resolve(&default_sources(), &lookup).unwrap();
        assert_eq!(key.expose(), "client-key");
    }

    #[test]
    fn placeholder_falls_through_to_server_only()
    {   let lookup = lookup_from(&[
          (CLIENT_VISIBLE_KEY_VAR, PLACEHOLDER_API_KEY)
        , (SERVER_ONLY_KEY_VAR, "server-key")
        ]);
        let key = resolve(&default_sources(), &lookup).unwrap();
        assert_eq!(key.expose(), "server-key");
    }

    #[test]
    fn blank_value_is_unset()
    {   let lookup = lookup_from(&[
          (CLIENT_VISIBLE_KEY_VAR, "   ")
        , (SERVER_ONLY_KEY_VAR, "server-key")
        ]);
        let key = resolve(&default_sources(), &lookup).unwrap();
        assert_eq!(key.expose(), "server-key");
    }

    #[test]
    fn missing_everywhere_names_both_sources()
    {   let lookup = lookup_from(&[
          (SERVER_ONLY_KEY_VAR, PLACEHOLDER_API_KEY)
        ]);
        let err = resolve(&default_sources(), &lookup).unwrap_err();
        match err
        {   crate::error::Error::Configuration(msg) => {
              assert!(msg.contains(CLIENT_VISIBLE_KEY_VAR));
              assert!(msg.contains(SERVER_ONLY_KEY_VAR));
            }
          , other => panic!("unexpected error: {:?}", other)
        }
    }

    #[test]
    fn debug_output_hides_key()
    {   let key = ApiKey("sk-secret".to_string());
        assert!(!format!("{:?}", key).contains("sk-secret"));
    }
}
