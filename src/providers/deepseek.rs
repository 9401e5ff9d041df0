use std::time::Duration;
use log::{debug, trace, error};

use crate::config::GatewayConfig;
use crate::credentials::{self, Lookup};
use crate::error::Error;
use crate::request::{
  ChatCompletionRequest, ChatCompletionResponse, ChatMessage
};

/// HTTP adapter for the DeepSeek chat-completion endpoint.
/// Every call is independent: no retries, no caching, no queueing.
#[derive(Clone)]
pub struct DeepSeekClient
{   config: GatewayConfig
  , lookup: Lookup
  , http_client: reqwest::Client
}

impl std::fmt::Debug for DeepSeekClient
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("DeepSeekClient")
          .field("api_base", &self.config.api_base)
          .field("model", &self.config.model)
          .finish()
    }
}

impl DeepSeekClient
{   /// Client reading credentials from the process environment
    pub fn new(config: GatewayConfig) -> Result<Self, Error>
    {   Self::with_lookup(config, credentials::env_lookup())
    }

    /// Client reading credentials through `lookup`
    pub fn with_lookup(
      config: GatewayConfig
    , lookup: Lookup
    ) -> Result<Self, Error>
    {   debug!("Creating DeepSeekClient for {}", config.api_base);
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(DeepSeekClient
        {   config
          , lookup
          , http_client
        })
    }

    fn endpoint(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.config.api_base.trim_end_matches('/')
        )
    }

    fn build_request(
      &self
    , system_prompt: &str
    , user_text: &str
    ) -> ChatCompletionRequest
    {   ChatCompletionRequest
        {   model: self.config.model.clone()
          , messages: vec![
              ChatMessage::system(system_prompt)
            , ChatMessage::user(user_text)
            ]
          , temperature: self.config.temperature
          , max_tokens: self.config.max_tokens
          , stream: false
        }
    }

    /// Resolve the key, POST once, and extract `choices[0].message.content`
    pub async fn complete(
      &self
    , system_prompt: &str
    , user_text: &str
    ) -> Result<String, Error>
    {   let api_key = credentials::resolve(
          &self.config.credential_sources,
          &self.lookup
        )?;

        let request = self.build_request(system_prompt, user_text);
        trace!(
          "DeepSeek request: model={} messages={}",
          request.model,
          request.messages.len()
        );

        let response = self.http_client
          .post(self.endpoint())
          .header("Authorization", format!("Bearer {}", api_key.expose()))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            debug!("HTTP error: {}", e);
            Error::Transport(e.to_string())
          })?;

        let status = response.status();
        trace!("DeepSeek response status: {}", status);

        if !status.is_success()
        {   let body = match response.text().await
            {   Ok(body) => body
              , Err(e) => {
                  debug!("Could not read error body: {}", e);
                  String::new()
                }
            };
            debug!("DeepSeek API error {}: {}", status, body);
            return Err(Error::ProviderStatus
            {   status: status.as_u16()
              , status_text: status
                  .canonical_reason()
                  .unwrap_or_default()
                  .to_string()
              , body
            });
        }

        let chat_response: ChatCompletionResponse
          = response.json().await.map_err(|e| {
            debug!("Parse error: {}", e);
            Error::InvalidResponse(e.to_string())
          })?;

        chat_response.first_content()
          .map(str::to_string)
          .ok_or_else(|| {
            debug!("No content in response");
            Error::InvalidResponse(String::new())
          })
    }
}

impl crate::providers::Gateway for DeepSeekClient
{   async fn complete(
      &self
    , system_prompt: &str
    , user_text: &str
    ) -> Result<String, Error>
    {   DeepSeekClient::complete(self, system_prompt, user_text).await
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::sync::Arc;

    #[test]
    fn request_uses_configured_shape()
    {   let client = DeepSeekClient::with_lookup(
          GatewayConfig::default(),
          Arc::new(|_: &str| None::<String>)
        ).unwrap();
        let request = client.build_request("sys", "user text");
        assert_eq!(request.model, "deepseek-chat");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, Some(2000));
        assert!(!request.stream);
        assert_eq!(request.messages[0], ChatMessage::system("sys"));
        assert_eq!(request.messages[1], ChatMessage::user("user text"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash()
    {   let config = GatewayConfig
        {   api_base: "http://localhost:1234/v1/".to_string()
          , ..GatewayConfig::default()
        };
        let client = DeepSeekClient::with_lookup(
          config,
          Arc::new(|_: &str| None::<String>)
        ).unwrap();
        assert_eq!(
          client.endpoint(),
          "http://localhost:1234/v1/chat/completions"
        );
    }
}
