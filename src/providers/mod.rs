//! Chat-completion provider implementations

use std::future::Future;

pub mod deepseek;

// Re-export for convenience
pub use deepseek::DeepSeekClient;

/// Text-in/text-out chat completion
pub trait Gateway
{   /// Send one system + user exchange and return the reply text
    fn complete(
      &self
    , system_prompt: &str
    , user_text: &str
    ) -> impl Future<Output = Result<String, crate::error::Error>> + Send;
}
