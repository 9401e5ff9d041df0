//! Single entry point for both refinement modes

use serde::{Deserialize, Serialize};
use log::debug;

use crate::prompts;
use crate::providers::Gateway;

/// How the prompt is refined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode
{   /// Fixed prefix/suffix wrap, offline
    Local
  , /// Rewritten by the chat-completion provider
    Remote
}

/// Text to refine, already trimmed and known to be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest
{   text: String
  , mode: Mode
}

impl TransformRequest
{   /// `None` when `raw_text` is blank; there is nothing to refine
    pub fn new(raw_text: &str, mode: Mode) -> Option<Self>
    {   let text = raw_text.trim();
        if text.is_empty()
        {   return None;
        }
        Some(TransformRequest
        {   text: text.to_string()
          , mode
        })
    }

    pub fn text(&self) -> &str
    {   &self.text
    }

    pub fn mode(&self) -> Mode
    {   self.mode
    }
}

/// Optimized text, or the failure to show instead
pub type TransformResult = Result<String, crate::error::Error>;

/// Dispatches a request to the local wrap or the remote gateway
#[derive(Debug, Clone)]
pub struct Transformer<G>
{   gateway: G
  , append_operating_instructions: bool
}

impl<G: Gateway> Transformer<G>
{   pub fn new(gateway: G) -> Self
    {   Transformer
        {   gateway
          , append_operating_instructions: true
        }
    }

    /// Toggle appending the operating instructions to remote results
    pub fn with_operating_instructions(mut self, enabled: bool) -> Self
    {   self.append_operating_instructions = enabled;
        self
    }

    pub async fn transform(
      &self
    , request: &TransformRequest
    ) -> TransformResult
    {   debug!("Transforming with mode {:?}", request.mode);
        match request.mode
        {   Mode::Local => Ok(local(request.text()))
          , Mode::Remote => {
              let content = self.gateway
                .complete(
                  prompts::OPTIMIZER_SYSTEM_PROMPT,
                  request.text()
                )
                .await?;
              if self.append_operating_instructions
              {   Ok(prompts::with_operating_instructions(&content))
              } else
              {   Ok(content)
              }
            }
        }
    }
}

/// Local-mode refinement; pure and synchronous
pub fn local(trimmed: &str) -> String
{   prompts::wrap_local(trimmed)
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use crate::error::Error;

    /// Canned gateway that counts calls
    #[derive(Clone)]
    struct StubGateway
    {   calls: Arc<AtomicUsize>
      , reply: Result<String, Error>
    }

    impl StubGateway
    {   fn new(reply: Result<String, Error>) -> Self
        {   StubGateway
            {   calls: Arc::new(AtomicUsize::new(0))
              , reply
            }
        }
    }

    impl Gateway for StubGateway
    {   async fn complete(
          &self
        , system_prompt: &str
        , _user_text: &str
        ) -> Result<String, Error>
        {   assert_eq!(system_prompt, prompts::OPTIMIZER_SYSTEM_PROMPT);
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    #[test]
    fn blank_input_builds_no_request()
    {   assert!(TransformRequest::new("", Mode::Local).is_none());
        assert!(TransformRequest::new(" \n\t ", Mode::Remote).is_none());
    }

    #[test]
    fn request_text_is_trimmed()
    {   let request
          = TransformRequest::new("  你好  ", Mode::Local).unwrap();
        assert_eq!(request.text(), "你好");
    }

    #[tokio::test]
    async fn local_mode_never_calls_gateway()
    {   let gateway = StubGateway::new(Ok("unused".to_string()));
        let transformer = Transformer::new(gateway.clone());
        let request
          = TransformRequest::new(" 讲讲黑洞 ", Mode::Local).unwrap();

        let first = transformer.transform(&request).await.unwrap();
        let second = transformer.transform(&request).await.unwrap();

        assert_eq!(
          first,
          format!(
            "你是专家 讲讲黑洞，{}",
            prompts::LOCAL_SUFFIX
          )
        );
        assert_eq!(first, second);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remote_mode_appends_instructions()
    {   let gateway = StubGateway::new(Ok("X".to_string()));
        let transformer = Transformer::new(gateway.clone());
        let request
          = TransformRequest::new("question", Mode::Remote).unwrap();

        let out = transformer.transform(&request).await.unwrap();
        assert!(out.starts_with('X'));
        assert_eq!(
          out,
          format!("X\n\n{}", prompts::OPERATING_INSTRUCTIONS)
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remote_mode_without_instructions_is_verbatim()
    {   let transformer
          = Transformer::new(StubGateway::new(Ok("X".to_string())))
              .with_operating_instructions(false);
        let request
          = TransformRequest::new("question", Mode::Remote).unwrap();
        let out = tokio_test::block_on(transformer.transform(&request));
        assert_eq!(out.unwrap(), "X");
    }

    #[tokio::test]
    async fn remote_failure_passes_through_unchanged()
    {   let failure = Error::ProviderStatus
        {   status: 502
          , status_text: "Bad Gateway".to_string()
          , body: String::new()
        };
        let transformer
          = Transformer::new(StubGateway::new(Err(failure.clone())));
        let request
          = TransformRequest::new("question", Mode::Remote).unwrap();
        assert_eq!(
          transformer.transform(&request).await.unwrap_err(),
          failure
        );
    }
}
