use std::fmt;

/// Error type for prompt refinement
/// Implements Clone so results can be stored in session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No usable API credential in any configured source
    Configuration(String)
  , /// Provider answered with a non-2xx status
    ProviderStatus
    {   status: u16
      , status_text: String
      , body: String
    }
  , /// Provider answered 2xx but without usable content
    InvalidResponse(String)
  , /// Network-level failure reported by the HTTP client
    Transport(String)
  , /// Config file or HTTP client setup failed
    InvalidConfiguration(String)
}

impl Error
{   /// Failures the caller treats uniformly as "the provider failed"
    pub fn is_provider_failure(&self) -> bool
    {   matches!(
          self,
          Error::ProviderStatus { .. }
            | Error::InvalidResponse(_)
            | Error::Transport(_)
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Configuration(msg) => {
              write!(f, "{}", msg)
            }
          , Error::ProviderStatus { status, status_text, body } => {
              write!(f,
                "DeepSeek API 请求失败: {} {} - {}",
                status, status_text, body
              )
            }
          , Error::InvalidResponse(detail) => {
              if detail.is_empty()
              {   write!(f, "DeepSeek API 返回了无效的响应")
              } else
              {   write!(f,
                    "DeepSeek API 返回了无效的响应: {}",
                    detail
                  )
              }
            }
          , Error::Transport(msg) => {
              write!(f, "DeepSeek API 网络请求失败: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
