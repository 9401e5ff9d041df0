//! Per-session display state for a front end

use log::{debug, info};

use crate::providers::Gateway;
use crate::transform::{Mode, TransformRequest, Transformer};

/// Lifecycle of the latest request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState
{   #[default]
    Idle
  , Pending
  , Succeeded
  , Failed
}

/// Input, latest result and latest error of one user session.
/// Each completed request overwrites the display state.
#[derive(Debug, Clone, Default)]
pub struct Session
{   input: String
  , state: RequestState
  , output: Option<String>
  , error: Option<String>
}

impl Session
{   pub fn new() -> Self
    {   Session::default()
    }

    pub fn set_input(&mut self, text: &str)
    {   self.input = text.to_string();
    }

    pub fn input(&self) -> &str
    {   &self.input
    }

    pub fn state(&self) -> RequestState
    {   self.state
    }

    pub fn output(&self) -> Option<&str>
    {   self.output.as_deref()
    }

    pub fn error(&self) -> Option<&str>
    {   self.error.as_deref()
    }

    /// True while a request is in flight; front ends disable submit
    pub fn is_busy(&self) -> bool
    {   self.state == RequestState::Pending
    }

    /// Run one request with the current input.
    /// Returns false without touching state when the input is blank.
    pub async fn submit<G: Gateway>(
      &mut self
    , transformer: &Transformer<G>
    , mode: Mode
    ) -> bool
    {   let request = match TransformRequest::new(&self.input, mode)
        {   Some(request) => request
          , None => {
              debug!("Blank input, nothing to submit");
              return false;
            }
        };

        self.state = RequestState::Pending;
        match transformer.transform(&request).await
        {   Ok(text) => {
              info!("Refined prompt ({} bytes)", text.len());
              self.output = Some(text);
              self.error = None;
              self.input.clear();
              self.state = RequestState::Succeeded;
            }
          , Err(e) => {
              info!("Refinement failed: {}", e);
              self.error = Some(e.to_string());
              self.state = RequestState::Failed;
            }
        }
        true
    }

    /// Drop the displayed result
    pub fn clear_output(&mut self)
    {   self.output = None;
    }

    /// Drop the displayed error
    pub fn dismiss_error(&mut self)
    {   self.error = None;
    }
}
