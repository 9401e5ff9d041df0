//! Chat-completion wire types

use serde::{Deserialize, Serialize};

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: &str) -> Self
    {   ChatMessage { role: Role::System, content: content.to_string() }
    }

    pub fn user(content: &str) -> Self
    {   ChatMessage { role: Role::User, content: content.to_string() }
    }
}

/// Request body sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , /// Always false; streaming is not supported
    pub stream: bool
}

/// Response body received from the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ChoiceMessage>
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage
{   #[serde(default)]
    pub content: Option<String>
}

impl ChatCompletionResponse
{   /// `choices[0].message.content`, if present and non-empty
    pub fn first_content(&self) -> Option<&str>
    {   self.choices
          .first()
          .and_then(|c| c.message.as_ref())
          .and_then(|m| m.content.as_deref())
          .filter(|content| !content.is_empty())
    }
}
