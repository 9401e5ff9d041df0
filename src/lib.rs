pub mod error;
pub mod config;
pub mod credentials;
pub mod prompts;
pub mod providers;
pub mod request;
pub mod transform;
pub mod session;

/*

prompt-refine rewrites a user's prompt so the answering LLM is
pushed towards sourced, verifiable answers. Two modes:

  local   wrap the text in a fixed prefix/suffix, no network
  remote  ask a chat-completion provider (DeepSeek) to restructure
          the text as Role/Audience/Behavior/Purpose/Output/Concern,
          optionally followed by the operating instructions block

prompt-refine/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # CLI front end
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Gateway/refiner configuration
│   ├── credentials.rs  # Ordered credential sources
│   ├── prompts.rs      # Fixed prompt texts
│   ├── request.rs      # Chat-completion wire types
│   ├── transform.rs    # Mode dispatch
│   ├── session.rs      # Display state for a front end
│   └── providers/
│       ├── mod.rs      # Gateway trait
│       └── deepseek.rs # HTTP adapter
└── tests/

*/

pub use error::Error;
pub use config::{GatewayConfig, RefinerConfig};
pub use providers::{DeepSeekClient, Gateway};
pub use session::{RequestState, Session};
pub use transform::{Mode, TransformRequest, TransformResult, Transformer};

/// Build a transformer backed by the DeepSeek gateway
pub fn transformer_from_config(
  config: &RefinerConfig
) -> Result<Transformer<DeepSeekClient>, Error>
{   let client = DeepSeekClient::new(config.gateway.clone())?;
    Ok(Transformer::new(client)
      .with_operating_instructions(
        config.append_operating_instructions
      ))
}
