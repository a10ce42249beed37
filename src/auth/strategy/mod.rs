//! Authentication strategies, one per [`AuthMethod`].

mod anthropic;
mod bedrock;
mod cli;
mod env;
mod traits;
mod vertex;

pub use anthropic::{AnthropicStrategy, MIN_ANTHROPIC_API_KEY_LEN};
pub use bedrock::BedrockStrategy;
pub use cli::ClaudeCliStrategy;
pub use traits::AuthStrategy;
pub use vertex::VertexStrategy;

use super::AuthMethod;

/// Strategy implementing `method`.
pub fn strategy_for(method: AuthMethod) -> &'static dyn AuthStrategy {
    match method {
        AuthMethod::ClaudeCli => &ClaudeCliStrategy,
        AuthMethod::Anthropic => &AnthropicStrategy,
        AuthMethod::Bedrock => &BedrockStrategy,
        AuthMethod::Vertex => &VertexStrategy,
    }
}
