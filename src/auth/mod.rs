//! Authentication for the gateway.
//!
//! Two concerns live here:
//! - **Outbound**: which of the four credential strategies the SDK uses
//!   (Claude Code CLI, Anthropic API key, AWS Bedrock, Google Vertex AI),
//!   whether its inputs are present, and what to forward to the SDK process.
//! - **Inbound**: the optional gating key that protects the gateway's own
//!   HTTP surface.

mod bundle;
mod inbound;
mod method;
mod resolver;
mod status;
pub mod strategy;

pub use bundle::EnvVarBundle;
pub use inbound::{bearer_token, constant_time_eq};
pub use method::AuthMethod;
pub use resolver::{AuthResolver, env_vars, validate};
pub use status::{AuthInfo, AuthStatus};
pub use strategy::{AuthStrategy, MIN_ANTHROPIC_API_KEY_LEN};
