//! Environment-backed configuration.
//!
//! ```rust
//! use claude_gateway_auth::config::{EnvSnapshot, vars};
//!
//! let env = EnvSnapshot::new().with(vars::CLAUDE_CODE_USE_BEDROCK, "1");
//! assert!(env.is_flag_set(vars::CLAUDE_CODE_USE_BEDROCK));
//! ```

pub mod env;

pub use env::{EnvSnapshot, vars};
