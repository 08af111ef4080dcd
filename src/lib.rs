//! # bidkit
//!
//! An LLM completion gateway for freelance bid automation. Three operations
//! — proposal generation, project estimation, and reply suggestion — each
//! render a prompt from user-supplied text, issue one call to an
//! OpenAI-compatible chat-completion endpoint, and return the model's text.
//!
//! The crate is the orchestration core of a small HTTP service: the hosting
//! framework (routing, CORS, the server loop) stays outside and mounts the
//! thin adapters in [`api`]. There is no caching, no retrying, and no
//! streaming — one inbound request means exactly one outbound call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bidkit::{CompletionGateway, GatewayConfig};
//! use bidkit::api::{self, ProposalRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // BIDKIT_API_KEY is required; endpoint and model have defaults.
//!     let config = GatewayConfig::from_env()?;
//!     let gateway = CompletionGateway::from_config(&config)?;
//!
//!     let response = api::propose(
//!         &gateway,
//!         ProposalRequest {
//!             job_description: "Build a logo for a coffee shop".to_string(),
//!             tone: None,
//!             skills: None,
//!         },
//!     )
//!     .await?;
//!     println!("{}", response.proposal_text);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prompt;
pub mod provider;
pub mod task;

pub use config::GatewayConfig;
pub use error::{ConfigError, GatewayError};
pub use gateway::{Completion, CompletionGateway};
pub use provider::{ChatCompletionClient, CompletionTransport};
pub use task::{CompletionRequest, TaskKind};
