//! Wit.ai API interaction module
//!
//! This module provides a typed client for the Wit.ai HTTP API. Every call is
//! a single authenticated request: no caching, no retries, no background work.
//!
//! # Module Structure
//!
//! - [`client`] - Client configuration and the typed REST helpers
//! - [`http`] - HTTP transport and error classification
//! - [`error`] - Error type shared by every operation
//! - [`time`] - The API's timestamp format
//! - [`apps`], [`entities`], [`intents`], [`traits`], [`samples`],
//!   [`utterances`] - App management and training data
//! - [`message`], [`dictation`], [`language`], [`export`] - Runtime endpoints
//!
//! # Example
//!
//! ```no_run
//! use witai::{MessageRequest, WitClient};
//!
//! async fn example() -> witai::Result<()> {
//!     let client = WitClient::new("my-server-token")?;
//!     let understood = client.parse(&MessageRequest::new("wake me up at 7am")).await?;
//!     for intent in &understood.intents {
//!         println!("{} ({:.2})", intent.name, intent.confidence);
//!     }
//!     Ok(())
//! }
//! ```

pub mod apps;
pub mod client;
pub mod dictation;
pub mod entities;
pub mod error;
pub mod export;
pub mod http;
pub mod intents;
pub mod language;
pub mod message;
pub mod samples;
pub mod time;
pub mod traits;
pub mod utterances;
