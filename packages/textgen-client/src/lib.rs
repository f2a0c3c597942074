//! Client for a locally hosted text-generation server
//!
//! Speaks the KoboldCpp `/api/v1/generate` dialect: a prompt plus a fixed
//! sampling configuration goes in, generated text comes out.
//!
//! [`TextGenClient::generate`] never fails. Transport, status and parse
//! errors are logged and collapse to an empty string, so callers can treat
//! the output as ordinary text. Use [`TextGenClient::try_generate`] when the
//! error itself matters.
//!
//! # Example
//!
//! ```no_run
//! use songbridge_shared_config::TextGenConfig;
//! use songbridge_textgen_client::TextGenClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TextGenClient::new(&TextGenConfig::default())?;
//! let text = client.generate("<|user|>Hello<|assistant|>", None).await;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::TextGenClient;
pub use error::{TextGenError, TextGenResult};
pub use models::{GenerateRequest, GenerateResponse, SamplingParams};
