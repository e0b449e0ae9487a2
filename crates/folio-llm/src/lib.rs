//! Answer generation for retrieved document chunks.
//!
//! The provider is a black box with a catchable-failure contract: any
//! error, and the answer engine falls back to a deterministic extractive
//! summary of the top chunk. A missing provider takes the same path, so
//! the tool works without any API credentials.

pub mod answer;
pub mod compatible;
pub mod error;
pub mod fallback;
mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;

pub use answer::{Answer, AnswerEngine};
pub use error::LlmError;
pub use provider::LlmProvider;
