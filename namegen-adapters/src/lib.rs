//! Text-generation adapters used by the name generator.
//!
//! Providers implement the [`traits::ModelAdapter`] trait so callers can swap
//! the upstream service (or a test double) without touching request logic.

#![warn(missing_docs, clippy::pedantic)]

pub mod openai;
pub mod traits;

mod http_client;
