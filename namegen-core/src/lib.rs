//! Business name generation pipeline.
//!
//! One click on the form runs [`NameRequestBuilder::generate`]: validate the
//! [`NameRequest`], render the prompt, make one upstream call, and keep the
//! comma-separated candidates that fit the word limit.

#![warn(missing_docs, clippy::pedantic)]

mod builder;
mod error;
mod filter;
mod outcome;
mod request;

pub use builder::{
    DEFAULT_MAX_OUTPUT_TOKENS, GenerationSettings, NameRequestBuilder, PROMPT_TEMPLATE,
};
pub use error::{GenerateError, UpstreamError, ValidationError};
pub use filter::{filter_names, word_count};
pub use outcome::GenerationOutcome;
pub use request::{MAX_WORDS, NameCount, NameRequest, RequiredField};
