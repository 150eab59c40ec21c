//! Prompt templating for the name generator.

#![warn(missing_docs, clippy::pedantic)]

pub mod template;

pub use template::PromptTemplate;
