//! Business name suggestions from a text-generation API.
//!
//! Depend on this crate to embed the generation pipeline without the web
//! front end. Supporting crates sit behind feature flags.
//!
//! ```
//! let names = namegen::filter_names(
//!     "Brew Haven, The Daily Grind Coffee House And Bakery",
//!     namegen::MAX_WORDS,
//! );
//! assert_eq!(names, ["Brew Haven"]);
//! ```

#![warn(missing_docs, clippy::pedantic)]

pub use namegen_core::*;

/// Upstream text-generation adapters (enabled by `adapters` feature).
#[cfg(feature = "adapters")]
pub use namegen_adapters as adapters;

/// Prompt templating (enabled by `prompts` feature).
#[cfg(feature = "prompts")]
pub use namegen_prompts as prompts;

/// Configuration loading (enabled by `config` feature).
#[cfg(feature = "config")]
pub use namegen_config as config;
