//! HTTP front end for the business name generator.
//!
//! Serves one HTML form and runs the generation pipeline when it is posted.
//! Layout lives in [`render`]; request decoding in [`form`]; routing and the
//! hyper server loop in [`server`].

#![warn(missing_docs, clippy::pedantic)]

pub mod form;
pub mod render;
pub mod server;
pub mod telemetry;

pub use server::{App, ServerError, handle, run};
