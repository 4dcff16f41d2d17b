//! # Post Model
//!
//! The wire model for a single blog post record.
//! This crate contains a pure value type with zero infrastructure dependencies.

pub mod domain;
pub mod error;

pub use domain::Post;
pub use error::DecodeError;
