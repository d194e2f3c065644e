//! # bankapi-core
//!
//! Core types and utilities for the banking platform API client.
//!
//! This crate provides error handling, client configuration and the query
//! string encoder shared by every listing and search endpoint.
//!
//! ## Modules
//!
//! - [`error`] - Error types and stable error codes
//! - [`config`] - Client configuration and request URL assembly
//! - [`query`] - Optional query parameter encoding and the `filter_params!` macro
//! - [`enums`] - The `wire_enum!` macro for string-valued API enumerations

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod enums;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
pub use query::{encode_query, QueryParams, QueryString, QueryValue};
