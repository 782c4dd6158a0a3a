//! Transport layer shared by every remote collaborator.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod request_tests;

pub use client::{DEFAULT_TIMEOUT, ReqwestClient};
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};
