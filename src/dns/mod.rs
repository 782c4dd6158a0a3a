//! DNS provider layer.
//!
//! This module provides:
//! - Record and API envelope types ([`DnsRecord`], [`ApiEnvelope`])
//! - The provider abstraction used by the workflow ([`DnsProvider`])
//! - A Cloudflare API v4 implementation ([`CloudflareClient`])

mod client;
mod error;
mod record;


pub use client::{CloudflareClient, DnsProvider};
pub use error::DnsError;
pub use record::{A_RECORD, ApiEnvelope, DnsRecord, RecordUpdate, ResultInfo};
