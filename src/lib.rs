//! DDNS-CF: Dynamic DNS updater for a single Cloudflare A record.
//!
//! A library for looking up one A record, fetching the caller's public
//! IPv4 address from an echo service, writing it to the record and
//! reporting failures through Pushover.

pub mod config;
pub mod dns;
pub mod http;
pub mod ip;
pub mod notify;
pub mod workflow;
