//! Retrieval adapter: locate a host's security.txt over HTTP(S) and decode it.
//!
//! This crate is allowed to do network IO. Everything it finds wrong with the
//! way the file is served becomes a diagnostic; only an unusable target or an
//! HTTP client that cannot be built is a Rust error.

#![forbid(unsafe_code)]

mod client;
mod decode;
mod retrieve;

pub use client::{HttpClient, HttpResponse, ReqwestClient, TransportError, USER_AGENT};
pub use decode::decode_body;
pub use retrieve::{FetchError, Retrieved, candidate_urls, host_of, retrieve};

/// The path RFC 9116 requires.
pub const WELL_KNOWN_PATH: &str = ".well-known/security.txt";

/// Pre-RFC top-level path, still probed.
pub const LEGACY_PATH: &str = "security.txt";
