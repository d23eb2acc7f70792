//! HTTP delivery for fingerprint records.
//!
//! This crate provides the [`SubmitClient`] that POSTs a serialized
//! [`FingerprintRecord`](sigil_core::FingerprintRecord) to a submission
//! endpoint, and the server-side [`http_header`] helper that fills the
//! transport-level category from request headers.
//!
//! Delivery failure never alters an already-produced record; it surfaces
//! only through the returned error.

#![doc(html_root_url = "https://docs.rs/sigil-transport/0.4.0")]

mod client;
pub mod http_header;

pub use client::{SubmitClient, SubmitClientBuilder, SubmitReceipt};
pub use sigil_core::{Result, SigilError};
