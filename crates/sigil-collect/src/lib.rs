//! # sigil-collect
//!
//! The signal-collection and canonicalization pipeline.
//!
//! Probes a host environment's capability surface, renders deterministic
//! artifacts, digests them, and assembles one canonical
//! [`FingerprintRecord`](sigil_core::FingerprintRecord).
//!
//! ## Data Flow
//!
//! ```text
//! Host (capability provider, injected)
//!   |
//!   |-- probes::*        one driver per signal category; every failure
//!   |                    degrades to the category's documented default
//!   |-- render::canvas   fixed 2D text scene -> PNG bytes -> SHA-256
//!   |-- render::webgl    fixed clear -> RGBA readback    -> SHA-256
//!   |-- render::audio    fixed oscillator+compressor -> |sample| sum
//!   |
//! Collector::collect()   concurrent fan-out, join, then
//!   -> RecordParts::assemble() -> FingerprintRecord
//! ```
//!
//! Two host bindings ship: [`NativeHost`] (local machine + software
//! renderers) and [`StaticHost`] (configurable, for tests and replay).

#![doc(html_root_url = "https://docs.rs/sigil-collect/0.4.0")]

mod collector;
pub mod digest;
pub mod host;
pub mod probe;
pub mod probes;
pub mod render;
pub mod ua;

pub use collector::Collector;
pub use host::{Host, HostError, HostResult, NativeHost, StaticHost};
