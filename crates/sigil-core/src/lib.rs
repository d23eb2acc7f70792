//! Core types for the sigil fingerprint pipeline.
//!
//! This crate provides the foundational types used across the sigil library:
//!
//! - **Types**: Strongly-typed signal categories, one per probed surface
//! - **Record**: The canonical 20-category [`FingerprintRecord`] and its
//!   assembler
//! - **Errors**: Error handling with [`SigilError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sigil_core::{FingerprintRecord, Result};
//!
//! fn inspect(record: &FingerprintRecord) -> Result<()> {
//!     println!("canvas digest: {:?}", record.canvas.canvas_hash);
//!     println!("{}", record.to_json()?);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/sigil-core/0.4.0")]

mod error;
mod record;
pub mod types;

pub use error::{Result, SigilError};
pub use record::{FingerprintRecord, RecordParts, CATEGORY_KEYS};
pub use types::*;
