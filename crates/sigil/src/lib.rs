//! Multi-signal client fingerprinting with deterministic artifact hashing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sigil::{Collector, NativeHost, SubmitClient};
//!
//! #[tokio::main]
//! async fn main() -> sigil::Result<()> {
//!     // Collect against the local host binding
//!     let collector = Collector::new(Arc::new(NativeHost::new()));
//!     let record = collector.collect().await;
//!
//!     println!("canvas digest: {:?}", record.canvas.canvas_hash);
//!
//!     // Hand the record to the transport
//!     let client = SubmitClient::new("https://collector.example/fingerprint/")?;
//!     let receipt = client.submit(&record).await?;
//!     println!("stored as: {:?}", receipt.fingerprint_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/sigil/0.4.0")]

// Re-export core types
pub use sigil_core::*;

// Re-export the collection pipeline
pub use sigil_collect::{Collector, Host, HostError, NativeHost, StaticHost};
pub use sigil_collect as collect;

// Re-export the transport
pub use sigil_transport::{SubmitClient, SubmitClientBuilder, SubmitReceipt};
pub use sigil_transport as transport;

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
