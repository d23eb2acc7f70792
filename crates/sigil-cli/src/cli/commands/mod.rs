//! Command implementations.

pub mod collect;
pub mod submit;

use std::sync::Arc;

use sigil::{Collector, NativeHost};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Create a collector over the local host binding.
    #[must_use]
    pub fn collector(&self) -> Collector {
        Collector::new(Arc::new(NativeHost::new()))
    }
}
