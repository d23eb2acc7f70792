//! # sigil-cli
//!
//! Command-line interface for the sigil fingerprint pipeline.
//!
//! ## Commands
//!
//! - **collect**: run one collection pass against the local host binding
//!   and print (or write) the record as JSON
//! - **submit**: collect and POST the record to a submission endpoint

pub mod cli;

pub use cli::run;
