//! sigil - collect and submit client fingerprints.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    sigil_cli::run().await
}
