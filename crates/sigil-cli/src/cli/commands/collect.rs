//! `sigil collect` - run one collection pass.

use anyhow::{Context as _, Result};
use tracing::info;

use super::Context;
use crate::cli::args::CollectArgs;

pub async fn execute(ctx: &Context, args: CollectArgs) -> Result<()> {
    let record = ctx.collector().collect().await;

    let json = if args.pretty {
        record.to_json_pretty()?
    } else {
        record.to_json()?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("writing record to {}", path.display()))?;
            info!(path = %path.display(), "record written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
