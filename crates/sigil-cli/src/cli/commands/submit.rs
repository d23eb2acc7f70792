//! `sigil submit` - collect and deliver to an endpoint.

use std::time::Duration;

use anyhow::Result;

use super::Context;
use crate::cli::args::SubmitArgs;
use sigil::SubmitClient;

pub async fn execute(ctx: &Context, args: SubmitArgs) -> Result<()> {
    let record = ctx.collector().collect().await;

    let client = SubmitClient::builder(&args.endpoint)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    let receipt = client.submit(&record).await?;

    match (receipt.fingerprint_id, receipt.raw_body) {
        (Some(id), _) => println!("submitted: fingerprint_id={id}"),
        (None, Some(body)) => println!("submitted: non-JSON acknowledgement: {body}"),
        (None, None) => println!(
            "submitted: status={}",
            receipt.status.as_deref().unwrap_or("unknown")
        ),
    }

    Ok(())
}
