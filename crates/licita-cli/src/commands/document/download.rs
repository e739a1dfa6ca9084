use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::document::DocumentDownloadArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DownloadResponse {
    saved_to: String,
    bytes: usize,
}

pub async fn handle(
    args: &DocumentDownloadArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/documents").await?;

    let bytes = ctx.api.download(&args.id).await?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| format!("{}.pdf", args.id));
    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("failed to write {out}"))?;

    output(
        &DownloadResponse {
            saved_to: out,
            bytes: bytes.len(),
        },
        flags.format,
    )
}
