use std::path::Path;

use anyhow::Context;
use licita_api::documents::UploadRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::document::DocumentUploadArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

#[derive(Serialize)]
struct UploadResponse {
    uploaded: bool,
    id: String,
    filename: String,
    status: String,
    structured: bool,
}

pub async fn handle(
    args: &DocumentUploadArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/documents/upload").await?;

    let company_id = ctx
        .scope_company(args.company.as_deref())
        .context("no company selected — pass --company or run `licita company switch`")?;

    let path = Path::new(&args.path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("upload path has no file name")?
        .to_string();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let bar = progress::spinner(&format!("Uploading {file_name}…"));
    let result = ctx
        .api
        .upload(UploadRequest {
            file_name,
            bytes,
            target_company_id: company_id,
            title: args.title.clone(),
            type_id: args.type_id.clone(),
            authentication_code: args.auth_code.clone(),
            expiration_date: args.expires.clone(),
        })
        .await;
    progress::finish(bar, "Upload finished");
    let document = result?;

    output(
        &UploadResponse {
            uploaded: true,
            id: document.id,
            filename: document.filename,
            status: document.status,
            structured: document.is_structured,
        },
        flags.format,
    )
}
