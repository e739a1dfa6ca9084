use licita_core::vault::{VaultRules, group_documents};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::document::DocumentListArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct VaultRow {
    category: String,
    current: usize,
    expired: usize,
    documents: Vec<String>,
}

pub async fn handle(
    args: &DocumentListArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/documents/vault").await?;

    let company = ctx.scope_company(args.company.as_deref());
    let documents = ctx.api.documents(company.as_deref()).await?;

    let rules = VaultRules::licitation_defaults();
    let rows: Vec<VaultRow> = group_documents(documents, &rules)
        .into_iter()
        .map(|section| VaultRow {
            category: section.category,
            current: section.current.len(),
            expired: section.expired.len(),
            documents: section
                .current
                .iter()
                .map(|doc| doc.display_term().to_string())
                .collect(),
        })
        .collect();

    output(&rows, flags.format)
}
