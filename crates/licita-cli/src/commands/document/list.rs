use licita_core::document::Document;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::document::DocumentListArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DocumentRow {
    id: String,
    title: String,
    status: String,
    expires: Option<String>,
    category: Option<String>,
    structured: bool,
    created_at: String,
}

impl From<Document> for DocumentRow {
    fn from(doc: Document) -> Self {
        let title = doc.display_term().to_string();
        Self {
            title,
            id: doc.id,
            status: doc.status,
            expires: doc.expiration_date,
            category: doc.category_name,
            structured: doc.is_structured,
            created_at: doc.created_at,
        }
    }
}

pub async fn handle(
    args: &DocumentListArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/documents").await?;

    let company = ctx.scope_company(args.company.as_deref());
    let limit = flags
        .limit
        .unwrap_or(ctx.config.general.default_limit) as usize;

    let mut rows: Vec<DocumentRow> = ctx
        .api
        .documents(company.as_deref())
        .await?
        .into_iter()
        .map(DocumentRow::from)
        .collect();
    rows.truncate(limit);

    output(&rows, flags.format)
}
