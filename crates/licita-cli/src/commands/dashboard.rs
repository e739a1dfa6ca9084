use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::{ADMIN_ROLES, require_session};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AdminDashboardResponse {
    total_companies: i64,
    total_documents: i64,
    total_users: i64,
    recent_companies: Vec<String>,
}

#[derive(Serialize)]
struct ClientDashboardResponse {
    company: String,
    total_docs: i64,
    docs_valid: i64,
    docs_expired: i64,
    recent_docs: Vec<String>,
}

/// Handle `licita dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    if args.admin {
        require_session(ctx, Some(ADMIN_ROLES), "/admin").await?;

        let stats = ctx.api.admin_stats().await?;
        return output(
            &AdminDashboardResponse {
                total_companies: stats.total_companies,
                total_documents: stats.total_documents,
                total_users: stats.total_users,
                recent_companies: stats
                    .recent_companies
                    .iter()
                    .map(|c| c.legal_name.clone())
                    .collect(),
            },
            flags.format,
        );
    }

    require_session(ctx, None, "/dashboard").await?;

    let company = ctx.scope_company(args.company.as_deref());
    let stats = ctx.api.client_stats(company.as_deref()).await?;
    output(
        &ClientDashboardResponse {
            company: stats.company_name,
            total_docs: stats.total_docs,
            docs_valid: stats.docs_valid,
            docs_expired: stats.docs_expired,
            recent_docs: stats
                .recent_docs
                .iter()
                .map(|doc| doc.display_term().to_string())
                .collect(),
        },
        flags.format,
    )
}
