use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::company::CompanyScopeArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CompanyScopeArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/company/team").await?;

    let company_id = ctx
        .scope_company(args.company.as_deref())
        .context("no company selected — pass --company or run `licita company switch`")?;

    let members = ctx.api.team(&company_id).await?;
    output(&members, flags.format)
}
