use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::company::CompanyShowArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CompanyShowArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/company").await?;

    let id = ctx
        .scope_company(args.id.as_deref())
        .context("no company selected — pass an id or run `licita company switch`")?;

    let company = ctx.api.company(&id).await?;
    output(&company, flags.format)
}
