use crate::cli::GlobalFlags;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(flags: &GlobalFlags, ctx: &mut AppContext) -> anyhow::Result<()> {
    require_session(ctx, None, "/profile").await?;

    let profile = ctx.api.me().await?;
    output(&profile, flags.format)
}
