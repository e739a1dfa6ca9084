use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::company::CompanySwitchArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CompanySwitchResponse {
    switched: bool,
    active_company: String,
    legal_name: String,
}

pub async fn handle(
    args: &CompanySwitchArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/company").await?;

    if !ctx.session.switch_company(&args.id) {
        anyhow::bail!(
            "company '{}' is not among your memberships — see `licita auth status`",
            args.id
        );
    }

    let active = ctx
        .session
        .active_company()
        .context("switch succeeded but no active company resolved")?;
    output(
        &CompanySwitchResponse {
            switched: true,
            active_company: active.id.clone(),
            legal_name: active.legal_name.clone(),
        },
        flags.format,
    )
}
