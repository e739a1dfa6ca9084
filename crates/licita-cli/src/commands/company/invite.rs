use anyhow::Context;
use licita_api::companies::InvitePayload;
use licita_core::company::MembershipRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::company::CompanyInviteArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CompanyInviteArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/company/team").await?;

    let role: MembershipRole = args.role.parse()?;
    let company_id = ctx
        .scope_company(args.company.as_deref())
        .context("no company selected — pass --company or run `licita company switch`")?;

    let invitation = ctx
        .api
        .invite_member(
            &company_id,
            &InvitePayload {
                email: args.email.clone(),
                role,
            },
        )
        .await?;
    output(&invitation, flags.format)
}
