use anyhow::Context;
use licita_api::companies::CompanyUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::company::CompanyUpdateArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CompanyUpdateArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/company/settings").await?;

    let company_id = ctx
        .scope_company(args.company.as_deref())
        .context("no company selected — pass --company or run `licita company switch`")?;

    let payload = CompanyUpdate {
        legal_name: args.legal_name.clone(),
        trade_name: args.trade_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        contact_name: args.contact_name.clone(),
        city: args.city.clone(),
        state: args.state.clone(),
        ..Default::default()
    };
    if serde_json::to_value(&payload)
        .map(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
        .unwrap_or(true)
    {
        anyhow::bail!("nothing to update — pass at least one field flag");
    }

    let company = ctx.api.update_company(&company_id, &payload).await?;
    output(&company, flags.format)
}
