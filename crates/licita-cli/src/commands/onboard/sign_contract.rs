use std::time::Duration;

use anyhow::Context;
use licita_api::companies::CompanyUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::onboard::SignContractArgs;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

/// Time the simulated digital-signature provider takes.
const SIGNATURE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Serialize)]
struct SignContractResponse {
    signed: bool,
    company: String,
    legal_name: String,
}

pub async fn handle(
    args: &SignContractArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, None, "/contract").await?;

    if !args.accept_terms || !args.accept_proxy {
        anyhow::bail!(
            "both --accept-terms and --accept-proxy are required to sign the service contract"
        );
    }

    let company_id = ctx
        .scope_company(args.company.as_deref())
        .context("no company selected — pass --company or run `licita company switch`")?;

    let bar = progress::spinner("Signing documents digitally…");
    tokio::time::sleep(SIGNATURE_DELAY).await;
    let result = ctx
        .api
        .update_company(
            &company_id,
            &CompanyUpdate {
                contract_signed: Some(true),
                ..Default::default()
            },
        )
        .await;
    progress::finish(bar, "Documents signed");
    let company = result?;

    output(
        &SignContractResponse {
            signed: true,
            company: company.id,
            legal_name: company.legal_name,
        },
        flags.format,
    )
}
