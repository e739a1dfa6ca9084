use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    subject: String,
    role: String,
    expires_at: Option<String>,
    companies: usize,
    active_company: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    ctx.session.sign_in(&args.email, &args.password).await?;

    let identity = ctx
        .session
        .identity()
        .context("sign-in resolved without an identity")?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            subject: identity.subject.clone(),
            role: identity.role.clone(),
            expires_at: identity.expires_at.map(|dt| dt.to_rfc3339()),
            companies: ctx.session.companies().len(),
            active_company: ctx.session.active_company().map(|c| c.legal_name.clone()),
        },
        flags.format,
    )
}
