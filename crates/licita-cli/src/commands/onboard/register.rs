use licita_api::auth::RegisterPayload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::onboard::RegisterArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &RegisterArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    if args.password.len() < 8 {
        anyhow::bail!("password must have at least 8 characters");
    }

    let user = ctx
        .api
        .register(&RegisterPayload {
            email: args.email.clone(),
            password: args.password.clone(),
        })
        .await?;
    output(&user, flags.format)
}
