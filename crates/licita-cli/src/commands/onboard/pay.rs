use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::onboard::PayArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

#[derive(Serialize)]
struct PayResponse {
    paid: bool,
    email: String,
    next: String,
}

pub async fn handle(
    args: &PayArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    let bar = progress::spinner("Processing payment…");
    let result = ctx.api.simulate_payment(&args.email).await;
    progress::finish(bar, "Payment approved");
    result?;

    output(
        &PayResponse {
            paid: true,
            email: args.email.clone(),
            next: ctx.config.api.entry_route.clone(),
        },
        flags.format,
    )
}
