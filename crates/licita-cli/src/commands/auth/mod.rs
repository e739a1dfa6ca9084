mod login;
mod logout;
mod status;
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `licita auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, ctx).await,
        AuthCommands::Logout => logout::handle(flags, ctx),
        AuthCommands::Status => status::handle(flags, ctx),
        AuthCommands::Whoami => whoami::handle(flags, ctx).await,
    }
}
