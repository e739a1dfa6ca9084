mod download;
mod list;
mod upload;
mod vault;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::context::AppContext;

/// Handle `licita document <subcommand>`.
pub async fn handle(
    action: &DocumentCommands,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::List(args) => list::handle(args, flags, ctx).await,
        DocumentCommands::Upload(args) => upload::handle(args, flags, ctx).await,
        DocumentCommands::Download(args) => download::handle(args, flags, ctx).await,
        DocumentCommands::Vault(args) => vault::handle(args, flags, ctx).await,
    }
}
