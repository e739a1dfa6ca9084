mod invite;
mod list;
mod show;
mod switch;
mod team;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AppContext;

/// Handle `licita company <subcommand>`.
pub async fn handle(
    action: &CompanyCommands,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::List => list::handle(flags, ctx).await,
        CompanyCommands::Show(args) => show::handle(args, flags, ctx).await,
        CompanyCommands::Switch(args) => switch::handle(args, flags, ctx).await,
        CompanyCommands::Team(args) => team::handle(args, flags, ctx).await,
        CompanyCommands::Invite(args) => invite::handle(args, flags, ctx).await,
        CompanyCommands::Update(args) => update::handle(args, flags, ctx).await,
    }
}
