mod pay;
mod register;
mod sign_contract;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OnboardCommands;
use crate::context::AppContext;

/// Handle `licita onboard <subcommand>`.
pub async fn handle(
    action: &OnboardCommands,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    match action {
        OnboardCommands::Register(args) => register::handle(args, flags, ctx).await,
        OnboardCommands::SignContract(args) => sign_contract::handle(args, flags, ctx).await,
        OnboardCommands::Pay(args) => pay::handle(args, flags, ctx).await,
    }
}
