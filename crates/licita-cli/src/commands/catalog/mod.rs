mod categories;
mod list;
mod types;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;

/// Handle `licita catalog <subcommand>`.
///
/// Listing is open to any authenticated user (the upload flow needs it);
/// mutations are administrator-only.
pub async fn handle(
    action: &CatalogCommands,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::List => list::handle(flags, ctx).await,
        CatalogCommands::AddCategory(args) => categories::add(args, flags, ctx).await,
        CatalogCommands::EditCategory(args) => categories::edit(args, flags, ctx).await,
        CatalogCommands::RmCategory(args) => categories::remove(args, flags, ctx).await,
        CatalogCommands::AddType(args) => types::add(args, flags, ctx).await,
        CatalogCommands::EditType(args) => types::edit(args, flags, ctx).await,
        CatalogCommands::RmType(args) => types::remove(args, flags, ctx).await,
    }
}
