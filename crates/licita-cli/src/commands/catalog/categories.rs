use licita_api::documents::{CategoryCreate, CategoryUpdate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::catalog::{CatalogIdArg, CategoryAddArgs, CategoryEditArgs};
use crate::commands::{ADMIN_ROLES, require_session};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CategoryDeletedResponse {
    deleted: bool,
    id: String,
}

pub async fn add(
    args: &CategoryAddArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    let category = ctx
        .api
        .create_category(&CategoryCreate {
            name: args.name.clone(),
            slug: args.slug.clone(),
            order: args.order,
        })
        .await?;
    output(&category, flags.format)
}

pub async fn edit(
    args: &CategoryEditArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    if args.name.is_none() && args.slug.is_none() && args.order.is_none() {
        anyhow::bail!("nothing to update — pass --name, --slug, or --order");
    }
    let category = ctx
        .api
        .update_category(
            &args.id,
            &CategoryUpdate {
                name: args.name.clone(),
                slug: args.slug.clone(),
                order: args.order,
            },
        )
        .await?;
    output(&category, flags.format)
}

pub async fn remove(
    args: &CatalogIdArg,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    ctx.api.delete_category(&args.id).await?;
    output(
        &CategoryDeletedResponse {
            deleted: true,
            id: args.id.clone(),
        },
        flags.format,
    )
}
