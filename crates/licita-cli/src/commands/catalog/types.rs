use licita_api::documents::{TypeCreate, TypeUpdate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::catalog::{CatalogIdArg, TypeAddArgs, TypeEditArgs};
use crate::commands::{ADMIN_ROLES, require_session};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TypeDeletedResponse {
    deleted: bool,
    id: String,
}

pub async fn add(
    args: &TypeAddArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    let doc_type = ctx
        .api
        .create_type(&TypeCreate {
            name: args.name.clone(),
            slug: args.slug.clone(),
            validity_days_default: args.validity_days,
            description: args.description.clone(),
            category_id: args.category.clone(),
        })
        .await?;
    output(&doc_type, flags.format)
}

pub async fn edit(
    args: &TypeEditArgs,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    if args.name.is_none()
        && args.slug.is_none()
        && args.validity_days.is_none()
        && args.description.is_none()
        && args.category.is_none()
    {
        anyhow::bail!("nothing to update — pass at least one field flag");
    }
    let doc_type = ctx
        .api
        .update_type(
            &args.id,
            &TypeUpdate {
                name: args.name.clone(),
                slug: args.slug.clone(),
                validity_days_default: args.validity_days,
                description: args.description.clone(),
                category_id: args.category.clone(),
            },
        )
        .await?;
    output(&doc_type, flags.format)
}

pub async fn remove(
    args: &CatalogIdArg,
    flags: &GlobalFlags,
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/settings").await?;

    ctx.api.delete_type(&args.id).await?;
    output(
        &TypeDeletedResponse {
            deleted: true,
            id: args.id.clone(),
        },
        flags.format,
    )
}
