use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::require_session;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CatalogRow {
    category: String,
    order: i64,
    type_id: String,
    r#type: String,
    slug: String,
    validity_days: i64,
}

pub async fn handle(flags: &GlobalFlags, ctx: &mut AppContext) -> anyhow::Result<()> {
    require_session(ctx, None, "/documents/catalog").await?;

    let catalog = ctx.api.catalog().await?;
    let mut rows = Vec::new();
    for category in catalog {
        for doc_type in category.types {
            rows.push(CatalogRow {
                category: category.name.clone(),
                order: category.order,
                type_id: doc_type.id,
                r#type: doc_type.name,
                slug: doc_type.slug,
                validity_days: doc_type.validity_days_default,
            });
        }
    }

    output(&rows, flags.format)
}
