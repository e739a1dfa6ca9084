use licita_core::company::Company;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::{ADMIN_ROLES, require_session};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CompanyRow {
    id: String,
    legal_name: String,
    tax_id: String,
    active: bool,
    contract_signed: bool,
    payment_active: bool,
    admin_verified: bool,
    created_at: String,
}

impl From<Company> for CompanyRow {
    fn from(company: Company) -> Self {
        let active = company.active();
        Self {
            active,
            id: company.id,
            legal_name: company.legal_name,
            tax_id: company.tax_id,
            contract_signed: company.contract_signed,
            payment_active: company.payment_active,
            admin_verified: company.admin_verified,
            created_at: company.created_at,
        }
    }
}

pub async fn handle(flags: &GlobalFlags, ctx: &mut AppContext) -> anyhow::Result<()> {
    require_session(ctx, Some(ADMIN_ROLES), "/admin/companies").await?;

    let limit = flags
        .limit
        .unwrap_or(ctx.config.general.default_limit) as usize;
    let mut rows: Vec<CompanyRow> = ctx
        .api
        .companies()
        .await?
        .into_iter()
        .map(CompanyRow::from)
        .collect();
    rows.truncate(limit);

    output(&rows, flags.format)
}
