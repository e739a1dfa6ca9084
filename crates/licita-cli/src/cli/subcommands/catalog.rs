use clap::{Args, Subcommand};

/// Document-type catalog administration.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List categories and their document types.
    List,
    /// Create a category.
    AddCategory(CategoryAddArgs),
    /// Update a category.
    EditCategory(CategoryEditArgs),
    /// Delete a category.
    RmCategory(CatalogIdArg),
    /// Create a document type.
    AddType(TypeAddArgs),
    /// Update a document type.
    EditType(TypeEditArgs),
    /// Delete a document type.
    RmType(CatalogIdArg),
}

#[derive(Clone, Debug, Args)]
pub struct CatalogIdArg {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryAddArgs {
    pub name: String,
    #[arg(long)]
    pub slug: String,
    #[arg(long, default_value_t = 0)]
    pub order: i64,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryEditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub order: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct TypeAddArgs {
    pub name: String,
    #[arg(long)]
    pub slug: String,
    /// Default validity in days for documents of this type.
    #[arg(long)]
    pub validity_days: i64,
    #[arg(long)]
    pub description: Option<String>,
    /// Category the type belongs to.
    #[arg(long)]
    pub category: String,
}

#[derive(Clone, Debug, Args)]
pub struct TypeEditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub validity_days: Option<i64>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}
