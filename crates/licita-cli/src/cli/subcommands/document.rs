use clap::{Args, Subcommand};

/// Document vault commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// List documents.
    List(DocumentListArgs),
    /// Upload a document.
    Upload(DocumentUploadArgs),
    /// Download a document.
    Download(DocumentDownloadArgs),
    /// Show the vault grouped by legal category and validity.
    Vault(DocumentListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DocumentListArgs {
    /// Company id (defaults to the active company; administrators may pass
    /// any company).
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DocumentUploadArgs {
    /// Path of the file to upload.
    pub path: String,
    /// Document title.
    #[arg(long)]
    pub title: Option<String>,
    /// Catalog type id (uploads a structured certificate).
    #[arg(long)]
    pub type_id: Option<String>,
    /// Authentication code printed on the certificate.
    #[arg(long)]
    pub auth_code: Option<String>,
    /// Expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expires: Option<String>,
    /// Target company id (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DocumentDownloadArgs {
    /// Document id.
    pub id: String,
    /// Output file path (defaults to the document's filename).
    #[arg(long)]
    pub out: Option<String>,
}
