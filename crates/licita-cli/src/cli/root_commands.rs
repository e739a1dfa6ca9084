use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CatalogCommands, CompanyCommands, DocumentCommands, OnboardCommands,
};

/// Top-level commands of the `licita` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication: login, logout, status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Companies and teams.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Document vault.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Document-type catalog administration.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Dashboards.
    Dashboard(DashboardArgs),
    /// Onboarding: register, sign the contract, pay.
    Onboard {
        #[command(subcommand)]
        action: OnboardCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Show the administrator dashboard instead of the client one.
    #[arg(long)]
    pub admin: bool,
    /// Company id for the client dashboard (defaults to the active company).
    #[arg(long)]
    pub company: Option<String>,
}
