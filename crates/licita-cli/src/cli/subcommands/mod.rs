pub mod auth;
pub mod catalog;
pub mod company;
pub mod document;
pub mod onboard;

pub use auth::AuthCommands;
pub use catalog::CatalogCommands;
pub use company::CompanyCommands;
pub use document::DocumentCommands;
pub use onboard::OnboardCommands;
