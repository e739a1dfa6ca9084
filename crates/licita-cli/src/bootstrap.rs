use anyhow::Context;

/// Load the layered configuration, with `.env` support for local runs.
pub fn load_config() -> anyhow::Result<licita_config::LicitaConfig> {
    load_dotenv();
    licita_config::LicitaConfig::load().context("failed to load configuration")
}

/// Load a `.env` from the current directory, if one exists. Missing files
/// are not an error; anything else is logged and ignored.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "failed to load .env"),
    }
}
