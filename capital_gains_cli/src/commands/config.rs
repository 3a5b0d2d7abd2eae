use capital_gains_api::{ApiConfig, BuildMode};

use crate::output::{print_config, OutputFormat};

/// Resolves the API configuration once for the whole invocation.
///
/// An explicit base URL wins; otherwise the build mode decides, reading
/// `VITE_API_BASE_URL` from the environment (and `.env`) in production.
pub fn resolve(mode: Option<BuildMode>, base_url: Option<&str>) -> ApiConfig {
    let mode = mode.unwrap_or_else(BuildMode::current);
    match base_url {
        Some(url) => ApiConfig::with_base_url(mode, url),
        None => ApiConfig::from_env_in(mode),
    }
}

pub fn run(config: &ApiConfig, format: &OutputFormat) {
    print_config(config, format);
}
