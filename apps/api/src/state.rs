use crate::config::Config;
use crate::version::AppVersion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Resolved once from the VERSION file before the listener binds.
    pub version: AppVersion,
}
