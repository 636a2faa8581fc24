use std::sync::Arc;

use trike_api::ApiClient;

/// Environment-driven settings for the admin console.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub api: Arc<ApiClient>,
    pub config: Arc<Config>,
}

impl Context {
    /// Create a new application context.
    pub fn new(api: Arc<ApiClient>, config: Arc<Config>) -> Self {
        Self { api, config }
    }
}
