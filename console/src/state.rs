use client::Services;
use shared::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub services: Services,
}

impl AppState {
    pub fn new() -> Result<Self, anyhow::Error> {
        let config = Config::from_env()?;
        let services = Services::new(&config);
        tracing::info!(api = %config.api_base_url, "Using backend");

        Ok(AppState { config, services })
    }
}
