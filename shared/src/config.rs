use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub items_per_page: u32,
    pub not_found_route: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(Config {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            items_per_page: match std::env::var("ITEMS_PER_PAGE") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    tracing::warn!(value = %raw, "ITEMS_PER_PAGE is not a number, using 20");
                    20
                }),
                Err(_) => 20,
            },
            not_found_route: std::env::var("NOT_FOUND_ROUTE")
                .unwrap_or_else(|_| "404".to_string()),
        })
    }

    /// Configuration pointing at `api_base_url` with every other setting at its default.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
            items_per_page: 20,
            not_found_route: "404".to_string(),
        }
    }

    /// Absolute URL of a backend resource, e.g. `api/charts`.
    pub fn endpoint_for(&self, api: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            api.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_joins_with_single_slash() {
        let config = Config::with_base_url("http://localhost:8080/");
        assert_eq!(config.endpoint_for("api/charts"), "http://localhost:8080/api/charts");
        assert_eq!(config.endpoint_for("/api/fees"), "http://localhost:8080/api/fees");
    }
}
