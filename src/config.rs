//! Build-time settings for the GitHub widgets.
//!
//! A Trunk build has no process environment at runtime, so every value is
//! captured with `option_env!` when the bundle is compiled.

pub const DEFAULT_USERNAME: &str = "bucurdavid";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_WEB_HOST: &str = "github.com";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// GitHub login both widgets report on.
    pub username: String,
    /// REST/GraphQL API root, no trailing slash.
    pub api_base: String,
    /// Host used to build commit links.
    pub web_host: String,
    /// Bearer token for the GraphQL endpoint.
    pub token: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "PORTFOLIO_GITHUB_USER" => option_env!("PORTFOLIO_GITHUB_USER"),
                "PORTFOLIO_GITHUB_API" => option_env!("PORTFOLIO_GITHUB_API"),
                "PORTFOLIO_GITHUB_HOST" => option_env!("PORTFOLIO_GITHUB_HOST"),
                "GITHUB_TOKEN" => option_env!("GITHUB_TOKEN"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            username: non_empty("PORTFOLIO_GITHUB_USER")
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            api_base: non_empty("PORTFOLIO_GITHUB_API")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            web_host: non_empty("PORTFOLIO_GITHUB_HOST")
                .unwrap_or_else(|| DEFAULT_WEB_HOST.to_string()),
            token: non_empty("GITHUB_TOKEN"),
        }
    }
}
