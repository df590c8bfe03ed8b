use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with
/// the prefix `COMMERCE_PULSE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub clickhouse: ClickHouseConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub funnel: FunnelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Connection settings for the event store backing the funnel counts.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickHouseConfig {
    #[serde(default = "default_clickhouse_url")]
    pub url: String,
    #[serde(default = "default_clickhouse_db")]
    pub database: String,
    #[serde(default = "default_events_table")]
    pub events_table: String,
    /// Trailing window over which "recent" events are counted. This is the
    /// store's own policy; callers never pass a window.
    #[serde(default = "default_recent_window_hours")]
    pub recent_window_hours: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Presentation settings for the funnel view.
#[derive(Debug, Clone, Deserialize)]
pub struct FunnelConfig {
    /// Named theme preset: `classic`, `midnight`, `ocean`, or `slate`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

// Default functions
fn default_node_id() -> String {
    "node-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_clickhouse_url() -> String {
    "http://localhost:8123".to_string()
}
fn default_clickhouse_db() -> String {
    "commerce_pulse".to_string()
}
fn default_events_table() -> String {
    "user_events".to_string()
}
fn default_recent_window_hours() -> u32 {
    24
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_theme() -> String {
    "classic".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for ClickHouseConfig {
    fn default() -> Self {
        Self {
            url: default_clickhouse_url(),
            database: default_clickhouse_db(),
            events_table: default_events_table(),
            recent_window_hours: default_recent_window_hours(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            clickhouse: ClickHouseConfig::default(),
            metrics: MetricsConfig::default(),
            funnel: FunnelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("COMMERCE_PULSE")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
