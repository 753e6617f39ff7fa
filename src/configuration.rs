use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebDriverSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebDriverSettings {
    pub url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_load_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub settle_wait_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub follow_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub follow_settle_ms: u64,
}

impl WebDriverSettings {
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn settle_wait(&self) -> Duration {
        Duration::from_millis(self.settle_wait_ms)
    }

    pub fn follow_timeout(&self) -> Duration {
        Duration::from_secs(self.follow_timeout_secs)
    }

    pub fn follow_settle(&self) -> Duration {
        Duration::from_millis(self.follow_settle_ms)
    }
}

/// Defaults overridable from the environment, e.g. RADAR_WEBDRIVER__URL.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("webdriver.url", "http://localhost:4444")?
        .set_default("webdriver.page_load_timeout_secs", "60")?
        .set_default("webdriver.settle_wait_ms", "3000")?
        .set_default("webdriver.follow_timeout_secs", "20")?
        .set_default("webdriver.follow_settle_ms", "2000")?
        .add_source(
            config::Environment::with_prefix("RADAR")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
