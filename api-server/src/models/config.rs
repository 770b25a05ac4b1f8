use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use getset::Getters;
use movie_info::{ApiKey, CacheConfig, MovieInfoOptions, OMDB_URL};
use serde::{Deserialize, Deserializer};
use serde_inline_default::serde_inline_default;
use std::path::Path;

/// Environment variable pointing at the yaml config file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Read verbatim: figment would turn a key such as `12345678` into a number
const API_KEY_ENV: &str = "OMDB_API_KEY";

const ENV_KEYS: &[&str] = &[
    "OMDB_URL",
    "POPULAR_YEAR",
    "PLOT",
    "CACHE_TTL_SECONDS",
    "CACHE_MAX_ENTRIES",
    "CACHE_ENABLED",
    "LOG_LEVEL",
    "ADDRESS",
    "PORT",
];

#[serde_inline_default]
#[derive(Debug, Clone, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    /// Explicit OMDb key. When absent the built-in default key is used.
    #[serde(default, deserialize_with = "api_key_text")]
    omdb_api_key: Option<String>,
    #[serde_inline_default(OMDB_URL.to_string())]
    omdb_url: String,
    #[serde_inline_default(2024)]
    popular_year: u16,
    #[serde_inline_default("full".to_string())]
    plot: String,
    #[serde_inline_default(3600)]
    cache_ttl_seconds: i64,
    #[serde_inline_default(100)]
    cache_max_entries: usize,
    #[serde_inline_default(true)]
    cache_enabled: bool,
    #[serde_inline_default("info".to_string())]
    log_level: String,
    #[serde_inline_default("127.0.0.1".to_string())]
    address: String,
    #[serde_inline_default(8000)]
    port: u16,
}

impl Config {
    /// Load from the yaml file named by `CONFIG_PATH` (or `config.yaml`), then the environment.
    pub fn load() -> Result<Self, figment::Error> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_figment(Self::figment(path))
    }

    /// Sources from lowest to highest precedence: defaults, yaml file, environment.
    pub fn figment<P: AsRef<Path>>(path: P) -> Figment {
        let figment = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::raw().only(ENV_KEYS));

        match std::env::var(API_KEY_ENV) {
            Ok(key) => figment.merge(("omdb_api_key", key)),
            Err(_) => figment,
        }
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn api_key(&self) -> ApiKey {
        ApiKey::resolve(self.omdb_api_key.clone())
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.cache_max_entries, self.cache_enabled)
    }

    pub fn movie_info_options(&self) -> MovieInfoOptions {
        MovieInfoOptions::new(
            self.popular_year.to_string(),
            self.plot.clone(),
            chrono::Duration::seconds(self.cache_ttl_seconds),
        )
    }
}

/// Accept the key as a string or as a number a yaml scalar was read as.
fn api_key_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    let key = Option::<RawKey>::deserialize(deserializer)?.map(|raw| match raw {
        RawKey::Text(text) => text,
        RawKey::Unsigned(number) => number.to_string(),
        RawKey::Signed(number) => number.to_string(),
        RawKey::Float(number) => number.to_string(),
    });
    Ok(key)
}
