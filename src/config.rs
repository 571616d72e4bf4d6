// src/config.rs
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/blenderbot-400M-distill";
pub const DEFAULT_DATASET_URL: &str =
    "https://vpheuqtiutguepjceiqu.supabase.co/storage/v1/object/public/data/cars_data.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub inference: InferenceConfig,
    /// `None` keeps the HTTP client's own default.
    pub upstream_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_GATEWAY_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub dataset_url: String,
    pub dataset_lines: usize,
    pub max_length: u32,
    pub temperature: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: DEFAULT_INFERENCE_URL.to_string(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            dataset_lines: 50,
            max_length: 300,
            temperature: 0.7,
        }
    }
}

impl Settings {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Settings::default();

        if let Some(host) = get("HOST") {
            settings.server.host = host;
        }
        if let Some(port) = parse(&get, "PORT")? {
            settings.server.port = port;
        }

        settings.gateway.api_key = get("LOVABLE_API_KEY");
        if let Some(url) = get("GATEWAY_URL") {
            settings.gateway.url = url;
        }
        if let Some(model) = get("GATEWAY_MODEL") {
            settings.gateway.model = model;
        }

        settings.inference.api_key = get("HUGGING_FACE_API_KEY");
        if let Some(url) = get("INFERENCE_URL") {
            settings.inference.url = url;
        }
        if let Some(url) = get("INFERENCE_DATASET_URL") {
            settings.inference.dataset_url = url;
        }
        if let Some(lines) = parse(&get, "DATASET_SAMPLE_LINES")? {
            settings.inference.dataset_lines = lines;
        }
        if let Some(max_length) = parse(&get, "INFERENCE_MAX_LENGTH")? {
            settings.inference.max_length = max_length;
        }
        if let Some(temperature) = parse(&get, "INFERENCE_TEMPERATURE")? {
            settings.inference.temperature = temperature;
        }

        settings.upstream_timeout =
            parse::<u64, _>(&get, "UPSTREAM_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T, F>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(None),
    }
}
