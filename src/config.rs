use reqwest::Url;
use teloxide::types::ChatId;

const DEFAULT_CHANNEL_ID: i64 = -1002682987275;
const DEFAULT_GROUP_ID: i64 = -1002375756524;
const DEFAULT_CHANNEL_LINK: &str = "https://t.me/latest_animes_world";
const DEFAULT_GROUP_LINK: &str = "https://t.me/All_anime_chat";

/// Read once at startup; the bot token itself is read by `Bot::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub genius_api_token: String,
    pub gate: GateConfig,
}

/// The two chats a user must join before lyrics search unlocks.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub channel_id: ChatId,
    pub group_id: ChatId,
    pub channel_link: Url,
    pub group_link: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            genius_api_token: required_var("GENIUS_API_TOKEN")?,
            gate: GateConfig::from_env()?,
        })
    }
}

impl GateConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            channel_id: chat_id_var("CHANNEL_ID", DEFAULT_CHANNEL_ID)?,
            group_id: chat_id_var("GROUP_ID", DEFAULT_GROUP_ID)?,
            channel_link: url_var("CHANNEL_LINK", DEFAULT_CHANNEL_LINK)?,
            group_link: url_var("GROUP_LINK", DEFAULT_GROUP_LINK)?,
        })
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(var)),
    }
}

fn chat_id_var(var: &'static str, default: i64) -> Result<ChatId, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_chat_id(var, &raw),
        Err(_) => Ok(ChatId(default)),
    }
}

fn url_var(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_url(var, &raw),
        Err(_) => Ok(Url::parse(default).expect("default link is a valid url")),
    }
}

fn parse_chat_id(var: &'static str, raw: &str) -> Result<ChatId, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        })
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
