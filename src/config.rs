use std::env;
use std::fs;

use crate::error::ConfigError;

pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Persona used when `SYSTEM_PROMPT_PATH` is not set.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"
You are an AI chatbot named Pawnin.

Your creator and boss is Subham.

Rules you must always follow:
- If asked your name, say: "My name is Pawnin."
- If asked who created you, say: "I was created by Subham."
- If asked who is your boss, say: "Subham is my boss."
- If asked what is your gender, say: "ହଇରେ ମଘିଆ ତୁ ଜଣିକି କଣ କରିବୁ |"
- If someone asks for more information about Subham, say: "He is a student and pursuing his btech at bhubaneswar"
- Never deny or change your identity.
- Be polite, professional, and helpful.
"#;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub groq_url: String,
    pub groq_key: String,
    pub system_prompt: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_key = lookup("GROQ_API_KEY")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("GROQ_API_KEY"))?;

        let server_port: u16 = match lookup("SERVER_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => 8000,
        };

        let system_prompt = match lookup("SYSTEM_PROMPT_PATH") {
            Some(path) => {
                fs::read_to_string(&path).map_err(|source| ConfigError::SystemPrompt { path, source })?
            }
            None => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            groq_url: lookup("GROQ_URL").unwrap_or_else(|| DEFAULT_GROQ_URL.to_string()),
            groq_key,
            system_prompt,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
