use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use super::ChatCompletion;
use crate::error::CompletionError;
use crate::models::prompt::Turn;

pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const TEMPERATURE: f64 = 0.7;

pub struct GroqService {
    client: Client,
    url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqService {
    pub fn new(url: String, api_key: String) -> Self {
        let client = Client::new();
        Self {
            client,
            url,
            api_key,
        }
    }
}

#[async_trait]
impl ChatCompletion for GroqService {
    async fn complete(&self, turns: &[Turn]) -> Result<String, CompletionError> {
        let request_body = CompletionRequest {
            model: GROQ_MODEL,
            messages: turns,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoCandidates)?;

        match choice.message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(CompletionError::EmptyContent),
        }
    }
}
