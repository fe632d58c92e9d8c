// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::config::ClientConfig;
use crate::protocol::{ChatReply, ChatRequest, HealthStatus};
use crate::TransportError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::future::Future;

/// One request/response exchange with the chat backend.
///
/// Conversation state lives on the backend; implementations only carry the
/// message across.
pub trait ChatTransport {
    fn send(&self, message: &str) -> impl Future<Output = Result<ChatReply, TransportError>> + Send;
}

/// `POST {base_url}/chat` over reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    chat_url: String,
    health_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        info!(
            "Chat backend configured — base_url={} timeout_secs={}",
            config.base_url, config.timeout_secs
        );
        Ok(Self {
            client,
            chat_url: config.chat_url(),
            health_url: config.health_url(),
        })
    }

    /// `GET {base_url}/`; the backend answers `{status, message}`.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(unreachable_error)?;
        decode(response).await
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError> {
        debug!(
            "POST chat — url={} message_chars={}",
            self.chat_url,
            message.chars().count()
        );
        let response = self
            .client
            .post(&self.chat_url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(unreachable_error)?;
        decode(response).await
    }
}

fn unreachable_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Unreachable(format!("request timed out ({})", e))
    } else {
        TransportError::Unreachable(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }
    let body = response.text().await.map_err(unreachable_error)?;
    debug!("Backend replied — status={} body_bytes={}", status, body.len());
    serde_json::from_str(&body).map_err(|e| TransportError::MalformedBody(e.to_string()))
}
