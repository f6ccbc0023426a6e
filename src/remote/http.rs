// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{Transport, TransportError};
use super::types::Endpoint;

/// Fixed-backoff, bounded retry applied to every exchange. Always allows at least one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: 5, backoff: Duration::from_millis(500) }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, backoff: Duration) -> Self {
        Self { attempts: attempts.max(1), backoff }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }
}

/// JSON-over-POST transport: every endpoint is `POST <base_url>/<path>`.
///
/// Connection failures and 5xx answers are retried; 4xx answers are returned at once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpTransport {
    pub fn new(base_url: &str, retry: RetryPolicy) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: normalize_base_url(base_url).to_owned(), retry })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}

enum AttemptFailure {
    Retryable(String),
    Fatal(TransportError),
}

impl HttpTransport {
    async fn attempt(&self, endpoint: Endpoint, body: &Value) -> Result<Value, AttemptFailure> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|err| AttemptFailure::Retryable(err.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(AttemptFailure::Retryable(format!("status {status}")));
        }
        if !status.is_success() {
            return Err(AttemptFailure::Fatal(TransportError::Status {
                endpoint,
                status: status.as_u16(),
            }));
        }

        let bytes =
            response.bytes().await.map_err(|err| AttemptFailure::Retryable(err.to_string()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|err| {
            AttemptFailure::Fatal(TransportError::Decode { endpoint, reason: err.to_string() })
        })
    }
}

impl Transport for HttpTransport {
    async fn exchange(&self, endpoint: Endpoint, body: Value) -> Result<Value, TransportError> {
        let mut last_reason = String::new();
        for attempt in 1..=self.retry.attempts {
            match self.attempt(endpoint, &body).await {
                Ok(value) => {
                    debug!("exchange ok endpoint={endpoint} attempt={attempt}");
                    return Ok(value);
                }
                Err(AttemptFailure::Fatal(err)) => return Err(err),
                Err(AttemptFailure::Retryable(reason)) => {
                    warn!(
                        "exchange failed endpoint={endpoint} attempt={attempt}/{} err={reason}",
                        self.retry.attempts
                    );
                    last_reason = reason;
                }
            }
            if attempt < self.retry.attempts {
                tokio::time::sleep(self.retry.backoff).await;
            }
        }

        Err(TransportError::Unreachable {
            endpoint,
            attempts: self.retry.attempts,
            reason: last_reason,
        })
    }
}

fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim().trim_end_matches('/')
}
