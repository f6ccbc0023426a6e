// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::future::Future;

use serde_json::Value;

use super::types::Endpoint;

/// One request/response exchange with the remote service.
///
/// Implementations own retrying; whatever they resolve to is final for the caller.
pub trait Transport {
    fn exchange(
        &self,
        endpoint: Endpoint,
        body: Value,
    ) -> impl Future<Output = Result<Value, TransportError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response after the last permitted attempt.
    Unreachable { endpoint: Endpoint, attempts: u32, reason: String },
    /// The service answered with a non-2xx status.
    Status { endpoint: Endpoint, status: u16 },
    /// The request body could not be encoded.
    Encode { endpoint: Endpoint, reason: String },
    /// The response body did not have the expected shape.
    Decode { endpoint: Endpoint, reason: String },
}

impl TransportError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Unreachable { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Encode { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { endpoint, attempts, reason } => {
                write!(f, "{endpoint}: no response after {attempts} attempt(s): {reason}")
            }
            Self::Status { endpoint, status } => write!(f, "{endpoint}: server returned {status}"),
            Self::Encode { endpoint, reason } => {
                write!(f, "{endpoint}: cannot encode request: {reason}")
            }
            Self::Decode { endpoint, reason } => {
                write!(f, "{endpoint}: unexpected response: {reason}")
            }
        }
    }
}

impl std::error::Error for TransportError {}
