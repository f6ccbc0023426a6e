// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::remote::RetryPolicy;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const BACKEND_URL_ENV: &str = "EXPLORANT_BACKEND";
pub const DEFAULT_SOURCE_HALF_HEIGHT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub backend_url: String,
    pub retry: RetryPolicy,
    /// Lines shown above and below the centre of the source panel.
    pub source_half_height: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            retry: RetryPolicy::default(),
            source_half_height: DEFAULT_SOURCE_HALF_HEIGHT,
        }
    }
}

impl ExplorerConfig {
    /// Defaults, with the backend URL taken from `EXPLORANT_BACKEND` when it is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let url = std::env::var(BACKEND_URL_ENV).ok().filter(|url| !url.trim().is_empty());
        if let Some(url) = url {
            config.backend_url = url.trim().to_owned();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ExplorerConfig, DEFAULT_BACKEND_URL};

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ExplorerConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.retry.attempts(), 5);
        assert_eq!(config.retry.backoff(), Duration::from_millis(500));
        assert_eq!(config.source_half_height, 30);
    }
}
