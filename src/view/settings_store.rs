// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;

use tracing::info;

use crate::model::ViewSettings;
use crate::remote::{Backend, Transport, TransportError};

/// Read-through cache of the server's [`ViewSettings`].
///
/// Writes are read-merge-write against the server copy and are not transactional: a second
/// client writing between the read and the write loses its change. One active client per
/// session is assumed.
#[derive(Debug, Default)]
pub struct SettingsStore {
    cached: RefCell<Option<ViewSettings>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last settings successfully read or written.
    pub fn cached(&self) -> Option<ViewSettings> {
        self.cached.borrow().clone()
    }

    pub async fn fetch_settings<T: Transport>(
        &self,
        backend: &Backend<T>,
    ) -> Result<ViewSettings, TransportError> {
        let settings = backend.get_settings().await?;
        self.cached.replace(Some(settings.clone()));
        Ok(settings)
    }

    pub async fn commit_settings<T, F>(
        &self,
        backend: &Backend<T>,
        mutator: F,
    ) -> Result<ViewSettings, TransportError>
    where
        T: Transport,
        F: FnOnce(ViewSettings) -> ViewSettings,
    {
        let current = backend.get_settings().await?;
        let next = mutator(current);
        let written = backend.set_settings(&next).await?;
        info!(
            "settings committed selected_node_id={:?} show_unreachable_nodes={}",
            written.selected_node_id, written.show_unreachable_nodes
        );
        self.cached.replace(Some(written.clone()));
        Ok(written)
    }
}
