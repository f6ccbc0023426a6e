// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-held view configuration; one per exploration session.
///
/// Settings the client does not model are kept in `extra` so a read-merge-write round trip
/// hands them back to the server unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default)]
    pub selected_node_id: Option<u64>,
    #[serde(default)]
    pub show_unreachable_nodes: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
