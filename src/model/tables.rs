// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::collections::BTreeMap;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::ids::{Address, NodeId};
use super::module::ModuleMap;
use super::node::NodeRecord;

/// How much of the remote mining pipeline a write forces to run again.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(u8)]
pub enum RerunLevel {
    /// Node metadata only.
    #[default]
    Metadata = 0,
    /// Module topology changed.
    ModuleTopology = 1,
    /// Collapse/visibility change: re-render, no re-mining.
    ViewOnly = 2,
}

impl JsonSchema for RerunLevel {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RerunLevel")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "enum": [0, 1, 2]
        })
    }
}

/// The mined diagram's node table (`node_data`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinedDiagram {
    #[serde(default)]
    pub nodes: BTreeMap<NodeId, NodeRecord>,
    #[serde(default)]
    pub modules: ModuleMap,
}

/// Pre-mining node and module tables (`get_raw_nodes_and_modules`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTables {
    #[serde(default)]
    pub nodes: BTreeMap<Address, NodeRecord>,
    #[serde(default)]
    pub modules: ModuleMap,
    #[serde(default)]
    pub rerun_level: RerunLevel,
}

impl RawTables {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}
