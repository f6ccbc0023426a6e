// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::Address;

/// Where in the traced program's source a node was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SourceLocation {
    pub file: String,
    pub line_num: u64,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line_num: u64) -> Self {
        Self { file: file.into(), line_num }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum NodeType {
    #[default]
    Event,
    Flow,
}

/// One node as stored by the remote service.
///
/// The same shape is used by the raw table (where `addr` is the node's own key) and by the
/// mined table (where `addr` points back into the raw table). Fields this client does not
/// know about are carried through untouched so a read-modify-write never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NodeRecord {
    pub name: String,
    pub addr: Address,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub node_type: NodeType,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NodeRecord {
    pub fn new(name: impl Into<String>, addr: Address) -> Self {
        Self {
            name: name.into(),
            addr,
            module: None,
            node_type: NodeType::default(),
            location: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeRecord, NodeType, SourceLocation};
    use crate::model::Address;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let text = r#"{
            "name": "parse_date",
            "addr": 4096,
            "location": {"file": "main.c", "line_num": 12},
            "fqn": "main::parse_date"
        }"#;
        let node: NodeRecord = serde_json::from_str(text).expect("decode");
        assert_eq!(node.addr, Address::new(4096));
        assert_eq!(node.node_type, NodeType::Event);
        assert_eq!(node.module, None);
        assert_eq!(node.location, Some(SourceLocation::new("main.c", 12)));

        let value = serde_json::to_value(&node).expect("encode");
        assert_eq!(value["fqn"], "main::parse_date");
    }
}
