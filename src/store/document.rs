// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::model::module::check_acyclic;
use crate::model::{Address, ModuleMap, ModuleTreeError, NodeRecord, RawTables, RerunLevel};

/// Offline copy of the raw node/module tables.
///
/// The recorded `rerun_level` is kept for inspection only; [`EditsDocument::into_tables`]
/// always yields level 0 so that importing re-mines from scratch, and refuses a module tree
/// whose parent chains loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EditsDocument {
    #[serde(default)]
    pub nodes: BTreeMap<Address, NodeRecord>,
    #[serde(default)]
    pub modules: ModuleMap,
    #[serde(default)]
    pub rerun_level: RerunLevel,
}

impl EditsDocument {
    pub fn from_tables(tables: &RawTables) -> Self {
        Self {
            nodes: tables.nodes.clone(),
            modules: tables.modules.clone(),
            rerun_level: tables.rerun_level,
        }
    }

    pub fn into_tables(self) -> Result<RawTables, ModuleTreeError> {
        check_acyclic(&self.modules)?;
        Ok(RawTables {
            nodes: self.nodes,
            modules: self.modules,
            rerun_level: RerunLevel::Metadata,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn json_schema() -> Schema {
        schemars::schema_for!(EditsDocument)
    }
}

#[cfg(test)]
mod tests {
    use super::EditsDocument;
    use crate::model::fixtures::raw_tables;
    use crate::model::{Module, ModuleTreeError, RerunLevel};

    #[test]
    fn export_then_import_resets_rerun_level_only() {
        let mut tables = raw_tables();
        tables.rerun_level = RerunLevel::ViewOnly;

        let json = EditsDocument::from_tables(&tables).to_json().expect("encode");
        let imported =
            EditsDocument::from_json(&json).expect("decode").into_tables().expect("acyclic");

        assert_eq!(imported.rerun_level, RerunLevel::Metadata);
        assert_eq!(imported.nodes, tables.nodes);
        assert_eq!(imported.modules, tables.modules);
    }

    #[test]
    fn cyclic_module_tree_is_refused_on_import() {
        let mut document = EditsDocument::from_tables(&raw_tables());
        for (name, parent) in [("a", "b"), ("b", "a")] {
            document.modules.insert(name.to_owned(), Module::new(name, Some(parent.to_owned())));
        }

        let err = document.into_tables().unwrap_err();
        assert!(matches!(err, ModuleTreeError::Cycle { .. }), "{err:?}");
    }

    #[test]
    fn document_keeps_the_wire_field_names() {
        let json = EditsDocument::from_tables(&raw_tables()).to_json().expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["rerun_level"], 0);
        assert_eq!(value["nodes"]["4160"]["name"], "parse_date");
        assert_eq!(value["nodes"]["4160"]["location"]["line_num"], 87);
        assert_eq!(value["modules"]["parse"]["parent"], "app");
    }

    #[test]
    fn schema_names_the_three_sections() {
        let schema = serde_json::to_value(EditsDocument::json_schema()).expect("schema");
        let properties = schema["properties"].as_object().expect("properties");
        for key in ["nodes", "modules", "rerun_level"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }
}
