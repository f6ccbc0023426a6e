// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{NodeId, Occurrence, ViewSettings};

/// Every request the remote service answers. Each maps to one POST path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    GeneralInfo,
    NodeData,
    GetRawNodesAndModules,
    UpdateRawNodesAndModules,
    CurrentGraph,
    GetSettings,
    SetSettings,
    SourceFile,
    SourceFiles,
    AddrOccurrences,
    CreateGdbServer,
}

impl Endpoint {
    pub const ALL: [Endpoint; 11] = [
        Self::GeneralInfo,
        Self::NodeData,
        Self::GetRawNodesAndModules,
        Self::UpdateRawNodesAndModules,
        Self::CurrentGraph,
        Self::GetSettings,
        Self::SetSettings,
        Self::SourceFile,
        Self::SourceFiles,
        Self::AddrOccurrences,
        Self::CreateGdbServer,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::GeneralInfo => "general_info",
            Self::NodeData => "node_data",
            Self::GetRawNodesAndModules => "get_raw_nodes_and_modules",
            Self::UpdateRawNodesAndModules => "update_raw_nodes_and_modules",
            Self::CurrentGraph => "current_graph",
            Self::GetSettings => "get_settings",
            Self::SetSettings => "set_settings",
            Self::SourceFile => "source_file",
            Self::SourceFiles => "source_files",
            Self::AddrOccurrences => "addr_occurrences",
            Self::CreateGdbServer => "create_gdb_server",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|endpoint| endpoint.path() == path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyRequest {}

/// Current rendering of the mined diagram as an opaque description for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentGraph {
    pub version: u64,
    pub dot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub settings: ViewSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileRequest {
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileResponse {
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFilesResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddrOccurrencesRequest {
    pub synoptic_node_id: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddrOccurrencesResponse {
    pub val: Vec<Occurrence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdbServerRequest {
    pub start_time: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdbServerResponse {
    pub value: String,
}
