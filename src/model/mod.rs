// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Node/module tables as the remote service stores them, the server-held view settings, the
//! decoded identity of rendered diagram elements, and the local selection state.

pub mod element_key;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod module;
pub mod node;
pub mod selection;
pub mod settings;
pub mod tables;
pub mod trace;

pub use element_key::{
    decode_cluster_label, DiagramElementKey, ElementKind, KeyDefect, MalformedClusterLabelError,
    MalformedKeyError, CLUSTER_LABEL_LINE,
};
pub use ids::{Address, Id, NodeId};
pub use module::{Module, ModuleMap, ModuleTreeError};
pub use node::{NodeRecord, NodeType, SourceLocation};
pub use selection::{Focus, Selection};
pub use settings::ViewSettings;
pub use tables::{MinedDiagram, RawTables, RerunLevel};
pub use trace::{FrameTimeMap, GeneralInfo, Occurrence, TraceInfo};
