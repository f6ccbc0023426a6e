// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on the raw node/module tables.
//!
//! Operations address nodes by resolved storage address, never by the id the diagram shows.
//! They are applied to a working copy and committed all-or-nothing, and each carries the
//! rerun level the remote pipeline needs after it.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::module::{check_acyclic, ModuleTreeError};
use crate::model::{Address, Module, NodeRecord, NodeType, RawTables, RerunLevel};

pub mod resolve;

pub use resolve::{resolve_address, NodeRef, UnresolvedAddressError, UnresolvedReason};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Node(NodeOp),
    Module(ModuleOp),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeOp {
    Add { record: NodeRecord },
    Rename { addr: Address, name: String },
    ReassignModule { addr: Address, module: Option<String> },
    RelocateLine { addr: Address, line_num: u64 },
    SetType { addr: Address, node_type: NodeType },
    Delete { addr: Address },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOp {
    /// Inserts the module or re-parents an existing one; attributes are kept.
    Upsert { name: String, parent: Option<String> },
    ToggleCollapsed { name: String },
}

impl Op {
    /// Earliest pipeline stage this op invalidates.
    pub fn rerun_level(&self) -> RerunLevel {
        match self {
            Self::Node(NodeOp::ReassignModule { .. }) => RerunLevel::ModuleTopology,
            Self::Node(_) => RerunLevel::Metadata,
            Self::Module(ModuleOp::Upsert { .. }) => RerunLevel::ModuleTopology,
            Self::Module(ModuleOp::ToggleCollapsed { .. }) => RerunLevel::ViewOnly,
        }
    }
}

/// Lower levels restart the pipeline earlier, so a batch needs the lowest level it contains.
pub fn batch_rerun_level(ops: &[Op]) -> RerunLevel {
    ops.iter().map(Op::rerun_level).min().unwrap_or(RerunLevel::ViewOnly)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    Node(Address),
    Module(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub applied: usize,
    pub rerun_level: RerunLevel,
    pub delta: Delta,
}

/// Which entities changed as the result of applying ops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityRef>,
    pub removed: Vec<EntityRef>,
    pub updated: Vec<EntityRef>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<EntityRef>,
    removed: BTreeSet<EntityRef>,
    updated: BTreeSet<EntityRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity: EntityRef) {
        self.removed.remove(&entity);
        self.updated.remove(&entity);
        self.added.insert(entity);
    }

    fn record_removed(&mut self, entity: EntityRef) {
        let was_added = self.added.remove(&entity);
        self.updated.remove(&entity);
        if !was_added {
            self.removed.insert(entity);
        }
    }

    fn record_updated(&mut self, entity: EntityRef) {
        if self.added.contains(&entity) || self.removed.contains(&entity) {
            return;
        }
        self.updated.insert(entity);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

pub fn apply_ops(tables: &mut RawTables, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
    if ops.is_empty() {
        return Ok(ApplyResult {
            applied: 0,
            rerun_level: tables.rerun_level,
            delta: Delta::default(),
        });
    }

    let mut working = tables.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Node(node_op) => apply_node_op(&mut working, node_op, &mut delta)?,
            Op::Module(module_op) => apply_module_op(&mut working, module_op, &mut delta)?,
        }
    }
    check_acyclic(&working.modules).map_err(ApplyError::Module)?;

    let rerun_level = batch_rerun_level(ops);
    working.rerun_level = rerun_level;
    *tables = working;

    Ok(ApplyResult { applied: ops.len(), rerun_level, delta: delta.finish() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    NodeNotFound { addr: Address },
    NodeExists { addr: Address },
    /// The node has no source location to move.
    NoLocation { addr: Address },
    ModuleNotFound { name: String },
    Module(ModuleTreeError),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound { addr } => write!(f, "raw node not found (addr={addr})"),
            Self::NodeExists { addr } => write!(f, "raw node already exists (addr={addr})"),
            Self::NoLocation { addr } => write!(f, "raw node has no source location (addr={addr})"),
            Self::ModuleNotFound { name } => write!(f, "module not found ('{name}')"),
            Self::Module(err) => write!(f, "invalid module change: {err}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Module(err) => Some(err),
            _ => None,
        }
    }
}

// Per-op application helpers used by `apply_ops`.
include!("ops_impl.rs");
