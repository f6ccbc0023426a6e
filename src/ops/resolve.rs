// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Address, DiagramElementKey, ElementKind, MinedDiagram, NodeId, RawTables};

/// A node as the operator sees it, before its storage address is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Raw(Address),
    Synthesized(NodeId),
}

impl NodeRef {
    /// Collapsed keys name a module placeholder, not an editable node.
    pub fn from_key(key: DiagramElementKey) -> Option<Self> {
        match key.kind() {
            ElementKind::Raw => Some(Self::Raw(Address::new(key.entity_id()))),
            ElementKind::Synthesized => Some(Self::Synthesized(NodeId::new(key.entity_id()))),
            ElementKind::Collapsed => None,
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(addr) => write!(f, "U{addr}"),
            Self::Synthesized(id) => write!(f, "{id}"),
        }
    }
}

/// Maps a UI node reference to the address of the raw node backing it.
///
/// The mined id is never used as a storage key: a synthesized node is followed through its
/// recorded `addr`, and the result must still exist in `raw`.
pub fn resolve_address(
    node_ref: NodeRef,
    mined: &MinedDiagram,
    raw: &RawTables,
) -> Result<Address, UnresolvedAddressError> {
    let target = match node_ref {
        NodeRef::Raw(addr) => addr,
        NodeRef::Synthesized(id) => match mined.nodes.get(&id) {
            Some(node) => node.addr,
            None => {
                return Err(UnresolvedAddressError { node_ref, reason: UnresolvedReason::NotMined })
            }
        },
    };

    match raw.nodes.get(&target) {
        Some(node) => Ok(node.addr),
        None => Err(UnresolvedAddressError {
            node_ref,
            reason: UnresolvedReason::RawNodeMissing { addr: target },
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    NotMined,
    RawNodeMissing { addr: Address },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAddressError {
    node_ref: NodeRef,
    reason: UnresolvedReason,
}

impl UnresolvedAddressError {
    pub fn node_ref(&self) -> NodeRef {
        self.node_ref
    }

    pub fn reason(&self) -> UnresolvedReason {
        self.reason
    }
}

impl fmt::Display for UnresolvedAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            UnresolvedReason::NotMined => {
                write!(f, "node {} is not in the mined diagram", self.node_ref)
            }
            UnresolvedReason::RawNodeMissing { addr } => {
                write!(f, "node {} maps to raw addr={addr}, which no longer exists", self.node_ref)
            }
        }
    }
}

impl std::error::Error for UnresolvedAddressError {}
