// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{MalformedClusterLabelError, MalformedKeyError, ModuleTreeError};
use crate::ops::{ApplyError, UnresolvedAddressError};
use crate::remote::TransportError;
use crate::store::StoreError;

/// Failure of one explorer interaction. The interaction stops at the failing stage.
#[derive(Debug)]
pub enum ExplorerError {
    /// Tables were needed before the first successful `mount`.
    NotMounted,
    MalformedKey(MalformedKeyError),
    MalformedClusterLabel(MalformedClusterLabelError),
    Unresolved(UnresolvedAddressError),
    Apply(ApplyError),
    /// An imported module tree is not a tree.
    ModuleTree(ModuleTreeError),
    Transport(TransportError),
    Store(StoreError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMounted => f.write_str("explorer has not loaded the node tables yet"),
            Self::MalformedKey(err) => write!(f, "{err}"),
            Self::MalformedClusterLabel(err) => write!(f, "{err}"),
            Self::Unresolved(err) => write!(f, "{err}"),
            Self::Apply(err) => write!(f, "{err}"),
            Self::ModuleTree(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotMounted => None,
            Self::MalformedKey(err) => Some(err),
            Self::MalformedClusterLabel(err) => Some(err),
            Self::Unresolved(err) => Some(err),
            Self::Apply(err) => Some(err),
            Self::ModuleTree(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<MalformedKeyError> for ExplorerError {
    fn from(err: MalformedKeyError) -> Self {
        Self::MalformedKey(err)
    }
}

impl From<MalformedClusterLabelError> for ExplorerError {
    fn from(err: MalformedClusterLabelError) -> Self {
        Self::MalformedClusterLabel(err)
    }
}

impl From<UnresolvedAddressError> for ExplorerError {
    fn from(err: UnresolvedAddressError) -> Self {
        Self::Unresolved(err)
    }
}

impl From<ApplyError> for ExplorerError {
    fn from(err: ApplyError) -> Self {
        Self::Apply(err)
    }
}

impl From<ModuleTreeError> for ExplorerError {
    fn from(err: ModuleTreeError) -> Self {
        Self::ModuleTree(err)
    }
}

impl From<TransportError> for ExplorerError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<StoreError> for ExplorerError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
