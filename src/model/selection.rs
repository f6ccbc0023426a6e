// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection state shared between the diagram, source and execution-instance panels.
//!
//! The whole focus is replaced as one value, so a subscriber never pairs the new file with the
//! old line or the new node with the old instance query.

use super::element_key::DiagramElementKey;
use super::ids::NodeId;
use super::node::SourceLocation;

pub const NO_FILE_SELECTED: &str = "[none selected]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entity_reference: Option<DiagramElementKey>,
    file_path: String,
    line_number: u64,
}

impl Default for Selection {
    fn default() -> Self {
        Self { entity_reference: None, file_path: NO_FILE_SELECTED.to_owned(), line_number: 1 }
    }
}

impl Selection {
    pub fn entity_reference(&self) -> Option<&DiagramElementKey> {
        self.entity_reference.as_ref()
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Selection of `key`, positioned at `location` when the entity has one.
    ///
    /// Without a location the previous file/line stay in place.
    pub fn pointing_at(&self, key: DiagramElementKey, location: Option<&SourceLocation>) -> Self {
        match location {
            Some(location) => Self {
                entity_reference: Some(key),
                file_path: location.file.clone(),
                line_number: location.line_num,
            },
            None => Self {
                entity_reference: Some(key),
                file_path: self.file_path.clone(),
                line_number: self.line_number,
            },
        }
    }

    /// Same source position with no entity selected.
    pub fn cleared(&self) -> Self {
        Self {
            entity_reference: None,
            file_path: self.file_path.clone(),
            line_number: self.line_number,
        }
    }

    /// Source position chosen directly (file picker), with no entity selected.
    pub fn at_source(file_path: impl Into<String>, line_number: u64) -> Self {
        Self { entity_reference: None, file_path: file_path.into(), line_number }
    }
}

/// Everything a selection fans out to, published as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Focus {
    rev: u64,
    selection: Selection,
    instance_query: Option<NodeId>,
}

impl Focus {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mined node whose execution instances should be listed.
    pub fn instance_query(&self) -> Option<NodeId> {
        self.instance_query
    }

    /// Builds the successor focus; unchanged input keeps the revision.
    pub fn next(&self, selection: Selection, instance_query: Option<NodeId>) -> Self {
        if self.selection == selection && self.instance_query == instance_query {
            return self.clone();
        }
        Self { rev: self.rev.wrapping_add(1), selection, instance_query }
    }
}
