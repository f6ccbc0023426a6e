// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Which table a rendered diagram element points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// Unprocessed trace node, keyed by storage address. Wire prefix `U`.
    Raw,
    /// Collapsed module cluster drawn as a single node. Wire prefix `C`.
    Collapsed,
    /// Node of the mined diagram, keyed by its diagram id. No prefix.
    Synthesized,
}

impl ElementKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Raw => "U",
            Self::Collapsed => "C",
            Self::Synthesized => "",
        }
    }
}

/// Typed identity of a clicked diagram element.
///
/// The rendering service is not entity-aware, so it folds the kind into the element key:
/// `U<n>`, `C<n>` or bare `<n>`. Decoding happens once at the click boundary; nothing past
/// this type sees the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagramElementKey {
    kind: ElementKind,
    entity_id: u64,
}

impl DiagramElementKey {
    pub const fn new(kind: ElementKind, entity_id: u64) -> Self {
        Self { kind, entity_id }
    }

    pub const fn raw(entity_id: u64) -> Self {
        Self::new(ElementKind::Raw, entity_id)
    }

    pub const fn collapsed(entity_id: u64) -> Self {
        Self::new(ElementKind::Collapsed, entity_id)
    }

    pub const fn synthesized(entity_id: u64) -> Self {
        Self::new(ElementKind::Synthesized, entity_id)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn entity_id(&self) -> u64 {
        self.entity_id
    }

    /// Decodes `[UC]?<digits>`.
    pub fn decode(raw_key: &str) -> Result<Self, MalformedKeyError> {
        let (kind, digits) = match raw_key.as_bytes().first() {
            Some(b'U') => (ElementKind::Raw, &raw_key[1..]),
            Some(b'C') => (ElementKind::Collapsed, &raw_key[1..]),
            Some(b) if b.is_ascii_digit() => (ElementKind::Synthesized, raw_key),
            Some(_) => return Err(MalformedKeyError::new(raw_key, KeyDefect::UnknownPrefix)),
            None => return Err(MalformedKeyError::new(raw_key, KeyDefect::Empty)),
        };

        if digits.is_empty() {
            return Err(MalformedKeyError::new(raw_key, KeyDefect::MissingDigits));
        }
        // `u64::from_str` accepts a leading `+`; the grammar does not.
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MalformedKeyError::new(raw_key, KeyDefect::NonDigit));
        }
        let entity_id = digits
            .parse::<u64>()
            .map_err(|_| MalformedKeyError::new(raw_key, KeyDefect::Overflow))?;

        Ok(Self { kind, entity_id })
    }
}

impl fmt::Display for DiagramElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.prefix())?;
        f.write_str(itoa::Buffer::new().format(self.entity_id))
    }
}

impl FromStr for DiagramElementKey {
    type Err = MalformedKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefect {
    Empty,
    UnknownPrefix,
    MissingDigits,
    NonDigit,
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedKeyError {
    key: String,
    defect: KeyDefect,
}

impl MalformedKeyError {
    fn new(key: &str, defect: KeyDefect) -> Self {
        Self { key: key.to_owned(), defect }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn defect(&self) -> KeyDefect {
        self.defect
    }
}

impl fmt::Display for MalformedKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.defect {
            KeyDefect::Empty => "key is empty",
            KeyDefect::UnknownPrefix => "key must start with 'U', 'C' or a digit",
            KeyDefect::MissingDigits => "key has no numeric id",
            KeyDefect::NonDigit => "key id must be decimal digits only",
            KeyDefect::Overflow => "key id does not fit in 64 bits",
        };
        write!(f, "malformed diagram element key '{}': {reason}", self.key)
    }
}

impl std::error::Error for MalformedKeyError {}

/// Line of a cluster's rendered text block that carries the module name.
///
/// Line 0 is the cluster's graph id (`cluster_<n>`); the label follows it.
pub const CLUSTER_LABEL_LINE: usize = 1;

/// Extracts the module name from the rendered text of a module cluster.
pub fn decode_cluster_label(text: &str) -> Result<String, MalformedClusterLabelError> {
    let mut lines = text.lines();
    match lines.nth(CLUSTER_LABEL_LINE) {
        Some(line) => Ok(line.trim().to_owned()),
        None => Err(MalformedClusterLabelError { lines: text.lines().count() }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedClusterLabelError {
    lines: usize,
}

impl MalformedClusterLabelError {
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl fmt::Display for MalformedClusterLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cluster text has {} line(s); module label expected on line {}",
            self.lines,
            CLUSTER_LABEL_LINE + 1
        )
    }
}

impl std::error::Error for MalformedClusterLabelError {}
