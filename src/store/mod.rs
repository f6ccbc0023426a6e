// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Offline save and reload of node edits.
//!
//! An edits document is a snapshot of the raw node/module tables written as one JSON file.

pub mod document;
pub mod edits_file;

pub use document::EditsDocument;
pub use edits_file::{EditsFile, StoreError, WriteDurability};
