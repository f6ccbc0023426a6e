// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Explorant: client-side engine for browsing a mined execution trace.
//!
//! The engine keeps a diagram of synthesized nodes, the raw node/module tables they were mined
//! from, the user's selection, and a scrolling source panel consistent with each other while
//! every read and write goes through a remote trace service.

pub mod config;
pub mod explorer;
pub mod model;
pub mod ops;
pub mod remote;
pub mod render;
pub mod store;
pub mod view;
