// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client-side view state: the source panel window, the settings cache and operator notices.

pub mod notices;
pub mod settings_store;
pub mod source_window;

pub use notices::{Notices, BACKEND_UNREACHABLE_MESSAGE};
pub use settings_store::SettingsStore;
pub use source_window::{SourceLine, SourceWindow};
