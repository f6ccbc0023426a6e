// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render invalidation for the server-rendered diagram.
//!
//! The service produces the diagram description; this module decides when to ask for a new one
//! and whether an arriving one may replace what is on screen.

pub mod controller;
pub mod surface;

pub use controller::{
    HandlerBinding, InvalidationReason, RenderController, RenderTicket, RenderedDiagram,
    StaleRenderDiscarded,
};
pub use surface::{DiagramSurface, HeadlessSurface};

#[cfg(test)]
mod tests;
