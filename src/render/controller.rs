// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use tracing::debug;

use super::surface::DiagramSurface;
use crate::remote::CurrentGraph;

/// Why a fresh render was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidationReason {
    FirstMount,
    TablesChanged,
    SettingsCommitted,
    ManualRefresh,
}

/// Tag carried by one in-flight diagram fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
    reason: InvalidationReason,
}

impl RenderTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reason(&self) -> InvalidationReason {
        self.reason
    }
}

/// A diagram that passed the generation check and is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    generation: u64,
    server_version: u64,
    source_description: String,
}

impl RenderedDiagram {
    /// Client-side generation the fetch was tagged with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Version reported by the service; informational only.
    pub fn server_version(&self) -> u64 {
        self.server_version
    }

    pub fn source_description(&self) -> &str {
        &self.source_description
    }
}

/// Click wiring for one applied diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerBinding {
    id: u64,
    generation: u64,
}

impl HandlerBinding {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A response whose ticket is older than the controller's current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleRenderDiscarded {
    pub ticket_generation: u64,
    pub current_generation: u64,
}

impl fmt::Display for StaleRenderDiscarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discarded render for generation {} (current generation {})",
            self.ticket_generation, self.current_generation
        )
    }
}

/// Decides which diagram responses reach the surface.
///
/// Every invalidation bumps `generation` and hands out a ticket for exactly one fetch. A
/// response is applied only if its ticket matches the generation at arrival time, so
/// overlapping fetches resolving out of order can never leave an older diagram on screen.
#[derive(Debug)]
pub struct RenderController<S> {
    generation: u64,
    current: Option<RenderedDiagram>,
    binding: Option<HandlerBinding>,
    next_binding_id: u64,
    surface: S,
}

impl<S: DiagramSurface> RenderController<S> {
    pub fn new(surface: S) -> Self {
        Self { generation: 0, current: None, binding: None, next_binding_id: 0, surface }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<&RenderedDiagram> {
        self.current.as_ref()
    }

    pub fn binding(&self) -> Option<HandlerBinding> {
        self.binding
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn invalidate(&mut self, reason: InvalidationReason) -> RenderTicket {
        self.generation = self.generation.wrapping_add(1);
        debug!("render invalidated generation={} reason={reason:?}", self.generation);
        RenderTicket { generation: self.generation, reason }
    }

    pub fn accept(
        &mut self,
        ticket: RenderTicket,
        graph: CurrentGraph,
    ) -> Result<&RenderedDiagram, StaleRenderDiscarded> {
        if ticket.generation != self.generation {
            debug!(
                "stale render discarded ticket={} current={}",
                ticket.generation, self.generation
            );
            return Err(StaleRenderDiscarded {
                ticket_generation: ticket.generation,
                current_generation: self.generation,
            });
        }

        if self.binding.take().is_some() {
            self.surface.detach_handlers();
        }

        let diagram = RenderedDiagram {
            generation: ticket.generation,
            server_version: graph.version,
            source_description: graph.dot,
        };
        self.surface.draw(&diagram);

        let binding = HandlerBinding { id: self.next_binding_id, generation: ticket.generation };
        self.next_binding_id = self.next_binding_id.wrapping_add(1);
        self.surface.attach_handlers(binding);
        self.binding = Some(binding);

        Ok(self.current.insert(diagram))
    }
}
