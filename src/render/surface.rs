// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::controller::{HandlerBinding, RenderedDiagram};

/// Where rendered diagrams end up: the renderer collaborator plus its click wiring.
///
/// The controller always detaches before drawing and only attaches after a successful draw,
/// so an implementation never sees handlers bound to a diagram it is not showing.
pub trait DiagramSurface {
    fn detach_handlers(&mut self);
    fn draw(&mut self, diagram: &RenderedDiagram);
    fn attach_handlers(&mut self, binding: HandlerBinding);
}

/// Surface without a renderer: keeps the last drawn description and the handler state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSurface {
    drawn_generations: Vec<u64>,
    last_source: Option<String>,
    attached: Option<HandlerBinding>,
    detach_count: usize,
}

impl HeadlessSurface {
    pub fn drawn_generations(&self) -> &[u64] {
        &self.drawn_generations
    }

    pub fn last_source(&self) -> Option<&str> {
        self.last_source.as_deref()
    }

    pub fn attached(&self) -> Option<HandlerBinding> {
        self.attached
    }

    pub fn detach_count(&self) -> usize {
        self.detach_count
    }
}

impl DiagramSurface for HeadlessSurface {
    fn detach_handlers(&mut self) {
        if self.attached.take().is_some() {
            self.detach_count += 1;
        }
    }

    fn draw(&mut self, diagram: &RenderedDiagram) {
        self.drawn_generations.push(diagram.generation());
        self.last_source = Some(diagram.source_description().to_owned());
    }

    fn attach_handlers(&mut self, binding: HandlerBinding) {
        self.attached = Some(binding);
    }
}
