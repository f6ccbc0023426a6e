// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use crate::remote::TransportError;

pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "General and node data did not load. Did the backend crash? Retrying...";

const MAX_TRANSIENT: usize = 32;

/// What the operator is told about failed interactions.
///
/// Transient notices report a single ignored interaction. The blocking indicator is raised
/// when data the explorer cannot work without failed to load, and stays up until the next
/// successful load.
#[derive(Debug, Default)]
pub struct Notices {
    transient: VecDeque<String>,
    unreachable: Option<TransportError>,
}

impl Notices {
    pub fn push(&mut self, message: impl Into<String>) {
        if self.transient.len() == MAX_TRANSIENT {
            self.transient.pop_front();
        }
        self.transient.push_back(message.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        self.transient.drain(..).collect()
    }

    pub fn transient(&self) -> impl Iterator<Item = &str> {
        self.transient.iter().map(String::as_str)
    }

    pub fn mark_unreachable(&mut self, err: TransportError) {
        self.unreachable = Some(err);
    }

    pub fn mark_reachable(&mut self) {
        self.unreachable = None;
    }

    pub fn backend_unreachable(&self) -> Option<&TransportError> {
        self.unreachable.as_ref()
    }

    pub fn blocking_message(&self) -> Option<&'static str> {
        self.unreachable.as_ref().map(|_| BACKEND_UNREACHABLE_MESSAGE)
    }
}
