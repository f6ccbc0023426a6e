// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frame time (trace-local tick) to wall-clock milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTimeMap {
    #[serde(default)]
    pub times: BTreeMap<u64, u64>,
}

impl FrameTimeMap {
    pub fn clock_ms(&self, frame_time: u64) -> Option<u64> {
        self.times.get(&frame_time).copied()
    }

    /// Clock times of the first and last recorded frames.
    pub fn span_ms(&self) -> Option<(u64, u64)> {
        let (_, first) = self.times.first_key_value()?;
        let (_, last) = self.times.last_key_value()?;
        Some((*first, *last))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceInfo {
    pub id: u64,
    #[serde(default)]
    pub frame_time_map: FrameTimeMap,
}

/// Session metadata returned by `general_info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub recording_dir: Option<String>,
    #[serde(default)]
    pub traces: Vec<TraceInfo>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One execution of a mined node inside the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub frame_time: u64,
    pub addr: u64,
    pub instance_of_addr: u64,
}
