// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Execution instances of the focused node and their placement on the trace timeline.

use std::collections::BTreeSet;

use tracing::info;

use super::{Explorer, ExplorerError};
use crate::model::{GeneralInfo, NodeId, Occurrence};
use crate::remote::Transport;
use crate::render::DiagramSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneId {
    /// Whole-program span of one trace.
    Execution(u64),
    Instances,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub id: LaneId,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub lane: LaneId,
    pub start_ms: u64,
    /// Only trace spans have an end; instances are points.
    pub end_ms: Option<u64>,
    /// Frame time of an instance event.
    pub frame_time: Option<u64>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    pub lanes: Vec<Lane>,
    pub events: Vec<TimelineEvent>,
}

/// Lays out one span per trace and one point per distinct instance frame time.
///
/// Instance clock times come from the first trace's frame time map. The hovered instance,
/// and any other instance at the same clock time, is emitted once, last, highlighted.
pub fn build_timeline(
    general: &GeneralInfo,
    occurrences: &[Occurrence],
    hovered_frame_time: Option<u64>,
) -> Timeline {
    let mut timeline = Timeline::default();

    for trace in &general.traces {
        let lane = LaneId::Execution(trace.id);
        timeline.lanes.push(Lane { id: lane, label: "Program execution" });
        if let Some((start_ms, end_ms)) = trace.frame_time_map.span_ms() {
            timeline.events.push(TimelineEvent {
                lane,
                start_ms,
                end_ms: Some(end_ms),
                frame_time: None,
                highlighted: false,
            });
        }
    }
    timeline.lanes.push(Lane { id: LaneId::Instances, label: "Event instances" });

    let Some(clock) = general.traces.first().map(|trace| &trace.frame_time_map) else {
        return timeline;
    };
    let hovered = hovered_frame_time.and_then(|ft| clock.clock_ms(ft).map(|ms| (ft, ms)));

    let mut seen = BTreeSet::new();
    for occurrence in occurrences {
        if !seen.insert(occurrence.frame_time) {
            continue;
        }
        let Some(start_ms) = clock.clock_ms(occurrence.frame_time) else {
            continue;
        };
        if hovered.is_some_and(|(_, hovered_ms)| hovered_ms == start_ms) {
            continue;
        }
        timeline.events.push(TimelineEvent {
            lane: LaneId::Instances,
            start_ms,
            end_ms: None,
            frame_time: Some(occurrence.frame_time),
            highlighted: false,
        });
    }

    if let Some((frame_time, start_ms)) = hovered {
        timeline.events.push(TimelineEvent {
            lane: LaneId::Instances,
            start_ms,
            end_ms: None,
            frame_time: Some(frame_time),
            highlighted: true,
        });
    }
    timeline
}

impl<T: Transport, S: DiagramSurface> Explorer<T, S> {
    /// Node whose instances the instance panel lists.
    pub fn instance_query(&self) -> Option<NodeId> {
        self.focus.borrow().instance_query()
    }

    /// Executions of the focused synthesized node; empty when nothing or a raw node is focused.
    pub async fn instances(&self) -> Result<Vec<Occurrence>, ExplorerError> {
        let Some(node_id) = self.instance_query() else {
            return Ok(Vec::new());
        };
        self.instances_of(node_id).await
    }

    pub async fn instances_of(&self, node_id: NodeId) -> Result<Vec<Occurrence>, ExplorerError> {
        let occurrences = self.track(self.backend.addr_occurrences(node_id).await)?;
        info!("instances loaded node={node_id} count={}", occurrences.len());
        Ok(occurrences)
    }

    pub fn timeline(
        &self,
        occurrences: &[Occurrence],
        hovered_frame_time: Option<u64>,
    ) -> Option<Timeline> {
        let state = self.state.borrow();
        let general = state.general.as_ref()?;
        Some(build_timeline(general, occurrences, hovered_frame_time))
    }

    /// Starts a gdb server positioned at `frame_time`; returns the command that attaches to it.
    pub async fn gdb_command(&self, frame_time: u64) -> Result<String, ExplorerError> {
        let command = self.track(self.backend.create_gdb_server(frame_time).await)?;
        info!("gdb server requested frame_time={frame_time}");
        Ok(command)
    }
}
