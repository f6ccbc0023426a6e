// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory backend for explorer tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::model::fixtures::{mined_diagram, numbered_source, raw_tables, MAIN_C, PARSE_C};
use crate::model::{
    Address, FrameTimeMap, GeneralInfo, MinedDiagram, NodeId, NodeRecord, Occurrence, RawTables,
    TraceInfo, ViewSettings,
};
use crate::remote::{Endpoint, Transport, TransportError};

#[derive(Debug)]
pub(crate) struct ServerState {
    pub(crate) general: GeneralInfo,
    pub(crate) mined: MinedDiagram,
    pub(crate) raw: RawTables,
    pub(crate) settings: Value,
    pub(crate) sources: BTreeMap<String, String>,
    pub(crate) occurrences: BTreeMap<NodeId, Vec<Occurrence>>,
    pub(crate) graph_version: u64,
    /// Every raw-table write, in order.
    pub(crate) raw_writes: Vec<RawTables>,
    pub(crate) calls: Vec<Endpoint>,
    pub(crate) failing: BTreeSet<Endpoint>,
    /// Pending `current_graph` answers released by the test, oldest request first.
    pub(crate) graph_gates: VecDeque<oneshot::Receiver<u64>>,
    /// Pending `source_file` answers, released the same way.
    pub(crate) source_gates: VecDeque<oneshot::Receiver<()>>,
}

/// Shared handle: the test keeps one clone to inspect and steer the server.
#[derive(Debug, Clone)]
pub(crate) struct FakeBackend {
    state: Rc<RefCell<ServerState>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        let times = [(0, 1_000), (10, 1_500), (20, 2_250), (30, 4_000)].into_iter().collect();
        let mut occurrences = BTreeMap::new();
        occurrences.insert(
            NodeId::new(2),
            vec![
                Occurrence { frame_time: 10, addr: 0x1040, instance_of_addr: 0 },
                Occurrence { frame_time: 20, addr: 0x1040, instance_of_addr: 1 },
            ],
        );

        let state = ServerState {
            general: GeneralInfo {
                recording_dir: Some("/tmp/date_viewer.rec".to_owned()),
                traces: vec![TraceInfo { id: 0, frame_time_map: FrameTimeMap { times } }],
                extra: BTreeMap::new(),
            },
            mined: mined_diagram(),
            raw: raw_tables(),
            settings: json!({
                "selected_node_id": null,
                "show_unreachable_nodes": false,
                "layout_engine": "dot"
            }),
            sources: [(MAIN_C, numbered_source(40)), (PARSE_C, numbered_source(200))]
                .into_iter()
                .map(|(path, text)| (path.to_owned(), text))
                .collect(),
            occurrences,
            graph_version: 1,
            raw_writes: Vec::new(),
            calls: Vec::new(),
            failing: BTreeSet::new(),
            graph_gates: VecDeque::new(),
            source_gates: VecDeque::new(),
        };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    pub(crate) fn state(&self) -> std::cell::RefMut<'_, ServerState> {
        self.state.borrow_mut()
    }

    pub(crate) fn fail(&self, endpoint: Endpoint) {
        self.state().failing.insert(endpoint);
    }

    pub(crate) fn heal(&self, endpoint: Endpoint) {
        self.state().failing.remove(&endpoint);
    }

    /// Holds the next `current_graph` answer until the returned sender delivers its version.
    pub(crate) fn gate_next_graph(&self) -> oneshot::Sender<u64> {
        let (tx, rx) = oneshot::channel();
        self.state().graph_gates.push_back(rx);
        tx
    }

    /// Holds the next `source_file` answer until the returned sender fires.
    pub(crate) fn gate_next_source(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state().source_gates.push_back(rx);
        tx
    }

    pub(crate) fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.state.borrow().calls.iter().filter(|call| **call == endpoint).count()
    }

    pub(crate) fn settings(&self) -> ViewSettings {
        serde_json::from_value(self.state.borrow().settings.clone()).unwrap()
    }

    /// Stand-in for mining: mined ids are positions in address order, and every collapsed
    /// module contributes one placeholder node.
    fn remine(state: &mut ServerState) {
        let mut mined =
            MinedDiagram { modules: state.raw.modules.clone(), ..MinedDiagram::default() };
        let mut next_id = 1;
        for node in state.raw.nodes.values() {
            let hidden = node
                .module
                .as_ref()
                .and_then(|name| state.raw.modules.get(name))
                .is_some_and(|module| module.is_collapsed());
            if !hidden {
                mined.nodes.insert(NodeId::new(next_id), node.clone());
                next_id += 1;
            }
        }
        for module in state.raw.modules.values().filter(|module| module.is_collapsed()) {
            let placeholder = NodeRecord::new(module.name.clone(), Address::new(0))
                .with_module(module.name.clone());
            mined.nodes.insert(NodeId::new(next_id), placeholder);
            next_id += 1;
        }
        state.mined = mined;
        state.graph_version += 1;
    }

    fn answer(&self, endpoint: Endpoint, body: Value) -> Result<Value, TransportError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(endpoint);
        if state.failing.contains(&endpoint) {
            return Err(TransportError::Unreachable {
                endpoint,
                attempts: 5,
                reason: "connection refused".to_owned(),
            });
        }

        let encode = |value: Result<Value, serde_json::Error>| {
            value.map_err(|err| TransportError::Decode { endpoint, reason: err.to_string() })
        };
        match endpoint {
            Endpoint::GeneralInfo => encode(serde_json::to_value(&state.general)),
            Endpoint::NodeData => encode(serde_json::to_value(&state.mined)),
            Endpoint::GetRawNodesAndModules => encode(serde_json::to_value(&state.raw)),
            Endpoint::UpdateRawNodesAndModules => {
                let tables: RawTables = serde_json::from_value(body)
                    .map_err(|err| TransportError::Decode { endpoint, reason: err.to_string() })?;
                state.raw_writes.push(tables.clone());
                state.raw = tables;
                Self::remine(&mut state);
                Ok(Value::Null)
            }
            Endpoint::CurrentGraph => {
                let version = state.graph_version;
                Ok(json!({ "version": version, "dot": format!("digraph g{version} {{}}") }))
            }
            Endpoint::GetSettings => Ok(state.settings.clone()),
            Endpoint::SetSettings => {
                state.settings = body["settings"].clone();
                Ok(state.settings.clone())
            }
            Endpoint::SourceFile => {
                let file = body["file_name"].as_str().unwrap_or_default();
                match state.sources.get(file) {
                    Some(text) => Ok(json!({ "data": text })),
                    None => Err(TransportError::Status { endpoint, status: 404 }),
                }
            }
            Endpoint::SourceFiles => {
                Ok(json!({ "files": state.sources.keys().collect::<Vec<_>>() }))
            }
            Endpoint::AddrOccurrences => {
                let id = NodeId::new(body["synoptic_node_id"].as_u64().unwrap_or_default());
                let val = state.occurrences.get(&id).cloned().unwrap_or_default();
                Ok(json!({ "val": val }))
            }
            Endpoint::CreateGdbServer => {
                let start = body["start_time"].as_u64().unwrap_or_default();
                Ok(json!({ "value": format!("gdb -ex 'target remote :{}'", 5000 + start) }))
            }
        }
    }
}

impl Transport for FakeBackend {
    async fn exchange(&self, endpoint: Endpoint, body: Value) -> Result<Value, TransportError> {
        if endpoint == Endpoint::CurrentGraph {
            let gate = self.state.borrow_mut().graph_gates.pop_front();
            if let Some(gate) = gate {
                self.state.borrow_mut().calls.push(endpoint);
                let version = gate.await.unwrap_or_default();
                return Ok(json!({ "version": version, "dot": format!("digraph g{version} {{}}") }));
            }
        }
        if endpoint == Endpoint::SourceFile {
            let gate = self.state.borrow_mut().source_gates.pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
        self.answer(endpoint, body)
    }
}

/// Current-thread runtime for driving explorer futures in tests.
pub(crate) fn new_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}
