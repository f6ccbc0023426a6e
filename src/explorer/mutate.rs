// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::info;

use super::{Explorer, ExplorerError, RenderOutcome};
use crate::model::module::complete;
use crate::model::{MinedDiagram, NodeRecord, NodeType, RawTables, Selection};
use crate::ops::{apply_ops, resolve_address, ApplyResult, ModuleOp, NodeOp, NodeRef, Op};
use crate::remote::Transport;
use crate::render::{DiagramSurface, InvalidationReason};
use crate::store::{EditsDocument, EditsFile};

/// An edit of one existing node, before its storage address is known.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEdit {
    Rename(String),
    ReassignModule(Option<String>),
    RelocateLine(u64),
    SetType(NodeType),
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub applied: ApplyResult,
    pub render: RenderOutcome,
}

impl<T: Transport, S: DiagramSurface> Explorer<T, S> {
    /// Edits the raw node behind `node_ref`; the edit is never keyed by a mined id.
    pub async fn edit_node(
        &self,
        node_ref: NodeRef,
        edit: NodeEdit,
    ) -> Result<MutationOutcome, ExplorerError> {
        self.commit_ops(true, move |raw, mined| {
            let addr = resolve_address(node_ref, mined, raw)?;
            let op = match edit {
                NodeEdit::Rename(name) => NodeOp::Rename { addr, name },
                NodeEdit::ReassignModule(module) => NodeOp::ReassignModule { addr, module },
                NodeEdit::RelocateLine(line_num) => NodeOp::RelocateLine { addr, line_num },
                NodeEdit::SetType(node_type) => NodeOp::SetType { addr, node_type },
                NodeEdit::Delete => NodeOp::Delete { addr },
            };
            Ok(vec![Op::Node(op)])
        })
        .await
    }

    pub async fn add_node(&self, record: NodeRecord) -> Result<MutationOutcome, ExplorerError> {
        self.commit_ops(true, move |_, _| Ok(vec![Op::Node(NodeOp::Add { record })])).await
    }

    /// Creates `name` or moves it under `parent`.
    pub async fn upsert_module(
        &self,
        name: &str,
        parent: Option<&str>,
    ) -> Result<MutationOutcome, ExplorerError> {
        let op = ModuleOp::Upsert { name: name.to_owned(), parent: parent.map(str::to_owned) };
        self.commit_ops(true, move |_, _| Ok(vec![Op::Module(op)])).await
    }

    /// Flips the collapse flag of `name` as stored on the server right now. The selection is
    /// left alone.
    pub async fn toggle_module_collapsed(
        &self,
        name: &str,
    ) -> Result<MutationOutcome, ExplorerError> {
        let op = ModuleOp::ToggleCollapsed { name: name.to_owned() };
        self.commit_ops(false, move |_, _| Ok(vec![Op::Module(op)])).await
    }

    /// Module names matching a partially typed one, for the module editor.
    pub fn complete_module(&self, input: &str, limit: usize) -> Vec<String> {
        let state = self.state.borrow();
        let Some(raw) = state.raw.as_ref() else {
            return Vec::new();
        };
        complete(&raw.modules, input, limit).into_iter().map(str::to_owned).collect()
    }

    /// Saves the server's current raw tables to `file`.
    pub async fn export_edits(&self, file: &EditsFile) -> Result<EditsDocument, ExplorerError> {
        let raw = self.track(self.backend.raw_tables().await)?;
        let document = EditsDocument::from_tables(&raw);
        file.save(&document)?;
        info!(
            "edits exported path={:?} nodes={} modules={}",
            file.path(),
            document.nodes.len(),
            document.modules.len()
        );
        Ok(document)
    }

    /// Replaces the server's raw tables with `file`, forcing a full re-mine.
    pub async fn import_edits(&self, file: &EditsFile) -> Result<RenderOutcome, ExplorerError> {
        let tables = file.load()?.into_tables()?;
        self.track(self.backend.update_raw_tables(&tables).await)?;
        let mined = self.track(self.backend.node_data().await)?;
        info!(
            "edits imported path={:?} nodes={} rerun_level={:?}",
            file.path(),
            tables.node_count(),
            tables.rerun_level
        );
        self.replace_tables(tables, mined);
        self.clear_selection();
        self.render_pass(InvalidationReason::TablesChanged).await
    }

    /// Read raw tables, build and apply ops, write back, re-read the mined table, swap
    /// caches, render. Each stage runs only after the previous one succeeded, and nothing
    /// local changes unless every remote stage did.
    async fn commit_ops<F>(
        &self,
        clear_selection: bool,
        build: F,
    ) -> Result<MutationOutcome, ExplorerError>
    where
        F: FnOnce(&RawTables, &MinedDiagram) -> Result<Vec<Op>, ExplorerError>,
    {
        let mut raw = self.track(self.backend.raw_tables().await)?;
        let ops = {
            let state = self.state.borrow();
            let mined = state.mined.as_ref().ok_or(ExplorerError::NotMounted)?;
            build(&raw, mined)?
        };

        let applied = apply_ops(&mut raw, &ops)?;
        self.track(self.backend.update_raw_tables(&raw).await)?;
        let mined = self.track(self.backend.node_data().await)?;

        info!(
            "mutation committed ops={} rerun_level={:?} added={} removed={} updated={}",
            applied.applied,
            applied.rerun_level,
            applied.delta.added.len(),
            applied.delta.removed.len(),
            applied.delta.updated.len()
        );
        self.replace_tables(raw, mined);
        if clear_selection {
            self.clear_selection();
        }

        let render = self.render_pass(InvalidationReason::TablesChanged).await?;
        Ok(MutationOutcome { applied, render })
    }

    fn replace_tables(&self, raw: RawTables, mined: MinedDiagram) {
        let mut state = self.state.borrow_mut();
        state.raw = Some(raw);
        state.mined = Some(mined);
    }

    fn clear_selection(&self) {
        let selection: Selection = self.focus.borrow().selection().cleared();
        self.publish(selection, None);
    }
}
