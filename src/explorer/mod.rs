// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One explorer session against one backend.
//!
//! All methods take `&self` so several interactions can be in flight on a single-threaded
//! executor. Interior state sits behind `RefCell`s that are never held across an `.await`;
//! the render generation check is the only ordering between overlapping interactions.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::ExplorerConfig;
use crate::model::selection::NO_FILE_SELECTED;
use crate::model::{Focus, GeneralInfo, MinedDiagram, NodeId, RawTables, Selection, ViewSettings};
use crate::remote::{Backend, Transport, TransportError};
use crate::render::{
    DiagramSurface, HeadlessSurface, InvalidationReason, RenderController, RenderedDiagram,
    StaleRenderDiscarded,
};
use crate::view::{Notices, SettingsStore, SourceLine, SourceWindow};

pub mod error;
pub mod instances;
pub mod mutate;
pub mod select;

#[cfg(test)]
pub(crate) mod testing;


pub use error::ExplorerError;
pub use instances::{build_timeline, Lane, LaneId, Timeline, TimelineEvent};
pub use mutate::{MutationOutcome, NodeEdit};
pub use select::SelectOutcome;

/// What happened to the diagram fetch started by one invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Applied { generation: u64, server_version: u64 },
    Discarded(StaleRenderDiscarded),
}

#[derive(Debug)]
struct SessionState {
    general: Option<GeneralInfo>,
    mined: Option<MinedDiagram>,
    raw: Option<RawTables>,
    source: SourceWindow,
    source_cache: BTreeMap<String, String>,
    notices: Notices,
}

pub struct Explorer<T, S = HeadlessSurface> {
    backend: Backend<T>,
    settings: SettingsStore,
    state: RefCell<SessionState>,
    render: RefCell<RenderController<S>>,
    focus: watch::Sender<Focus>,
}

impl<T: Transport> Explorer<T, HeadlessSurface> {
    pub fn new(transport: T, config: &ExplorerConfig) -> Self {
        Self::with_surface(transport, HeadlessSurface::default(), config)
    }
}

impl<T: Transport, S: DiagramSurface> Explorer<T, S> {
    pub fn with_surface(transport: T, surface: S, config: &ExplorerConfig) -> Self {
        let (focus, _) = watch::channel(Focus::default());
        Self {
            backend: Backend::new(transport),
            settings: SettingsStore::new(),
            state: RefCell::new(SessionState {
                general: None,
                mined: None,
                raw: None,
                source: SourceWindow::new(config.source_half_height),
                source_cache: BTreeMap::new(),
                notices: Notices::default(),
            }),
            render: RefCell::new(RenderController::new(surface)),
            focus,
        }
    }

    pub fn backend(&self) -> &Backend<T> {
        &self.backend
    }

    /// Loads everything the explorer cannot work without, then draws the first diagram.
    pub async fn mount(&self) -> Result<RenderOutcome, ExplorerError> {
        let general = self.track(self.backend.general_info().await)?;
        let mined = self.track(self.backend.node_data().await)?;
        let raw = self.track(self.backend.raw_tables().await)?;
        let settings = self.track(self.settings.fetch_settings(&self.backend).await)?;

        info!(
            "explorer mounted traces={} mined_nodes={} raw_nodes={} modules={}",
            general.traces.len(),
            mined.nodes.len(),
            raw.node_count(),
            raw.module_count()
        );
        debug!("initial settings selected_node_id={:?}", settings.selected_node_id);
        {
            let mut state = self.state.borrow_mut();
            state.general = Some(general);
            state.mined = Some(mined);
            state.raw = Some(raw);
        }

        self.render_pass(InvalidationReason::FirstMount).await
    }

    /// Re-fetches the diagram without any local change.
    pub async fn refresh(&self) -> Result<RenderOutcome, ExplorerError> {
        self.render_pass(InvalidationReason::ManualRefresh).await
    }

    pub async fn toggle_show_unreachable(&self) -> Result<RenderOutcome, ExplorerError> {
        let written = self.track(
            self.settings
                .commit_settings(&self.backend, |mut settings| {
                    settings.show_unreachable_nodes = !settings.show_unreachable_nodes;
                    settings
                })
                .await,
        )?;
        debug!("show_unreachable_nodes={}", written.show_unreachable_nodes);
        self.render_pass(InvalidationReason::SettingsCommitted).await
    }

    /// Opens a file picked directly in the source panel; no diagram entity is selected.
    pub async fn open_file(&self, file_path: &str) -> Focus {
        let focus = self.publish(Selection::at_source(file_path, 1), None);
        self.show_source(file_path).await;
        focus
    }

    pub async fn source_files(&self) -> Result<Vec<String>, ExplorerError> {
        self.track(self.backend.source_files().await)
    }

    /// Scrolls the source panel. Only modifier-qualified gestures move it; the selection
    /// never changes. Returns whether the gesture was consumed.
    pub fn on_source_scroll(&self, delta_lines: i64, modifier: bool) -> bool {
        if !modifier {
            return false;
        }
        self.state.borrow_mut().source.scroll(delta_lines);
        true
    }

    pub fn source_lines(&self) -> Vec<SourceLine> {
        self.state.borrow().source.visible_lines()
    }

    pub fn source_center_line(&self) -> usize {
        self.state.borrow().source.center_line()
    }

    pub fn subscribe(&self) -> watch::Receiver<Focus> {
        self.focus.subscribe()
    }

    pub fn focus(&self) -> Focus {
        self.focus.borrow().clone()
    }

    pub fn notices(&self) -> Ref<'_, Notices> {
        Ref::map(self.state.borrow(), |state| &state.notices)
    }

    pub fn drain_notices(&self) -> Vec<String> {
        self.state.borrow_mut().notices.drain()
    }

    pub fn general_info(&self) -> Option<GeneralInfo> {
        self.state.borrow().general.clone()
    }

    pub fn mined(&self) -> Option<MinedDiagram> {
        self.state.borrow().mined.clone()
    }

    pub fn raw_tables(&self) -> Option<RawTables> {
        self.state.borrow().raw.clone()
    }

    pub fn cached_settings(&self) -> Option<ViewSettings> {
        self.settings.cached()
    }

    pub fn rendered(&self) -> Option<RenderedDiagram> {
        self.render.borrow().current().cloned()
    }

    pub fn render_generation(&self) -> u64 {
        self.render.borrow().generation()
    }

    pub fn with_surface_ref<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.render.borrow().surface())
    }

    /// One invalidation, one fetch, one generation check at arrival.
    async fn render_pass(
        &self,
        reason: InvalidationReason,
    ) -> Result<RenderOutcome, ExplorerError> {
        let ticket = self.render.borrow_mut().invalidate(reason);
        let graph = self.track(self.backend.current_graph().await)?;

        let mut render = self.render.borrow_mut();
        match render.accept(ticket, graph) {
            Ok(diagram) => Ok(RenderOutcome::Applied {
                generation: diagram.generation(),
                server_version: diagram.server_version(),
            }),
            Err(stale) => {
                info!(
                    "render discarded ticket={} current={}",
                    stale.ticket_generation, stale.current_generation
                );
                Ok(RenderOutcome::Discarded(stale))
            }
        }
    }

    /// Replaces the focus as a whole and returns the published value.
    fn publish(&self, selection: Selection, instance_query: Option<NodeId>) -> Focus {
        self.focus.send_modify(|focus| *focus = focus.next(selection, instance_query));
        self.focus.borrow().clone()
    }

    /// Points the source panel at the focused line of `file_path`, fetching the file if needed.
    ///
    /// The line is read from the focus once the fetch is done, so a reply that arrives after a
    /// newer selection never drags the window back. A fetch that completes after the focus has
    /// moved to another file is dropped.
    async fn show_source(&self, file_path: &str) {
        if file_path == NO_FILE_SELECTED {
            return;
        }

        let needs_load = self.state.borrow().source.file_path() != file_path;
        if needs_load {
            let text = match self.source_text(file_path).await {
                Ok(text) => text,
                Err(err) => {
                    warn!("source fetch failed file={file_path} error={err}");
                    self.notify(format!("cannot load {file_path}: {err}"));
                    return;
                }
            };
            if self.focus.borrow().selection().file_path() != file_path {
                debug!("source load dropped file={file_path} reason=focus moved");
                return;
            }
            let mut state = self.state.borrow_mut();
            if state.source.file_path() != file_path {
                state.source.load(file_path, text);
            }
        }

        let line = self.focus.borrow().selection().line_number();
        self.state.borrow_mut().source.retarget(line);
    }

    async fn source_text(&self, file_path: &str) -> Result<String, TransportError> {
        if let Some(text) = self.state.borrow().source_cache.get(file_path) {
            return Ok(text.clone());
        }
        let text = self.backend.source_file(file_path).await?;
        self.state.borrow_mut().source_cache.insert(file_path.to_owned(), text.clone());
        Ok(text)
    }

    fn notify(&self, message: impl Into<String>) {
        self.state.borrow_mut().notices.push(message);
    }

    /// Records reachability: a failure raises the blocking indicator and keeps cached data,
    /// a success clears it.
    fn track<R>(&self, result: Result<R, TransportError>) -> Result<R, ExplorerError> {
        let mut state = self.state.borrow_mut();
        match result {
            Ok(value) => {
                state.notices.mark_reachable();
                Ok(value)
            }
            Err(err) => {
                warn!("backend request failed endpoint={} error={err}", err.endpoint());
                state.notices.mark_unreachable(err.clone());
                Err(ExplorerError::Transport(err))
            }
        }
    }
}
