// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{info, warn};

use super::{Explorer, ExplorerError, MutationOutcome, RenderOutcome};
use crate::model::{
    decode_cluster_label, Address, DiagramElementKey, ElementKind, Focus, NodeId, SourceLocation,
};
use crate::remote::Transport;
use crate::render::{DiagramSurface, InvalidationReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The focus moved; `render` is the follow-up diagram fetch.
    Selected { focus: Focus, render: RenderOutcome },
    /// A collapsed placeholder was clicked and its module's collapse flag flipped.
    ModuleToggled { module: String, outcome: MutationOutcome },
    /// The key names nothing in the current tables; nothing changed.
    Ignored,
}

impl<T: Transport, S: DiagramSurface> Explorer<T, S> {
    /// Click on a rendered node, identified by its element key.
    pub async fn on_element_click(&self, raw_key: &str) -> Result<SelectOutcome, ExplorerError> {
        match DiagramElementKey::decode(raw_key) {
            Ok(key) => self.select(key).await,
            Err(err) => {
                warn!("click ignored key={raw_key:?} error={err}");
                self.notify(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Click on a module cluster, identified by its rendered text.
    pub async fn on_cluster_click(&self, text: &str) -> Result<MutationOutcome, ExplorerError> {
        let module = match decode_cluster_label(text) {
            Ok(module) => module,
            Err(err) => {
                warn!("cluster click ignored error={err}");
                self.notify(err.to_string());
                return Err(err.into());
            }
        };
        self.toggle_module_collapsed(&module).await
    }

    /// Moves the focus to `key` and fans it out to every dependent panel.
    ///
    /// The selection's entity, file and line and the instance query change in one published
    /// update. The source panel follows, then the selected id is written to the server
    /// settings and the diagram is fetched again.
    pub async fn select(&self, key: DiagramElementKey) -> Result<SelectOutcome, ExplorerError> {
        if key.kind() == ElementKind::Collapsed {
            return self.select_collapsed(key).await;
        }

        let Some((location, instance_query)) = self.lookup(key)? else {
            info!("click ignored key={key} reason=unknown entity");
            return Ok(SelectOutcome::Ignored);
        };

        let selection = self.focus.borrow().selection().pointing_at(key, location.as_ref());
        let focus = self.publish(selection, instance_query);
        info!(
            "selected key={key} file={} line={} rev={}",
            focus.selection().file_path(),
            focus.selection().line_number(),
            focus.rev()
        );

        self.show_source(focus.selection().file_path()).await;

        let entity_id = key.entity_id();
        self.track(
            self.settings
                .commit_settings(&self.backend, |mut settings| {
                    settings.selected_node_id = Some(entity_id);
                    settings
                })
                .await,
        )?;

        let render = self.render_pass(InvalidationReason::SettingsCommitted).await?;
        Ok(SelectOutcome::Selected { focus, render })
    }

    /// Location and instance query of a raw or synthesized key; `None` when it names nothing.
    fn lookup(
        &self,
        key: DiagramElementKey,
    ) -> Result<Option<(Option<SourceLocation>, Option<NodeId>)>, ExplorerError> {
        let state = self.state.borrow();
        match key.kind() {
            ElementKind::Raw => {
                let raw = state.raw.as_ref().ok_or(ExplorerError::NotMounted)?;
                Ok(raw
                    .nodes
                    .get(&Address::new(key.entity_id()))
                    .map(|node| (node.location.clone(), None)))
            }
            ElementKind::Synthesized => {
                let mined = state.mined.as_ref().ok_or(ExplorerError::NotMounted)?;
                let id = NodeId::new(key.entity_id());
                Ok(mined.nodes.get(&id).map(|node| (node.location.clone(), Some(id))))
            }
            ElementKind::Collapsed => Ok(None),
        }
    }

    /// `C<n>`: mined node `n` is the placeholder of a collapsed module; expand it again.
    async fn select_collapsed(
        &self,
        key: DiagramElementKey,
    ) -> Result<SelectOutcome, ExplorerError> {
        let module = {
            let state = self.state.borrow();
            let mined = state.mined.as_ref().ok_or(ExplorerError::NotMounted)?;
            mined.nodes.get(&NodeId::new(key.entity_id())).and_then(|node| node.module.clone())
        };
        let Some(module) = module else {
            info!("click ignored key={key} reason=no module behind placeholder");
            return Ok(SelectOutcome::Ignored);
        };

        let outcome = self.toggle_module_collapsed(&module).await?;
        Ok(SelectOutcome::ModuleToggled { module, outcome })
    }
}
