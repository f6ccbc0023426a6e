// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::transport::{Transport, TransportError};
use super::types::{
    AddrOccurrencesRequest, AddrOccurrencesResponse, CurrentGraph, EmptyRequest, Endpoint,
    GdbServerRequest, GdbServerResponse, SettingsRequest, SourceFileRequest, SourceFileResponse,
    SourceFilesResponse,
};
use crate::model::{GeneralInfo, MinedDiagram, NodeId, Occurrence, RawTables, ViewSettings};

/// Typed view of the remote contract over any [`Transport`].
#[derive(Debug, Clone)]
pub struct Backend<T> {
    transport: T,
}

impl<T: Transport> Backend<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<Req, Resp>(
        &self,
        endpoint: Endpoint,
        request: &Req,
    ) -> Result<Resp, TransportError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request)
            .map_err(|err| TransportError::Encode { endpoint, reason: err.to_string() })?;
        let response = self.transport.exchange(endpoint, body).await?;
        serde_json::from_value(response)
            .map_err(|err| TransportError::Decode { endpoint, reason: err.to_string() })
    }

    pub async fn general_info(&self) -> Result<GeneralInfo, TransportError> {
        self.call(Endpoint::GeneralInfo, &EmptyRequest {}).await
    }

    pub async fn node_data(&self) -> Result<MinedDiagram, TransportError> {
        self.call(Endpoint::NodeData, &EmptyRequest {}).await
    }

    pub async fn raw_tables(&self) -> Result<RawTables, TransportError> {
        self.call(Endpoint::GetRawNodesAndModules, &EmptyRequest {}).await
    }

    /// Pushes a full raw table; the service re-mines as far as `tables.rerun_level` demands.
    pub async fn update_raw_tables(&self, tables: &RawTables) -> Result<(), TransportError> {
        self.call::<_, serde_json::Value>(Endpoint::UpdateRawNodesAndModules, tables).await?;
        Ok(())
    }

    pub async fn current_graph(&self) -> Result<CurrentGraph, TransportError> {
        self.call(Endpoint::CurrentGraph, &EmptyRequest {}).await
    }

    pub async fn get_settings(&self) -> Result<ViewSettings, TransportError> {
        self.call(Endpoint::GetSettings, &EmptyRequest {}).await
    }

    pub async fn set_settings(
        &self,
        settings: &ViewSettings,
    ) -> Result<ViewSettings, TransportError> {
        let request = SettingsRequest { settings: settings.clone() };
        self.call(Endpoint::SetSettings, &request).await
    }

    pub async fn source_file(&self, file_name: &str) -> Result<String, TransportError> {
        let request = SourceFileRequest { file_name: file_name.to_owned() };
        let response: SourceFileResponse = self.call(Endpoint::SourceFile, &request).await?;
        Ok(response.data)
    }

    pub async fn source_files(&self) -> Result<Vec<String>, TransportError> {
        let response: SourceFilesResponse =
            self.call(Endpoint::SourceFiles, &EmptyRequest {}).await?;
        Ok(response.files)
    }

    pub async fn addr_occurrences(
        &self,
        node_id: NodeId,
    ) -> Result<Vec<Occurrence>, TransportError> {
        let request = AddrOccurrencesRequest { synoptic_node_id: node_id };
        let response: AddrOccurrencesResponse =
            self.call(Endpoint::AddrOccurrences, &request).await?;
        Ok(response.val)
    }

    /// Asks the service to start a gdb server at `start_time`; returns the command to run.
    pub async fn create_gdb_server(&self, start_time: u64) -> Result<String, TransportError> {
        let request = GdbServerRequest { start_time };
        let response: GdbServerResponse = self.call(Endpoint::CreateGdbServer, &request).await?;
        Ok(response.value)
    }
}
