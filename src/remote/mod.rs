// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The fixed request/response contract with the remote mining service.

pub mod backend;
pub mod http;
pub mod transport;
pub mod types;

pub use backend::Backend;
pub use http::{HttpTransport, RetryPolicy};
pub use transport::{Transport, TransportError};
pub use types::{CurrentGraph, Endpoint};
