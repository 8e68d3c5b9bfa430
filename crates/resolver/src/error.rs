// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Duration;

use crate::RequestError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A batch needs at least one request definition, as it could never complete otherwise")]
    EmptyBatch,

    #[error("The identifier '{identifier}' is used by more then one request definition of the batch")]
    DuplicateIdentifier { identifier: String },

    #[error("The request definition '{identifier}' depends on '{accessor}', which is not an identifier of the batch")]
    UnknownAccessor {
        identifier: String,
        accessor: String,
    },

    #[error("The request definitions {} depend on each other in a cycle", .identifiers.join(", "))]
    CyclicChain { identifiers: Vec<String> },

    #[error("Resolving the batch took longer then {deadline:?}; still unresolved: {}", .unresolved.join(", "))]
    Timeout {
        deadline: Duration,
        unresolved: Vec<String>,
    },

    #[error("Requesting <{uri}> for '{identifier}' failed: {source}")]
    Request {
        identifier: String,
        uri: String,
        source: RequestError,
    },

    #[error("The request for '{identifier}' (<{uri}>) ended without an outcome: {cause}")]
    RequestAborted {
        identifier: String,
        uri: String,
        cause: String,
    },
}
