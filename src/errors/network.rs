// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for resolving a [`SupportedNetwork`](crate::SupportedNetwork).

use alloy_chains::NamedChain;

/// Errors that can occur when mapping external chain identifiers onto the
/// closed set of supported networks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The chain is known to alloy but has no deployment here.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(NamedChain),

    /// The numeric chain id is not a supported network.
    #[error("Unsupported chain id: {0}")]
    UnknownChainId(u64),

    /// The network name is not recognised.
    #[error("Unknown network name: {0:?}")]
    UnknownName(String),
}
