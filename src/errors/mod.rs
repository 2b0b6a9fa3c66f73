// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tradevalue library.
//!
//! - [`PriceOracleError`] - Failures reported by a [`PriceOracle`](crate::PriceOracle)
//!   implementation. Conversions return these unchanged.
//! - [`NetworkError`] - Chain identifiers outside the supported network set.
//!
//! [`TradeValueError`] unifies both for callers that do not need to
//! distinguish the source.
//!
//! Formatting is infallible and has no error type.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tradevalue::{SupportedNetwork, TradeValueError, ValueConverter};
//!
//! async fn report(chain_id: u64, oracle: MyOracle) -> Result<String, TradeValueError> {
//!     let network = SupportedNetwork::try_from(chain_id)?;
//!     let converter = ValueConverter::new(oracle, network);
//!     Ok(converter.cost_label(gas_used_wei).await?)
//! }
//! ```

mod network;
mod oracle;

pub use network::NetworkError;
pub use oracle::PriceOracleError;

/// Unified error type for all tradevalue operations.
#[derive(Debug, thiserror::Error)]
pub enum TradeValueError {
    /// Error reported by the price oracle.
    #[error("Price oracle error: {0}")]
    Oracle(#[from] PriceOracleError),

    /// Error resolving the network.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}
