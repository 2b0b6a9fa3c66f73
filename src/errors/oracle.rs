// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for price oracle lookups.
//!
//! These errors are produced by [`PriceOracle`](crate::PriceOracle)
//! implementations. The converters in [`crate::conversion`] never create,
//! wrap or retry them; they reach the caller exactly as the oracle returned them.

use alloy_primitives::Address;

/// Errors a price oracle can report for a trade estimate.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::address;
/// use tradevalue::PriceOracleError;
///
/// let error = PriceOracleError::PricingUnavailable {
///     sell_token: address!("1111111111111111111111111111111111111111"),
///     buy_token: address!("2222222222222222222222222222222222222222"),
/// };
/// assert!(error.to_string().contains("No price available"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceOracleError {
    /// The oracle could not be reached or the round trip failed.
    #[error("Price oracle request failed: {details}")]
    Network {
        /// Details about the transport failure
        details: String,
        /// The underlying transport error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The oracle has no price for this pair right now.
    #[error("No price available for selling {sell_token} for {buy_token}")]
    PricingUnavailable {
        /// Token being sold
        sell_token: Address,
        /// Token being bought
        buy_token: Address,
    },

    /// The oracle rejected the token pair outright (unsupported or identical tokens).
    #[error("Invalid token pair: {sell_token} -> {buy_token}")]
    InvalidTokenPair {
        /// Token being sold
        sell_token: Address,
        /// Token being bought
        buy_token: Address,
    },

    /// The oracle answered with something that is not a usable amount.
    #[error("Invalid price oracle response: {details}")]
    InvalidResponse {
        /// Details about the malformed response
        details: String,
    },
}

impl PriceOracleError {
    /// Create a `Network` error without an underlying source.
    pub fn network(details: impl Into<String>) -> Self {
        PriceOracleError::Network {
            details: details.into(),
            source: None,
        }
    }

    /// Create a `Network` error wrapping a transport error.
    pub fn network_with_source(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PriceOracleError::Network {
            details: details.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an `InvalidResponse` error with details.
    pub fn invalid_response(details: impl Into<String>) -> Self {
        PriceOracleError::InvalidResponse {
            details: details.into(),
        }
    }
}
