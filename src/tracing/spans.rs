// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for tradevalue operations.
//!
//! Telemetry is kept out of the conversion logic: each instrumented operation
//! has a span helper here, and the operation instruments its future with it.
//!
//! ```rust,ignore
//! pub async fn my_operation(param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use alloy_primitives::{Address, U256};
use tracing::{Level, Span};

use crate::network::SupportedNetwork;

/// Create span for converting a token amount into the reference currency.
///
/// Parent: caller span, or convert_native_to_reference
/// Children: price_oracle_estimate (when the token is not the reference token)
#[inline]
pub(crate) fn convert_to_reference(token: Address, reference: Address, amount: U256) -> Span {
    tracing::debug_span!(
        "tradevalue.convert_to_reference",
        token = %token,
        reference = %reference,
        amount = %amount,
    )
}

/// Create span for converting a native currency amount into the reference currency.
///
/// Parent: caller span
/// Children: convert_to_reference
#[inline]
pub(crate) fn convert_native_to_reference(network: SupportedNetwork, amount: U256) -> Span {
    tracing::debug_span!(
        "tradevalue.convert_native_to_reference",
        network = %network,
        amount = %amount,
    )
}

/// Create span for converting a token amount into the native currency.
///
/// Parent: caller span
/// Children: price_oracle_estimate (unless the amount is already native-denominated)
#[inline]
pub(crate) fn convert_to_native(network: SupportedNetwork, token: &str, amount: U256) -> Span {
    tracing::debug_span!(
        "tradevalue.convert_to_native",
        network = %network,
        token = token,
        amount = %amount,
    )
}

/// Create span around a single price oracle round trip.
///
/// Parent: convert_to_reference or convert_to_native span
/// Children: whatever the oracle implementation records
#[inline]
pub(crate) fn price_oracle_estimate(sell_token: Address, buy_token: Address) -> Span {
    tracing::trace_span!(
        "tradevalue.price_oracle_estimate",
        sell_token = %sell_token,
        buy_token = %buy_token,
    )
}

/// Create span for pricing a batch of token amounts concurrently.
///
/// This is the entry point of [`ValueConverter::reference_values`](crate::ValueConverter::reference_values).
///
/// Parent: None (root span for this operation)
/// Children: convert_to_reference spans (one per entry)
#[inline]
pub(crate) fn reference_values(network: SupportedNetwork, count: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "tradevalue.reference_values",
        network = %network,
        count = count,
    )
}

/// Create span for building a network cost label.
///
/// Parent: None (root span for this operation)
/// Children: convert_native_to_reference
#[inline]
pub(crate) fn cost_label(network: SupportedNetwork, native_amount: U256) -> Span {
    tracing::info_span!(
        "tradevalue.cost_label",
        network = %network,
        native_amount = %native_amount,
    )
}
