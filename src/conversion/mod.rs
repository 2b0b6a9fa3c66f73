// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token value conversion
//!
//! Each conversion is one branch and at most one oracle round trip:
//!
//! 1. A predicate ([`is_reference_token`], [`is_native_denominated`]) decides
//!    whether the amount is already in the target unit.
//! 2. If it is, the amount is returned as-is and the oracle is not called.
//! 3. Otherwise a single SELL estimate is requested and its result returned.
//!
//! Oracle errors are returned exactly as produced. Nothing here retries,
//! caches or rate limits.
//!
//! [`ValueConverter`] bundles an oracle with a network and a [`ValueConfig`]
//! for callers that convert repeatedly on the same network.
//!
//! [`ValueConfig`]: crate::ValueConfig

use alloy_primitives::Address;
use tracing::Instrument;

use crate::config::constants::{self, BUY_NATIVE_ADDRESS};
use crate::config::WrappedNativeSale;
use crate::errors::PriceOracleError;
use crate::network::SupportedNetwork;
use crate::oracle::{PriceOracle, TradeEstimateQuery};
use crate::tracing::spans;
use crate::types::tokens::{ReferenceToken, Token, TokenAmount};

mod converter;

pub use converter::ValueConverter;

/// Whether `token` is the reference currency itself
///
/// Addresses compare by their 20 bytes, so `0x6B17…` and `0x6b17…` match.
pub fn is_reference_token(token: Address, reference: &ReferenceToken) -> bool {
    token == reference.address
}

/// Whether `token` is the network's wrapped-native ERC-20
pub fn is_wrapped_native(token: Address, network: SupportedNetwork) -> bool {
    token == constants::wrapped_native_token(network)
}

/// Whether an amount of `token` is already denominated in the native currency
///
/// True for the native currency itself and, under [`WrappedNativeSale::Elide`],
/// for the wrapped-native token.
pub fn is_native_denominated(
    token: &Token,
    network: SupportedNetwork,
    wrapped_native_sale: WrappedNativeSale,
) -> bool {
    match token {
        Token::Native => true,
        Token::Erc20(erc20) => {
            wrapped_native_sale == WrappedNativeSale::Elide
                && is_wrapped_native(erc20.address, network)
        }
    }
}

/// Convert `amount` of `token` into the reference currency
///
/// Returns `amount` unchanged when `token` is the reference token; otherwise
/// sells `amount` of `token` for the reference token through `oracle`.
///
/// # Errors
///
/// Any [`PriceOracleError`] from the oracle, unchanged.
pub async fn convert_to_reference<O>(
    token: Address,
    amount: TokenAmount,
    reference: &ReferenceToken,
    oracle: &O,
) -> Result<TokenAmount, PriceOracleError>
where
    O: PriceOracle + ?Sized,
{
    let span = spans::convert_to_reference(token, reference.address, amount.as_u256());
    async move {
        if is_reference_token(token, reference) {
            tracing::debug!(symbol = %reference.symbol, "Token is the reference token, skipping price lookup");
            return Ok(amount);
        }
        estimate_sell(oracle, TradeEstimateQuery::sell(token, reference.address, amount)).await
    }
    .instrument(span)
    .await
}

/// Convert a native currency `amount` into the reference currency
///
/// The oracle only prices address-bearing tokens, so the amount is priced as
/// the network's wrapped-native token.
///
/// # Errors
///
/// Any [`PriceOracleError`] from the oracle, unchanged.
pub async fn convert_native_to_reference<O>(
    amount: TokenAmount,
    reference: &ReferenceToken,
    network: SupportedNetwork,
    oracle: &O,
) -> Result<TokenAmount, PriceOracleError>
where
    O: PriceOracle + ?Sized,
{
    let span = spans::convert_native_to_reference(network, amount.as_u256());
    convert_to_reference(
        constants::wrapped_native_token(network),
        amount,
        reference,
        oracle,
    )
    .instrument(span)
    .await
}

/// Convert `amount` of `token` into the native currency
///
/// Uses the default [`WrappedNativeSale::Elide`] policy. See
/// [`convert_to_native_with_policy`].
///
/// # Errors
///
/// Any [`PriceOracleError`] from the oracle, unchanged.
pub async fn convert_to_native<O>(
    token: &Token,
    amount: TokenAmount,
    network: SupportedNetwork,
    oracle: &O,
) -> Result<TokenAmount, PriceOracleError>
where
    O: PriceOracle + ?Sized,
{
    convert_to_native_with_policy(token, amount, network, oracle, WrappedNativeSale::default())
        .await
}

/// Convert `amount` of `token` into the native currency
///
/// Returns `amount` unchanged when [`is_native_denominated`] holds; otherwise
/// sells `amount` of `token` for [`BUY_NATIVE_ADDRESS`] through `oracle`.
///
/// # Errors
///
/// Any [`PriceOracleError`] from the oracle, unchanged.
pub async fn convert_to_native_with_policy<O>(
    token: &Token,
    amount: TokenAmount,
    network: SupportedNetwork,
    oracle: &O,
    wrapped_native_sale: WrappedNativeSale,
) -> Result<TokenAmount, PriceOracleError>
where
    O: PriceOracle + ?Sized,
{
    let span = spans::convert_to_native(network, &token.to_string(), amount.as_u256());
    async move {
        let sell_token = match token.address() {
            Some(address) if !is_native_denominated(token, network, wrapped_native_sale) => address,
            _ => {
                tracing::debug!(
                    native = token.is_native(),
                    "Amount is already native-denominated, skipping price lookup"
                );
                return Ok(amount);
            }
        };
        estimate_sell(oracle, TradeEstimateQuery::sell(sell_token, BUY_NATIVE_ADDRESS, amount)).await
    }
    .instrument(span)
    .await
}

async fn estimate_sell<O>(
    oracle: &O,
    query: TradeEstimateQuery,
) -> Result<TokenAmount, PriceOracleError>
where
    O: PriceOracle + ?Sized,
{
    let span = spans::price_oracle_estimate(query.sell_token, query.buy_token);
    async move {
        tracing::trace!(amount = %query.amount, "Requesting sell estimate");
        match oracle.estimate_trade_amount(&query).await {
            Ok(bought) => {
                tracing::debug!(sold = %query.amount, bought = %bought, "Received sell estimate");
                Ok(bought)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Price oracle estimate failed");
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
