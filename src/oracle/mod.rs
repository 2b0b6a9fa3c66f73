// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Price oracle capability
//!
//! Conversions never price anything themselves. They describe a hypothetical
//! trade as a [`TradeEstimateQuery`] and ask a [`PriceOracle`] how much of the
//! buy token it would yield. Users implement the trait for whatever quoting
//! backend they have (an order book API, a DEX aggregator, a test double).
//!
//! # Example: Fixed-rate oracle
//!
//! ```rust
//! use async_trait::async_trait;
//! use tradevalue::{PriceOracle, PriceOracleError, TokenAmount, TradeEstimateQuery};
//!
//! /// Quotes every pair at 2 units of buy token per unit sold
//! struct DoublingOracle;
//!
//! #[async_trait]
//! impl PriceOracle for DoublingOracle {
//!     async fn estimate_trade_amount(
//!         &self,
//!         query: &TradeEstimateQuery,
//!     ) -> Result<TokenAmount, PriceOracleError> {
//!         let doubled = query.amount.as_u256().checked_mul(alloy_primitives::U256::from(2));
//!         doubled
//!             .map(TokenAmount::new)
//!             .ok_or_else(|| PriceOracleError::invalid_response("overflow"))
//!     }
//! }
//! ```

use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::PriceOracleError;
use crate::types::tokens::TokenAmount;

/// Side of a trade estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Buy an exact amount of the buy token
    Buy,
    /// Sell an exact amount of the sell token
    Sell,
}

/// A hypothetical trade to be priced
///
/// For [`OrderKind::Sell`], `amount` is denominated in `sell_token` and the
/// oracle reports the amount of `buy_token` received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEstimateQuery {
    pub sell_token: Address,
    pub buy_token: Address,
    pub amount: TokenAmount,
    pub kind: OrderKind,
}

impl TradeEstimateQuery {
    /// Sell exactly `amount` of `sell_token` for `buy_token`
    pub const fn sell(sell_token: Address, buy_token: Address, amount: TokenAmount) -> Self {
        Self {
            sell_token,
            buy_token,
            amount,
            kind: OrderKind::Sell,
        }
    }
}

/// Capability for estimating the outcome of a trade
///
/// The trait is object-safe, so converters can hold `Box<dyn PriceOracle>` or
/// `Arc<dyn PriceOracle>`. Implementations own any retry, caching or rate
/// limiting policy; conversions call the oracle at most once and return its
/// error untouched.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Estimate the amount received for the trade described by `query`
    async fn estimate_trade_amount(
        &self,
        query: &TradeEstimateQuery,
    ) -> Result<TokenAmount, PriceOracleError>;
}

#[async_trait]
impl<'a, T: PriceOracle + ?Sized> PriceOracle for &'a T {
    async fn estimate_trade_amount(
        &self,
        query: &TradeEstimateQuery,
    ) -> Result<TokenAmount, PriceOracleError> {
        (**self).estimate_trade_amount(query).await
    }
}

#[async_trait]
impl<T: PriceOracle + ?Sized> PriceOracle for Arc<T> {
    async fn estimate_trade_amount(
        &self,
        query: &TradeEstimateQuery,
    ) -> Result<TokenAmount, PriceOracleError> {
        (**self).estimate_trade_amount(query).await
    }
}

#[async_trait]
impl<T: PriceOracle + ?Sized> PriceOracle for Box<T> {
    async fn estimate_trade_amount(
        &self,
        query: &TradeEstimateQuery,
    ) -> Result<TokenAmount, PriceOracleError> {
        (**self).estimate_trade_amount(query).await
    }
}
