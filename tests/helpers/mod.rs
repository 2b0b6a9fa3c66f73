// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tradevalue integration tests
//!
//! Provides a recording price oracle so conversions can be tested without a
//! real quoting backend.

use std::sync::Mutex;

use alloy_primitives::U256;
use async_trait::async_trait;
use tradevalue::{PriceOracle, PriceOracleError, TokenAmount, TradeEstimateQuery};

type Responder =
    Box<dyn Fn(&TradeEstimateQuery) -> Result<TokenAmount, PriceOracleError> + Send + Sync>;

/// Mock PriceOracle that records every query it receives
///
/// # Example
///
/// ```rust,ignore
/// let oracle = MockPriceOracle::at_rate(3, 1); // 3 buy units per sell unit
/// let value = convert_to_reference(token, amount, &dai, &oracle).await?;
/// assert_eq!(oracle.call_count(), 1);
/// ```
pub struct MockPriceOracle {
    responder: Responder,
    queries: Mutex<Vec<TradeEstimateQuery>>,
}

impl MockPriceOracle {
    /// Oracle answering with a custom function
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&TradeEstimateQuery) -> Result<TokenAmount, PriceOracleError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Oracle quoting every pair at `numerator / denominator` buy units per sell unit
    pub fn at_rate(numerator: u64, denominator: u64) -> Self {
        Self::new(move |query| {
            Ok(TokenAmount::new(
                query.amount.as_u256() * U256::from(numerator) / U256::from(denominator),
            ))
        })
    }

    /// Oracle that always returns the same amount
    pub fn fixed(amount: TokenAmount) -> Self {
        Self::new(move |_| Ok(amount))
    }

    /// Oracle that fails every request with `PricingUnavailable`
    #[allow(dead_code)]
    pub fn unavailable() -> Self {
        Self::new(|query| {
            Err(PriceOracleError::PricingUnavailable {
                sell_token: query.sell_token,
                buy_token: query.buy_token,
            })
        })
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Queries received so far, in arrival order
    pub fn queries(&self) -> Vec<TradeEstimateQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceOracle for MockPriceOracle {
    async fn estimate_trade_amount(
        &self,
        query: &TradeEstimateQuery,
    ) -> Result<TokenAmount, PriceOracleError> {
        self.queries.lock().unwrap().push(query.clone());
        (self.responder)(query)
    }
}

/// Install a test subscriber so conversion spans and events are exercised
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("tradevalue=trace"))
        .with_test_writer()
        .try_init();
}
