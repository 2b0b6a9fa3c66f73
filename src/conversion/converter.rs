// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::Address;
use futures::future::try_join_all;
use tracing::Instrument;

use crate::config::ValueConfig;
use crate::errors::PriceOracleError;
use crate::format::{cost_label_shows_reference, format_cost_label, format_reference_value};
use crate::network::SupportedNetwork;
use crate::oracle::PriceOracle;
use crate::tracing::spans;
use crate::types::tokens::{ReferenceToken, Token, TokenAmount};

use super::{convert_native_to_reference, convert_to_native_with_policy, convert_to_reference};

/// Converts and formats trade values on one network
///
/// Holds no mutable state. All methods take `&self`, so one converter can
/// serve many concurrent conversions.
///
/// # Examples
///
/// ```rust,ignore
/// use tradevalue::{SupportedNetwork, TokenAmount, ValueConverter};
///
/// let converter = ValueConverter::new(oracle, SupportedNetwork::Mainnet);
/// let fee = TokenAmount::from(2_100_000_000_000_000u64);
/// let label = converter.cost_label(fee).await?;
/// // "0.002100000000000000 ETH (7.35 DAI)"
/// ```
#[derive(Debug, Clone)]
pub struct ValueConverter<O> {
    oracle: O,
    network: SupportedNetwork,
    config: ValueConfig,
    reference: ReferenceToken,
}

impl<O: PriceOracle> ValueConverter<O> {
    /// Create a converter using the default [`ValueConfig`]
    pub fn new(oracle: O, network: SupportedNetwork) -> Self {
        Self::with_config(oracle, network, ValueConfig::default())
    }

    pub fn with_config(oracle: O, network: SupportedNetwork, config: ValueConfig) -> Self {
        let reference = config.reference_token(network);
        Self {
            oracle,
            network,
            config,
            reference,
        }
    }

    pub fn network(&self) -> SupportedNetwork {
        self.network
    }

    /// The effective reference token for this converter's network
    pub fn reference_token(&self) -> &ReferenceToken {
        &self.reference
    }

    pub fn config(&self) -> &ValueConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Value of `amount` of the ERC-20 `token` in reference currency units
    pub async fn reference_value(
        &self,
        token: Address,
        amount: TokenAmount,
    ) -> Result<TokenAmount, PriceOracleError> {
        convert_to_reference(token, amount, &self.reference, &self.oracle).await
    }

    /// Value of a native currency `amount` in reference currency units
    pub async fn reference_value_of_native(
        &self,
        amount: TokenAmount,
    ) -> Result<TokenAmount, PriceOracleError> {
        convert_native_to_reference(amount, &self.reference, self.network, &self.oracle).await
    }

    /// Value of `amount` of `token` in reference currency units, native or not
    pub async fn reference_value_of(
        &self,
        token: &Token,
        amount: TokenAmount,
    ) -> Result<TokenAmount, PriceOracleError> {
        match token.address() {
            Some(address) => self.reference_value(address, amount).await,
            None => self.reference_value_of_native(amount).await,
        }
    }

    /// Value of `amount` of `token` in native currency units
    pub async fn native_value(
        &self,
        token: &Token,
        amount: TokenAmount,
    ) -> Result<TokenAmount, PriceOracleError> {
        convert_to_native_with_policy(
            token,
            amount,
            self.network,
            &self.oracle,
            self.config.wrapped_native_sale(),
        )
        .await
    }

    /// Price several token amounts concurrently
    ///
    /// Results are in input order. The first oracle error aborts the batch and
    /// is returned as-is.
    pub async fn reference_values(
        &self,
        entries: &[(Token, TokenAmount)],
    ) -> Result<Vec<TokenAmount>, PriceOracleError> {
        let span = spans::reference_values(self.network, entries.len());
        try_join_all(
            entries
                .iter()
                .map(|(token, amount)| self.reference_value_of(token, *amount)),
        )
        .instrument(span)
        .await
    }

    /// Reference currency amount rendered with two fractional digits
    pub fn format_reference_value(&self, amount: TokenAmount) -> String {
        format_reference_value(amount, &self.reference)
    }

    /// Render this network's cost label for a native currency cost
    ///
    /// The oracle is only consulted on networks whose label shows a reference
    /// currency equivalent.
    pub async fn cost_label(&self, native_amount: TokenAmount) -> Result<String, PriceOracleError> {
        let span = spans::cost_label(self.network, native_amount.as_u256());
        async move {
            let reference_amount = if cost_label_shows_reference(self.network) {
                self.reference_value_of_native(native_amount).await?
            } else {
                TokenAmount::ZERO
            };
            Ok(format_cost_label(
                native_amount,
                reference_amount,
                self.network,
                &self.reference,
            ))
        }
        .instrument(span)
        .await
    }
}
