// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # tradevalue
//!
//! Express what a trade is worth, and what it cost, in one consistent unit.
//!
//! - **Conversion** ([`conversion`]): turn an amount of any token into the
//!   network's reference stablecoin or into its native currency, asking a
//!   [`PriceOracle`] only when the token is not already in that unit.
//! - **Formatting** ([`format`]): exact fixed-point rendering of integer token
//!   amounts, plus per-network cost labels.
//!
//! ```rust,ignore
//! use tradevalue::{format, SupportedNetwork, Token, TokenAmount, ValueConverter};
//!
//! let converter = ValueConverter::new(my_oracle, SupportedNetwork::Mainnet);
//!
//! let sold = TokenAmount::from(5_000_000_000_000_000_000u128);
//! let value = converter.reference_value(uni_address, sold).await?;
//! println!("trade value: {} DAI", converter.format_reference_value(value));
//!
//! let fee = converter.native_value(&Token::erc20(uni_address), fee_in_uni).await?;
//! println!("fee: {}", converter.cost_label(fee).await?);
//! ```

pub mod config;
pub mod conversion;
pub mod errors;
pub mod format;
mod network;
pub mod oracle;
mod tracing;
pub mod types;

pub use config::constants;
pub use config::{ValueConfig, ValueConfigBuilder, WrappedNativeSale};
pub use conversion::{
    convert_native_to_reference, convert_to_native, convert_to_native_with_policy,
    convert_to_reference, is_native_denominated, is_reference_token, is_wrapped_native,
    ValueConverter,
};
pub use errors::{NetworkError, PriceOracleError, TradeValueError};
pub use format::{
    format_cost_label, format_reference_value, format_token_value, rescale, to_fixed_string,
};
pub use network::SupportedNetwork;
pub use oracle::{OrderKind, PriceOracle, TradeEstimateQuery};
pub use types::tokens::{Erc20Token, ReferenceToken, Token, TokenAmount, TokenDecimals};
