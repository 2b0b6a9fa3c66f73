// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for value conversion
//!
//! The per-network constant tables live in [`constants`]. [`ValueConfig`]
//! layers caller overrides on top of them and holds the switch for the
//! wrapped-native workaround in [`convert_to_native`](crate::convert_to_native).
//!
//! # Example: Using defaults
//!
//! ```rust
//! use tradevalue::{SupportedNetwork, ValueConfig, WrappedNativeSale};
//!
//! let config = ValueConfig::default();
//! assert_eq!(config.wrapped_native_sale(), WrappedNativeSale::Elide);
//! assert_eq!(config.reference_token(SupportedNetwork::Mainnet).symbol(), "DAI");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use alloy_primitives::address;
//! use tradevalue::{
//!     ReferenceToken, SupportedNetwork, TokenDecimals, ValueConfigBuilder, WrappedNativeSale,
//! };
//!
//! let usdc = ReferenceToken::new(
//!     "USDC",
//!     TokenDecimals::USDC,
//!     address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
//! );
//! let config = ValueConfigBuilder::new()
//!     .reference_token(SupportedNetwork::Mainnet, usdc)
//!     .wrapped_native_sale(WrappedNativeSale::Quote)
//!     .build();
//!
//! assert_eq!(config.reference_token(SupportedNetwork::Mainnet).symbol(), "USDC");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::network::SupportedNetwork;
use crate::types::tokens::ReferenceToken;

pub mod constants;

/// How [`convert_to_native`](crate::convert_to_native) treats the wrapped-native token
///
/// The price oracle cannot yet quote selling the wrapped-native token for the
/// native currency. `Elide` answers those conversions 1:1 locally. Switch to
/// `Quote` once the oracle supports the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrappedNativeSale {
    /// Treat wrapped-native amounts as already native-denominated
    #[default]
    Elide,
    /// Send wrapped-native amounts to the oracle like any other token
    Quote,
}

/// Configuration for value conversion
///
/// Use [`ValueConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueConfig {
    /// Wrapped-native handling in native conversions
    /// Default: [`WrappedNativeSale::Elide`]
    #[serde(default)]
    pub wrapped_native_sale: WrappedNativeSale,

    /// Per-network reference tokens replacing the built-in table
    #[serde(default)]
    pub reference_overrides: HashMap<SupportedNetwork, ReferenceToken>,
}

impl ValueConfig {
    /// Get the effective reference token for a network
    ///
    /// Returns the override if set, otherwise the built-in entry from
    /// [`constants::reference_token`].
    pub fn reference_token(&self, network: SupportedNetwork) -> ReferenceToken {
        self.reference_overrides
            .get(&network)
            .cloned()
            .unwrap_or_else(|| constants::reference_token(network))
    }

    pub fn wrapped_native_sale(&self) -> WrappedNativeSale {
        self.wrapped_native_sale
    }

    /// Set a network-specific reference token
    pub fn set_reference_override(&mut self, network: SupportedNetwork, token: ReferenceToken) {
        self.reference_overrides.insert(network, token);
    }
}

/// Builder for [`ValueConfig`]
#[derive(Debug, Default)]
pub struct ValueConfigBuilder {
    config: ValueConfig,
}

impl ValueConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how wrapped-native conversions to native are handled
    pub fn wrapped_native_sale(mut self, policy: WrappedNativeSale) -> Self {
        self.config.wrapped_native_sale = policy;
        self
    }

    /// Replace the reference token of one network
    pub fn reference_token(mut self, network: SupportedNetwork, token: ReferenceToken) -> Self {
        self.config.set_reference_override(network, token);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ValueConfig {
        self.config
    }
}
