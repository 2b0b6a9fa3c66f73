// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reference currency metadata

use std::borrow::Cow;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;

/// The stablecoin a network expresses trade values in
///
/// One instance exists per [`SupportedNetwork`](crate::SupportedNetwork) in the
/// static table (see [`reference_token`](crate::constants::reference_token)).
/// The address is held as raw bytes, so two reference tokens parsed from
/// differently-cased hex strings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceToken {
    /// Display symbol, e.g. `DAI`
    pub symbol: Cow<'static, str>,
    /// Token decimal count
    pub decimals: TokenDecimals,
    /// ERC-20 contract address
    pub address: Address,
}

impl ReferenceToken {
    /// Create reference token metadata usable in `const` tables
    pub const fn new_static(symbol: &'static str, decimals: u8, address: Address) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            decimals: TokenDecimals::new(decimals),
            address,
        }
    }

    /// Create reference token metadata with an owned symbol
    pub fn new(symbol: impl Into<String>, decimals: TokenDecimals, address: Address) -> Self {
        Self {
            symbol: Cow::Owned(symbol.into()),
            decimals,
            address,
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Display for ReferenceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}
