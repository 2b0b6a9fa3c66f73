// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Raw token amount in the token's smallest indivisible unit
///
/// There is no implicit decimal point: 1.5 WETH is `1_500_000_000_000_000_000`.
/// The decimal count travels separately as a [`TokenDecimals`](crate::TokenDecimals).
/// Amounts are never mutated; conversions and formatting produce new values.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use tradevalue::TokenAmount;
///
/// let amount = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.to_string(), "1500000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Widen into an unbounded integer for exact decimal arithmetic
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0.to_be_bytes::<32>())
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<TokenAmount> for BigUint {
    fn from(value: TokenAmount) -> Self {
        value.to_biguint()
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_amount_creation() {
        let amount = TokenAmount::new(U256::from(1000u64));
        assert_eq!(amount.as_u256(), U256::from(1000u64));
        assert!(!amount.is_zero());
        assert!(TokenAmount::ZERO.is_zero());
    }

    #[test]
    fn test_to_biguint_preserves_value() {
        let amount = TokenAmount::from(1_234_567_890_000_000_000u128);
        assert_eq!(amount.to_biguint(), BigUint::from(1_234_567_890_000_000_000u128));
    }

    #[test]
    fn test_to_biguint_max() {
        let max = TokenAmount::new(U256::MAX);
        assert_eq!(max.to_biguint().to_string(), U256::MAX.to_string());
    }

    #[test]
    fn test_to_biguint_zero() {
        assert_eq!(TokenAmount::ZERO.to_biguint(), BigUint::from(0u8));
    }

    #[test]
    fn test_display_formatting() {
        let amount = TokenAmount::new(U256::from(12345u64));
        assert_eq!(format!("{}", amount), "12345");
    }

    #[test]
    fn test_serialization() {
        let amount = TokenAmount::new(U256::from(12345u64));
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
