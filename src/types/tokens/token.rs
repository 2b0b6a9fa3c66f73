// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Traded token references

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;
use super::decimals::TokenDecimals;
use crate::format::format_token_value;

/// An ERC-20 token involved in a trade
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Erc20Token {
    /// Contract address
    pub address: Address,
    /// Symbol, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Decimal count, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<TokenDecimals>,
}

impl Erc20Token {
    /// Token known only by its address
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            symbol: None,
            decimals: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(TokenDecimals::new(decimals));
        self
    }

    /// Render `amount` of this token with `display` fractional digits
    ///
    /// `None` when the token's decimal count is unknown.
    pub fn format_amount(&self, amount: TokenAmount, display: u8) -> Option<String> {
        self.decimals
            .map(|decimals| format_token_value(amount, decimals.as_u8(), display))
    }
}

/// Either an ERC-20 token or the network's native currency
///
/// The native currency has no contract address; price lookups for it must go
/// through the network's wrapped-native token instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Token {
    Erc20(Erc20Token),
    Native,
}

impl Token {
    /// ERC-20 token known only by its address
    pub const fn erc20(address: Address) -> Self {
        Self::Erc20(Erc20Token::new(address))
    }

    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// Contract address, `None` for the native currency
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::Erc20(token) => Some(token.address),
            Self::Native => None,
        }
    }
}

impl From<Erc20Token> for Token {
    fn from(token: Erc20Token) -> Self {
        Self::Erc20(token)
    }
}

impl From<Address> for Token {
    fn from(address: Address) -> Self {
        Self::erc20(address)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Erc20(Erc20Token {
                symbol: Some(symbol),
                address,
                ..
            }) => write!(f, "{symbol} ({address})"),
            Self::Erc20(token) => write!(f, "{}", token.address),
            Self::Native => f.write_str("native"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    #[test]
    fn test_native_capability() {
        assert!(Token::Native.is_native());
        assert!(!Token::erc20(WETH).is_native());
    }

    #[test]
    fn test_address() {
        assert_eq!(Token::erc20(WETH).address(), Some(WETH));
        assert_eq!(Token::Native.address(), None);
    }

    #[test]
    fn test_format_amount_uses_token_decimals() {
        let usdc = Erc20Token::new(address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"))
            .with_symbol("USDC")
            .with_decimals(6);
        assert_eq!(
            usdc.format_amount(TokenAmount::from(12_345_678u64), 2),
            Some("12.34".to_string())
        );
        assert_eq!(
            usdc.format_amount(TokenAmount::from(5u64), 6),
            Some("0.000005".to_string())
        );
    }

    #[test]
    fn test_format_amount_without_decimals() {
        assert_eq!(Erc20Token::new(WETH).format_amount(TokenAmount::from(1u64), 2), None);
    }

    #[test]
    fn test_display() {
        let token: Token = Erc20Token::new(WETH).with_symbol("WETH").into();
        assert!(token.to_string().starts_with("WETH (0x"));
        assert_eq!(Token::Native.to_string(), "native");
    }

    #[test]
    fn test_serialization() {
        let token: Token = Erc20Token::new(WETH).with_decimals(18).into();
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"type\":\"erc20\""));
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);

        let native: Token = serde_json::from_str(r#"{"type":"native"}"#).unwrap();
        assert!(native.is_native());
    }
}
