// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact fixed-point formatting of token amounts
//!
//! All arithmetic is on unbounded integers ([`BigUint`]), so scaling up to any
//! decimal count never overflows and no digit is ever lost to floating point.
//! Scaling down truncates toward zero; nothing here rounds.
//!
//! ```
//! use tradevalue::format::format_token_value;
//!
//! // 1.23456789 at 18 decimals, displayed with 2: truncated, not rounded
//! assert_eq!(format_token_value(1_234_567_890_000_000_000u128, 18, 2), "1.23");
//! // fractional part is zero-padded to the display precision
//! assert_eq!(format_token_value(5u64, 2, 2), "0.05");
//! ```

use num_bigint::BigUint;

use crate::config::constants::{self, NATIVE_DECIMALS};
use crate::network::SupportedNetwork;
use crate::types::tokens::{ReferenceToken, TokenAmount, TokenDecimals};

/// Move `amount` from `from` decimals to `to` decimals
///
/// Divides by `10^(from - to)` (truncating) when `to <= from`, multiplies by
/// `10^(to - from)` otherwise.
pub fn rescale(amount: &BigUint, from: u8, to: u8) -> BigUint {
    if to <= from {
        amount / TokenDecimals::new(from - to).scale()
    } else {
        amount * TokenDecimals::new(to - from).scale()
    }
}

/// Render `amount` as `<integer>.<fraction>` with exactly `decimals` fractional digits
///
/// The fraction is left-padded with zeros, so a remainder of 5 at two decimals
/// renders as `05`. With zero decimals the output ends in a bare point.
pub fn to_fixed_string(amount: &BigUint, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{amount}.");
    }

    let width = usize::from(decimals);
    let scale = TokenDecimals::new(decimals).scale();
    let integer = amount / &scale;
    let fraction = amount % &scale;
    format!("{integer}.{:0>width$}", fraction.to_string())
}

/// Rescale from `actual` to `target` decimals and render with `target` fractional digits
pub fn format_token_value(amount: impl Into<BigUint>, actual: u8, target: u8) -> String {
    to_fixed_string(&rescale(&amount.into(), actual, target), target)
}

/// Render a reference currency amount with exactly two fractional digits
///
/// ```
/// use tradevalue::{constants, format::format_reference_value, SupportedNetwork, TokenAmount};
///
/// let dai = constants::reference_token(SupportedNetwork::Mainnet);
/// let amount = TokenAmount::from(3_504_000_000_000_000_000u128);
/// assert_eq!(format_reference_value(amount, &dai), "3.50");
/// ```
pub fn format_reference_value(amount: TokenAmount, reference: &ReferenceToken) -> String {
    format_token_value(amount, reference.decimals.as_u8(), TokenDecimals::CENTS.as_u8())
}

/// Render a native currency amount at full 18-decimal precision
pub fn format_native_value(amount: TokenAmount) -> String {
    to_fixed_string(&amount.to_biguint(), NATIVE_DECIMALS)
}

/// Whether the network's cost label carries a reference currency equivalent
///
/// Only mainnet does: on xDAI the native currency is itself the dollar, and
/// testnet prices are meaningless.
pub const fn cost_label_shows_reference(network: SupportedNetwork) -> bool {
    match network {
        SupportedNetwork::Mainnet => true,
        SupportedNetwork::Rinkeby | SupportedNetwork::Goerli | SupportedNetwork::Xdai => false,
    }
}

/// Human-readable cost of a trade on `network`
///
/// - mainnet: `"<native> ETH (<reference> DAI)"`
/// - xdai: `"<native> XDAI"`
/// - testnets: `"<native> ETH"`
///
/// The native amount always carries all 18 fractional digits, so one ether
/// renders as `1.000000000000000000`, not `1.0`.
///
/// `reference_amount` is ignored where the label has no parenthetical.
pub fn format_cost_label(
    native_amount: TokenAmount,
    reference_amount: TokenAmount,
    network: SupportedNetwork,
    reference: &ReferenceToken,
) -> String {
    let native = format_native_value(native_amount);
    let symbol = constants::native_symbol(network);
    if cost_label_shows_reference(network) {
        format!(
            "{native} {symbol} ({} {})",
            format_reference_value(reference_amount, reference),
            reference.symbol
        )
    } else {
        format!("{native} {symbol}")
    }
}
