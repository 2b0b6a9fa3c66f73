// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! ```text
//! Token (ERC-20 or native)
//!     |
//!     | TokenAmount (U256, raw smallest units)
//!     |
//!     | convert via PriceOracle
//!     ↓
//! TokenAmount in ReferenceToken units
//!     |
//!     | format_reference_value (TokenDecimals -> 2)
//!     ↓
//! "3.50"
//! ```

mod amount;
mod decimals;
mod reference;
mod token;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use reference::ReferenceToken;
pub use token::{Erc20Token, Token};
