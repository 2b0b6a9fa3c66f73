// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and per-network constant tables
//!
//! Every table is a `const fn` match over [`SupportedNetwork`], so adding a
//! network fails to compile until each table has an entry for it.

use alloy_primitives::{address, Address};

use crate::network::SupportedNetwork;
use crate::types::tokens::ReferenceToken;

/// Pseudo-address used as the buy token when selling into the native currency
///
/// Contract: 0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE
pub const BUY_NATIVE_ADDRESS: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// Decimal count of every supported network's native currency
pub const NATIVE_DECIMALS: u8 = 18;

/// Well-known stablecoin addresses
pub mod stablecoins {
    use super::*;

    /// DAI on Ethereum Mainnet
    ///
    /// Contract: 0x6B175474E89094C44Da98b954EedeAC495271d0F
    pub const MAINNET_DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");

    /// DAI deployment on Rinkeby
    ///
    /// Contract: 0x5592EC0cfb4dbc12D3aB100b257153436a1f0FEa
    pub const RINKEBY_DAI: Address = address!("5592ec0cfb4dbc12d3ab100b257153436a1f0fea");

    /// DAI deployment on Goerli
    ///
    /// Contract: 0xdc31Ee1784292379Fbb2964b3B9C4124D8F89C60
    pub const GOERLI_DAI: Address = address!("dc31ee1784292379fbb2964b3b9c4124d8f89c60");
}

/// Wrapped-native ERC-20 addresses
pub mod wrapped {
    use super::*;

    /// WETH on Ethereum Mainnet
    ///
    /// Contract: 0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2
    pub const MAINNET_WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    /// WETH on Rinkeby
    ///
    /// Contract: 0xc778417E063141139Fce010982780140Aa0cD5Ab
    pub const RINKEBY_WETH: Address = address!("c778417e063141139fce010982780140aa0cd5ab");

    /// WETH on Goerli
    ///
    /// Contract: 0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6
    pub const GOERLI_WETH: Address = address!("b4fbf271143f4fbf7b91a5ded31805e42b2208d6");

    /// WXDAI on Gnosis Chain
    ///
    /// Contract: 0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d
    pub const XDAI_WXDAI: Address = address!("e91d153e0b41518a2ce8dd3d7944fa863463a97d");
}

const MAINNET_REFERENCE: ReferenceToken =
    ReferenceToken::new_static("DAI", 18, stablecoins::MAINNET_DAI);
const RINKEBY_REFERENCE: ReferenceToken =
    ReferenceToken::new_static("DAI", 18, stablecoins::RINKEBY_DAI);
const GOERLI_REFERENCE: ReferenceToken =
    ReferenceToken::new_static("DAI", 18, stablecoins::GOERLI_DAI);
// xDAI itself is the dollar on Gnosis Chain; its wrapped form stands in until
// the oracle can price trades into the native currency directly.
const XDAI_REFERENCE: ReferenceToken =
    ReferenceToken::new_static("WXDAI", 18, wrapped::XDAI_WXDAI);

/// Reference currency for a network
///
/// ```
/// use tradevalue::{constants, SupportedNetwork};
///
/// assert_eq!(constants::reference_token(SupportedNetwork::Mainnet).symbol(), "DAI");
/// ```
pub const fn reference_token(network: SupportedNetwork) -> ReferenceToken {
    match network {
        SupportedNetwork::Mainnet => MAINNET_REFERENCE,
        SupportedNetwork::Rinkeby => RINKEBY_REFERENCE,
        SupportedNetwork::Goerli => GOERLI_REFERENCE,
        SupportedNetwork::Xdai => XDAI_REFERENCE,
    }
}

/// Wrapped-native token address for a network
pub const fn wrapped_native_token(network: SupportedNetwork) -> Address {
    match network {
        SupportedNetwork::Mainnet => wrapped::MAINNET_WETH,
        SupportedNetwork::Rinkeby => wrapped::RINKEBY_WETH,
        SupportedNetwork::Goerli => wrapped::GOERLI_WETH,
        SupportedNetwork::Xdai => wrapped::XDAI_WXDAI,
    }
}

/// Display symbol of a network's native currency
pub const fn native_symbol(network: SupportedNetwork) -> &'static str {
    match network {
        SupportedNetwork::Mainnet | SupportedNetwork::Rinkeby | SupportedNetwork::Goerli => "ETH",
        SupportedNetwork::Xdai => "XDAI",
    }
}
