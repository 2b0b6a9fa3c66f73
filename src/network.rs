// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The closed set of networks with a settlement deployment
//!
//! A [`SupportedNetwork`] carries no behaviour of its own. It is the key into
//! the static tables in [`crate::constants`] and selects the cost label layout
//! in [`crate::format::format_cost_label`].

use std::str::FromStr;

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

use crate::errors::NetworkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedNetwork {
    Mainnet,
    Rinkeby,
    Goerli,
    /// Gnosis Chain, whose native currency is xDAI
    #[serde(alias = "gnosis")]
    Xdai,
}

impl SupportedNetwork {
    /// Every supported network, in chain id order
    pub const ALL: [Self; 4] = [Self::Mainnet, Self::Rinkeby, Self::Goerli, Self::Xdai];

    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Xdai => 100,
        }
    }

    pub const fn named_chain(self) -> NamedChain {
        match self {
            Self::Mainnet => NamedChain::Mainnet,
            Self::Rinkeby => NamedChain::Rinkeby,
            Self::Goerli => NamedChain::Goerli,
            Self::Xdai => NamedChain::Gnosis,
        }
    }

    /// Lowercase network name, as used in configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Rinkeby => "rinkeby",
            Self::Goerli => "goerli",
            Self::Xdai => "xdai",
        }
    }
}

impl std::fmt::Display for SupportedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedNetwork {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "rinkeby" => Ok(Self::Rinkeby),
            "goerli" => Ok(Self::Goerli),
            "xdai" | "gnosis" => Ok(Self::Xdai),
            _ => Err(NetworkError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u64> for SupportedNetwork {
    type Error = NetworkError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
            .ok_or(NetworkError::UnknownChainId(chain_id))
    }
}

impl TryFrom<NamedChain> for SupportedNetwork {
    type Error = NetworkError;

    fn try_from(chain: NamedChain) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|network| network.named_chain() == chain)
            .ok_or(NetworkError::UnsupportedChain(chain))
    }
}

impl From<SupportedNetwork> for NamedChain {
    fn from(network: SupportedNetwork) -> Self {
        network.named_chain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_ids_match_named_chains() {
        for network in SupportedNetwork::ALL {
            assert_eq!(network.named_chain() as u64, network.chain_id());
        }
    }

    #[test]
    fn test_try_from_chain_id() {
        assert_eq!(SupportedNetwork::try_from(1u64), Ok(SupportedNetwork::Mainnet));
        assert_eq!(SupportedNetwork::try_from(100u64), Ok(SupportedNetwork::Xdai));
        assert_eq!(
            SupportedNetwork::try_from(42161u64),
            Err(NetworkError::UnknownChainId(42161))
        );
    }

    #[test]
    fn test_try_from_named_chain() {
        assert_eq!(
            SupportedNetwork::try_from(NamedChain::Gnosis),
            Ok(SupportedNetwork::Xdai)
        );
        assert_eq!(
            SupportedNetwork::try_from(NamedChain::Base),
            Err(NetworkError::UnsupportedChain(NamedChain::Base))
        );
        assert_eq!(NamedChain::from(SupportedNetwork::Goerli), NamedChain::Goerli);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mainnet".parse(), Ok(SupportedNetwork::Mainnet));
        assert_eq!(" XDAI ".parse(), Ok(SupportedNetwork::Xdai));
        assert_eq!("gnosis".parse(), Ok(SupportedNetwork::Xdai));
        assert_eq!(
            "polygon".parse::<SupportedNetwork>(),
            Err(NetworkError::UnknownName("polygon".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for network in SupportedNetwork::ALL {
            assert_eq!(network.to_string().parse(), Ok(network));
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&SupportedNetwork::Xdai).unwrap(),
            "\"xdai\""
        );
        let network: SupportedNetwork = serde_json::from_str("\"gnosis\"").unwrap();
        assert_eq!(network, SupportedNetwork::Xdai);
    }
}
