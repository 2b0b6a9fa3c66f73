// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across tradevalue.
//!
//! - Token amounts and decimals
//! - Reference currency metadata
//! - ERC-20 and native token references

pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
