// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for fixed-point formatting
//!
//! These tests use proptest to validate digit-placement invariants across a
//! wide range of amounts and decimal counts.

use num_bigint::BigUint;
use proptest::prelude::*;
use tradevalue::{format_token_value, rescale, to_fixed_string, TokenDecimals};

// Helper to generate amounts from zero up to well past u64
fn arb_amount() -> impl Strategy<Value = BigUint> {
    prop_oneof![
        Just(0u128),
        0u128..1_000,
        any::<u64>().prop_map(u128::from),
        any::<u128>(),
    ]
    .prop_map(BigUint::from)
}

// Helper to generate decimal counts, weighted toward the common ones
fn arb_decimals() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0u8), Just(2u8), Just(6u8), Just(18u8), 0u8..=40]
}

proptest! {
    /// Property: the fractional part always has exactly `decimals` digits
    #[test]
    fn prop_fraction_has_exact_width(amount in arb_amount(), decimals in arb_decimals()) {
        let rendered = to_fixed_string(&amount, decimals);

        prop_assert_eq!(rendered.matches('.').count(), 1, "Exactly one decimal point: {}", rendered);
        let (integer, fraction) = rendered.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), usize::from(decimals));
        prop_assert!(!integer.is_empty());
        prop_assert!(integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()));
    }

    /// Property: removing the point recovers the original digits
    #[test]
    fn prop_rendering_is_lossless(amount in arb_amount(), decimals in arb_decimals()) {
        let rendered = to_fixed_string(&amount, decimals);
        let digits: String = rendered.chars().filter(|c| *c != '.').collect();

        prop_assert_eq!(digits.parse::<BigUint>().unwrap(), amount);
    }

    /// Property: scaling up and back down is exact
    #[test]
    fn prop_up_then_down_is_identity(
        amount in arb_amount(),
        from in 0u8..=36,
        extra in 0u8..=36,
    ) {
        let to = from + extra;
        prop_assert_eq!(rescale(&rescale(&amount, from, to), to, from), amount);
    }

    /// Property: scaling down and back up truncates to a multiple of the dropped scale
    #[test]
    fn prop_down_then_up_truncates(
        amount in arb_amount(),
        to in 0u8..=36,
        dropped in 0u8..=36,
    ) {
        let from = to + dropped;
        let scale = TokenDecimals::new(dropped).scale();
        let expected = &amount - (&amount % &scale);

        prop_assert_eq!(rescale(&rescale(&amount, from, to), to, from), expected);
    }

    /// Property: displaying with fewer decimals never rounds up
    #[test]
    fn prop_display_truncates(amount in any::<u64>(), dropped in 1u8..=10) {
        let actual = 2 + dropped;
        let shown = format_token_value(amount, actual, 2);
        let exact = to_fixed_string(&BigUint::from(amount), actual);

        prop_assert!(exact.starts_with(&shown), "{} is not a prefix of {}", shown, exact);
    }
}

#[test]
fn test_fixed_width_for_common_decimals() {
    let cases: &[(u128, u8, &str)] = &[
        (0, 0, "0."),
        (0, 2, "0.00"),
        (0, 18, "0.000000000000000000"),
        (7, 2, "0.07"),
        (7, 18, "0.000000000000000007"),
        (1_230, 2, "12.30"),
        (1_500_000_000_000_000_000, 18, "1.500000000000000000"),
        (40, 0, "40."),
    ];

    for (amount, decimals, expected) in cases {
        assert_eq!(
            to_fixed_string(&BigUint::from(*amount), *decimals),
            *expected,
            "amount {amount} at {decimals} decimals"
        );
    }
}

#[test]
fn test_truncation_scenarios() {
    assert_eq!(format_token_value(1_234_567_890_000_000_000u128, 18, 2), "1.23");
    assert_eq!(format_token_value(1_239_999_999_999_999_999u128, 18, 2), "1.23");
    assert_eq!(format_token_value(5u64, 2, 2), "0.05");
}
