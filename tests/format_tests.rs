// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salesboard::utils::{
    bar, fmt_compact_money, fmt_count, fmt_money, fmt_percent, fmt_signed_percent,
};

#[test]
fn counts_use_thousands_separators() {
    assert_eq!(fmt_count(0), "0");
    assert_eq!(fmt_count(999), "999");
    assert_eq!(fmt_count(1_575_453), "1,575,453");
    assert_eq!(fmt_count(-1000), "-1,000");
}

#[test]
fn money_formats() {
    assert_eq!(fmt_money(&Decimal::new(123456789, 2)), "$1,234,567.89");
    assert_eq!(fmt_money(&Decimal::new(-123456, 2)), "-$1,234.56");
    assert_eq!(fmt_money(&Decimal::new(-1, 3)), "$0.00");
    assert_eq!(fmt_money(&Decimal::new(3135, 1)), "$313.50");
}

#[test]
fn compact_money_suffixes() {
    assert_eq!(fmt_compact_money(&Decimal::from(1_500_000_000)), "$1.50B");
    assert_eq!(fmt_compact_money(&Decimal::from(-2_500_000)), "-$2.50M");
    assert_eq!(fmt_compact_money(&Decimal::from(2500)), "$2.5K");
    assert_eq!(fmt_compact_money(&Decimal::from(504)), "$504.00");
}

#[test]
fn percent_formats() {
    assert_eq!(fmt_percent(&Decimal::new(33333, 3)), "33.3%");
    assert_eq!(fmt_signed_percent(&Decimal::from(12)), "+12.0%");
    assert_eq!(fmt_signed_percent(&Decimal::new(-326, 2)), "-3.3%");
    assert_eq!(fmt_signed_percent(&Decimal::ZERO), "+0.0%");
}

#[test]
fn bars_scale_to_max() {
    assert_eq!(bar(Decimal::from(5), Decimal::from(10), 10).chars().count(), 5);
    assert_eq!(bar(Decimal::from(20), Decimal::from(10), 10).chars().count(), 10);
    assert_eq!(bar(Decimal::from(1), Decimal::ZERO, 10), "");
}
