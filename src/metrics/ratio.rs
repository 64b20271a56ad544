// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ChartPoint, RatioBucket, SalesVsPurchase, SharePoint};
use rust_decimal::Decimal;

/// `numerator / denominator`, or zero when the division is undefined.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole).saturating_mul(Decimal::ONE_HUNDRED)
}

/// Percent change from `previous` to `current`; zero when there is no
/// previous value to compare against.
pub fn growth_rate(current: Decimal, previous: Decimal) -> Decimal {
    percentage(current - previous, previous)
}

/// Share of each point against an externally supplied whole.
pub fn distribution(points: &[ChartPoint], whole: Decimal) -> Vec<SharePoint> {
    points
        .iter()
        .map(|p| SharePoint {
            name: p.name.clone(),
            value: p.value,
            percentage: percentage(p.value, whole),
        })
        .collect()
}

/// Share of each point against the sum of all points.
pub fn shares(points: &[ChartPoint]) -> Vec<SharePoint> {
    let whole: Decimal = points.iter().map(|p| p.value).sum();
    distribution(points, whole)
}

pub fn utilization(current: i64, capacity: i64) -> Decimal {
    percentage(Decimal::from(current), Decimal::from(capacity))
}

const BUCKETS: [(&str, i64, Option<i64>); 4] = [
    ("0-1%", 0, Some(1)),
    ("1-5%", 1, Some(5)),
    ("5-10%", 5, Some(10)),
    ("10%+", 10, None),
];

/// Histogram of sales-to-purchase ratios in percent. Ratios below zero
/// fall into the first bucket.
pub fn ratio_buckets(rows: &[SalesVsPurchase]) -> Vec<RatioBucket> {
    BUCKETS
        .iter()
        .enumerate()
        .map(|(i, (range, lo, hi))| {
            let count = rows
                .iter()
                .map(|r| r.sales_to_purchase_ratio.saturating_mul(Decimal::ONE_HUNDRED))
                .filter(|pct| {
                    let above = i == 0 || *pct >= Decimal::from(*lo);
                    let below = hi.is_none_or(|h| *pct < Decimal::from(h));
                    above && below
                })
                .count();
            RatioBucket {
                range: range.to_string(),
                count,
            }
        })
        .collect()
}
