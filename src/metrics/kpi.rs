// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::grouping::{delivery_status_counts, sales_by_month};
use crate::metrics::ratio::{growth_rate, percentage, ratio, utilization};
use crate::models::{
    DeliveryStatus, KpiSummary, PurchaseLineRecord, SaleRecord, Summary, Trend, WarehouseRecord,
};
use crate::utils::{fmt_count, fmt_money, fmt_percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference values the purchase and warehouse trends are judged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiThresholds {
    /// On-target share (percent) at or above which deliveries trend up.
    pub on_target_min: Decimal,
    /// Under-delivery share (percent) tolerated before trending down.
    pub under_delivery_max: Decimal,
    pub over_delivery_max: Decimal,
    /// Warehouse utilization (percent) above which a site is flagged.
    pub utilization_max: Decimal,
}

impl Default for KpiThresholds {
    fn default() -> Self {
        KpiThresholds {
            on_target_min: Decimal::from(90),
            under_delivery_max: Decimal::from(5),
            over_delivery_max: Decimal::from(5),
            utilization_max: Decimal::from(80),
        }
    }
}

pub fn summarize(values: impl IntoIterator<Item = Decimal>) -> Summary {
    let mut total = Decimal::ZERO;
    let mut count = 0usize;
    for v in values {
        total += v;
        count += 1;
    }
    Summary {
        total,
        count,
        average: ratio(total, Decimal::from(count)),
    }
}

/// Trend of the last period against the one before it, neutral when the
/// series is too short to have a reference.
fn period_trend(series: &[Decimal]) -> (Trend, Decimal) {
    match series {
        [.., previous, current] => (
            Trend::compare(*current, *previous),
            growth_rate(*current, *previous),
        ),
        _ => (Trend::Neutral, Decimal::ZERO),
    }
}

/// Headline sales figures. Each sale line counts as one order; growth is
/// the last calendar month against the month before it.
pub fn sales_kpis(sales: &[SaleRecord]) -> Vec<KpiSummary> {
    let revenue = summarize(sales.iter().map(|s| s.total));
    let months = sales_by_month(sales);

    let monthly_revenue: Vec<Decimal> = months.iter().map(|m| m.revenue).collect();
    let monthly_orders: Vec<Decimal> = months.iter().map(|m| Decimal::from(m.orders)).collect();
    let monthly_avg: Vec<Decimal> = months
        .iter()
        .map(|m| ratio(m.revenue, Decimal::from(m.orders)))
        .collect();

    let (revenue_trend, revenue_change) = period_trend(&monthly_revenue);
    let (orders_trend, orders_change) = period_trend(&monthly_orders);
    let (avg_trend, avg_change) = period_trend(&monthly_avg);
    let growth_trend = if months.len() < 2 {
        Trend::Neutral
    } else {
        Trend::compare(revenue_change, Decimal::ZERO)
    };

    vec![
        KpiSummary::new("Total Revenue", fmt_money(&revenue.total), revenue_trend)
            .with_change(revenue_change),
        KpiSummary::new("Total Orders", fmt_count(revenue.count as i64), orders_trend)
            .with_change(orders_change),
        KpiSummary::new("Avg Order Value", fmt_money(&revenue.average), avg_trend)
            .with_change(avg_change),
        KpiSummary::new("Growth Rate", fmt_percent(&revenue_change), growth_trend),
    ]
}

pub fn purchase_kpis(lines: &[PurchaseLineRecord], thresholds: &KpiThresholds) -> Vec<KpiSummary> {
    let ordered: i64 = lines.iter().map(|l| l.ordered_outers).sum();
    let received: i64 = lines.iter().map(|l| l.received_outers).sum();
    let difference: i64 = lines.iter().map(|l| l.difference_outers).sum();
    let expected_amount: Decimal = lines.iter().map(|l| l.expected_amount).sum();
    let received_amount: Decimal = lines.iter().map(|l| l.received_amount).sum();

    let whole = Decimal::from(lines.len());
    let counts = delivery_status_counts(lines);
    let share_of = |status: DeliveryStatus| -> Decimal {
        let n = counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0);
        percentage(Decimal::from(n), whole)
    };
    let on_target = share_of(DeliveryStatus::OnTarget);
    let under = share_of(DeliveryStatus::UnderDelivered);
    let over = share_of(DeliveryStatus::OverDelivered);

    let ordered_trend = if ordered > 0 { Trend::Up } else { Trend::Neutral };
    let difference_trend = match difference {
        0 => Trend::Neutral,
        d if d > 0 => Trend::Up,
        _ => Trend::Down,
    };
    let on_target_trend = if on_target >= thresholds.on_target_min {
        Trend::Up
    } else {
        Trend::Neutral
    };

    vec![
        KpiSummary::new("Total Ordered Quantity", fmt_count(ordered), ordered_trend),
        KpiSummary::new(
            "Total Received Quantity",
            fmt_count(received),
            Trend::compare(received, ordered),
        ),
        KpiSummary::new("Expected Amount", fmt_money(&expected_amount), Trend::Neutral),
        KpiSummary::new(
            "Received Amount",
            fmt_money(&received_amount),
            Trend::compare(received_amount, expected_amount),
        ),
        KpiSummary::new("Quantity Difference", fmt_count(difference), difference_trend),
        KpiSummary::new("On-target Deliveries", fmt_percent(&on_target), on_target_trend),
        KpiSummary::new(
            "Under Delivery",
            fmt_percent(&under),
            Trend::compare(thresholds.under_delivery_max, under),
        ),
        KpiSummary::new(
            "Over Delivery",
            fmt_percent(&over),
            Trend::compare(thresholds.over_delivery_max, over),
        ),
    ]
}

pub fn warehouse_kpis(warehouses: &[WarehouseRecord], thresholds: &KpiThresholds) -> Vec<KpiSummary> {
    let capacity: i64 = warehouses.iter().map(|w| w.capacity).sum();
    let stock: i64 = warehouses.iter().map(|w| w.current_stock).sum();
    let used = utilization(stock, capacity);
    vec![
        KpiSummary::new("Total Capacity", fmt_count(capacity), Trend::Neutral),
        KpiSummary::new("Current Stock", fmt_count(stock), Trend::Neutral),
        KpiSummary::new(
            "Utilization",
            fmt_percent(&used),
            Trend::compare(thresholds.utilization_max, used),
        ),
        KpiSummary::new(
            "Active Locations",
            fmt_count(warehouses.len() as i64),
            Trend::Neutral,
        ),
    ]
}
