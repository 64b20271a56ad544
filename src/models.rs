// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sale line as returned by `/api/Sale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub sale_key: i64,
    pub date: NaiveDate,
    pub stock_item_key: i64,
    pub quantity: i64,
    pub total: Decimal,
    pub profit: Decimal,
    pub customer_key: i64,
    pub sales_person_key: i64,
    pub package_type: String,
    pub delivery_method: String,
    pub city_key: i64,
    pub stock_item_name: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "Conforme", alias = "OnTarget", alias = "on-target")]
    OnTarget,
    #[serde(rename = "Sous-livré", alias = "UnderDelivered", alias = "under-delivered")]
    UnderDelivered,
    #[serde(rename = "Sur-livré", alias = "OverDelivered", alias = "over-delivered")]
    OverDelivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::OnTarget,
        DeliveryStatus::UnderDelivered,
        DeliveryStatus::OverDelivered,
    ];

    pub fn classify(ordered: i64, received: i64) -> Self {
        match received.cmp(&ordered) {
            std::cmp::Ordering::Equal => DeliveryStatus::OnTarget,
            std::cmp::Ordering::Less => DeliveryStatus::UnderDelivered,
            std::cmp::Ordering::Greater => DeliveryStatus::OverDelivered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::OnTarget => "On target",
            DeliveryStatus::UnderDelivered => "Under delivered",
            DeliveryStatus::OverDelivered => "Over delivered",
        }
    }
}

/// One purchase-order line as returned by `/api/Purchase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLineRecord {
    pub purchase_order_id: i64,
    pub stock_item_key: i64,
    pub stock_item_name: String,
    pub supplier_name: String,
    pub package_type: String,
    pub ordered_outers: i64,
    pub received_outers: i64,
    pub difference_outers: i64,
    pub delivery_status: DeliveryStatus,
    pub expected_amount: Decimal,
    pub received_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseRecord {
    pub id: String,
    pub location: String,
    pub capacity: i64,
    pub current_stock: i64,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProductView {
    pub product_id: i64,
    pub name: String,
    pub category: String,
    pub sales: i64,
    pub revenue: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedLocationView {
    pub location_id: i64,
    pub stock_movement: i64,
    pub revenue: Decimal,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSupplierView {
    pub supplier_name: String,
    pub total_purchase_amount: Decimal,
    pub total_ordered_outers: i64,
    pub number_of_orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStockItemView {
    pub stock_item_name: String,
    pub total_ordered_outers: i64,
    pub total_amount: Decimal,
}

/// Revenue for one calendar month. `growth` is the percent change against
/// the previous month in the same series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSales {
    pub period: String, // YYYY-MM
    pub revenue: Decimal,
    pub orders: i64,
    pub growth: Decimal,
}

/// Sales and purchases of one stock item side by side. Differences are
/// sales minus purchase, so a negative value means stock is piling up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesVsPurchase {
    pub stock_item_name: String,
    pub sales_quantity: i64,
    pub sales_amount: Decimal,
    pub purchase_quantity: i64,
    pub purchase_amount: Decimal,
    pub quantity_difference: i64,
    pub amount_difference: Decimal,
    pub sales_to_purchase_ratio: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePoint {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioBucket {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// `Up` when `current` reaches the reference, `Down` otherwise.
    pub fn compare<T: PartialOrd>(current: T, reference: T) -> Self {
        if current >= reference {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "–",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub label: String,
    pub value: String,
    pub trend: Trend,
    pub change: Option<Decimal>,
}

impl KpiSummary {
    pub fn new(label: &str, value: String, trend: Trend) -> Self {
        KpiSummary {
            label: label.to_string(),
            value,
            trend,
            change: None,
        }
    }

    pub fn with_change(mut self, change: Decimal) -> Self {
        self.change = Some(change);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
}
