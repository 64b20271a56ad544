// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::ratio::growth_rate;
use crate::models::{
    ChartPoint, DeliveryStatus, DerivedLocationView, DerivedProductView, DerivedStockItemView,
    DerivedSupplierView, PeriodSales, PurchaseLineRecord, SaleRecord, SalesVsPurchase,
};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::hash::Hash;

/// Fold `records` into one accumulator per distinct key.
///
/// `seed` runs once, on the first record seen for a key, and fixes the
/// accumulator's descriptive fields. `absorb` then runs for every record,
/// the first one included. Output keeps first-seen order.
pub fn group_by<'a, R, K, A>(
    records: &'a [R],
    key: impl Fn(&'a R) -> K,
    seed: impl Fn(&'a R) -> A,
    absorb: impl Fn(&mut A, &'a R),
) -> Vec<A>
where
    K: Eq + Hash,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<A> = Vec::new();
    for rec in records {
        let slot = match index.entry(key(rec)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                out.push(seed(rec));
                *entry.insert(out.len() - 1)
            }
        };
        absorb(&mut out[slot], rec);
    }
    out
}

fn points_by<'a, R>(
    records: &'a [R],
    name: impl Fn(&'a R) -> &'a str,
    value: impl Fn(&R) -> Decimal,
) -> Vec<ChartPoint> {
    group_by(
        records,
        &name,
        |r| ChartPoint {
            name: name(r).to_string(),
            value: Decimal::ZERO,
        },
        |p, r| p.value += value(r),
    )
}

pub fn products_from_sales(sales: &[SaleRecord]) -> Vec<DerivedProductView> {
    group_by(
        sales,
        |s| s.stock_item_name.as_str(),
        |s| DerivedProductView {
            product_id: s.stock_item_key,
            name: s.stock_item_name.clone(),
            category: s.category.clone(),
            sales: 0,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
        },
        |p, s| {
            p.sales += s.quantity;
            p.revenue += s.total;
            p.profit += s.profit;
        },
    )
}

pub fn locations_from_sales(sales: &[SaleRecord]) -> Vec<DerivedLocationView> {
    group_by(
        sales,
        |s| s.city_key,
        |s| DerivedLocationView {
            location_id: s.city_key,
            stock_movement: 0,
            revenue: Decimal::ZERO,
            lines: 0,
        },
        |l, s| {
            l.stock_movement += s.quantity;
            l.revenue += s.total;
            l.lines += 1;
        },
    )
}

/// Purchase amount is the expected (ordered) amount; `number_of_orders`
/// counts distinct purchase orders, not lines.
pub fn suppliers_from_purchases(lines: &[PurchaseLineRecord]) -> Vec<DerivedSupplierView> {
    group_by(
        lines,
        |l| l.supplier_name.as_str(),
        |l| {
            (
                DerivedSupplierView {
                    supplier_name: l.supplier_name.clone(),
                    total_purchase_amount: Decimal::ZERO,
                    total_ordered_outers: 0,
                    number_of_orders: 0,
                },
                HashSet::<i64>::new(),
            )
        },
        |(v, orders), l| {
            v.total_purchase_amount += l.expected_amount;
            v.total_ordered_outers += l.ordered_outers;
            orders.insert(l.purchase_order_id);
        },
    )
    .into_iter()
    .map(|(mut v, orders)| {
        v.number_of_orders = orders.len();
        v
    })
    .collect()
}

pub fn stock_items_from_purchases(lines: &[PurchaseLineRecord]) -> Vec<DerivedStockItemView> {
    group_by(
        lines,
        |l| l.stock_item_name.as_str(),
        |l| DerivedStockItemView {
            stock_item_name: l.stock_item_name.clone(),
            total_ordered_outers: 0,
            total_amount: Decimal::ZERO,
        },
        |v, l| {
            v.total_ordered_outers += l.ordered_outers;
            v.total_amount += l.expected_amount;
        },
    )
}

pub fn sales_by_delivery_method(sales: &[SaleRecord]) -> Vec<ChartPoint> {
    points_by(sales, |s| s.delivery_method.as_str(), |s| s.total)
}

pub fn sales_by_package_type(sales: &[SaleRecord]) -> Vec<ChartPoint> {
    points_by(sales, |s| s.package_type.as_str(), |s| s.total)
}

/// Quantity sold per category.
pub fn sales_by_category(sales: &[SaleRecord]) -> Vec<ChartPoint> {
    points_by(sales, |s| s.category.as_str(), |s| Decimal::from(s.quantity))
}

pub fn purchases_by_package_type(lines: &[PurchaseLineRecord]) -> Vec<ChartPoint> {
    points_by(lines, |l| l.package_type.as_str(), |l| l.expected_amount)
}

/// Monthly revenue series in calendar order, with month-over-month growth.
pub fn sales_by_month(sales: &[SaleRecord]) -> Vec<PeriodSales> {
    let mut months = group_by(
        sales,
        |s| s.date.format("%Y-%m").to_string(),
        |s| PeriodSales {
            period: s.date.format("%Y-%m").to_string(),
            revenue: Decimal::ZERO,
            orders: 0,
            growth: Decimal::ZERO,
        },
        |p, s| {
            p.revenue += s.total;
            p.orders += 1;
        },
    );
    months.sort_by(|a, b| a.period.cmp(&b.period));
    for i in 1..months.len() {
        months[i].growth = growth_rate(months[i].revenue, months[i - 1].revenue);
    }
    months
}

/// Line count per delivery status, every status present even at zero.
pub fn delivery_status_counts(lines: &[PurchaseLineRecord]) -> Vec<(DeliveryStatus, usize)> {
    DeliveryStatus::ALL
        .iter()
        .map(|status| {
            let n = lines
                .iter()
                .filter(|l| l.delivery_status == *status)
                .count();
            (*status, n)
        })
        .collect()
}

/// Join sales and purchases on stock item name. Purchased items come first
/// in purchase order, followed by items that were sold but never purchased.
pub fn sales_vs_purchases(
    sales: &[SaleRecord],
    purchases: &[PurchaseLineRecord],
) -> Vec<SalesVsPurchase> {
    let sold = products_from_sales(sales);
    let bought = stock_items_from_purchases(purchases);
    let mut sold_by_name: HashMap<&str, &DerivedProductView> =
        sold.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut rows = Vec::with_capacity(bought.len());
    for item in &bought {
        let (qty, amount) = match sold_by_name.remove(item.stock_item_name.as_str()) {
            Some(p) => (p.sales, p.revenue),
            None => (0, Decimal::ZERO),
        };
        rows.push(compare_row(
            &item.stock_item_name,
            qty,
            amount,
            item.total_ordered_outers,
            item.total_amount,
        ));
    }
    for p in &sold {
        if sold_by_name.contains_key(p.name.as_str()) {
            rows.push(compare_row(&p.name, p.sales, p.revenue, 0, Decimal::ZERO));
        }
    }
    rows
}

fn compare_row(
    name: &str,
    sales_quantity: i64,
    sales_amount: Decimal,
    purchase_quantity: i64,
    purchase_amount: Decimal,
) -> SalesVsPurchase {
    SalesVsPurchase {
        stock_item_name: name.to_string(),
        sales_quantity,
        sales_amount,
        purchase_quantity,
        purchase_amount,
        quantity_difference: sales_quantity - purchase_quantity,
        amount_difference: sales_amount - purchase_amount,
        sales_to_purchase_ratio: crate::metrics::ratio::ratio(sales_amount, purchase_amount),
    }
}

/// Row filter applied to sales before any grouping.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    pub category: Option<String>,
    pub name_pattern: Option<Regex>,
}

impl SalesFilter {
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        if let Some(cat) = &self.category {
            if !cat.eq_ignore_ascii_case("all") && !sale.category.eq_ignore_ascii_case(cat) {
                return false;
            }
        }
        match &self.name_pattern {
            Some(re) => re.is_match(&sale.stock_item_name),
            None => true,
        }
    }
}

pub fn filter_sales(sales: &[SaleRecord], filter: &SalesFilter) -> Vec<SaleRecord> {
    sales.iter().filter(|s| filter.matches(s)).cloned().collect()
}

/// Distinct categories in first-seen order.
pub fn categories(sales: &[SaleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    sales
        .iter()
        .filter(|s| seen.insert(s.category.as_str()))
        .map(|s| s.category.clone())
        .collect()
}
