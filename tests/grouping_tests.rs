// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use regex::Regex;
use rust_decimal::Decimal;
use salesboard::metrics::grouping::{
    SalesFilter, categories, delivery_status_counts, filter_sales, locations_from_sales,
    products_from_sales, sales_by_delivery_method, sales_by_month, sales_vs_purchases,
    suppliers_from_purchases,
};
use salesboard::metrics::ranking::top_n;
use salesboard::models::{DeliveryStatus, PurchaseLineRecord, SaleRecord};
use std::collections::HashSet;

fn sale(key: i64, name: &str, category: &str, qty: i64, total: i64) -> SaleRecord {
    SaleRecord {
        sale_key: key,
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        stock_item_key: key * 10,
        quantity: qty,
        total: Decimal::from(total),
        profit: Decimal::ZERO,
        customer_key: 1,
        sales_person_key: 1,
        package_type: "Each".into(),
        delivery_method: if key % 2 == 0 { "Courier" } else { "Van" }.into(),
        city_key: 100 + key % 3,
        stock_item_name: name.into(),
        category: category.into(),
    }
}

fn sale_in(month: u32, total: i64) -> SaleRecord {
    let mut s = sale(month as i64, "A", "Cat", 1, total);
    s.date = NaiveDate::from_ymd_opt(2025, month, 1).unwrap();
    s
}

fn line(
    order: i64,
    supplier: &str,
    item: &str,
    ordered: i64,
    received: i64,
    amount: i64,
) -> PurchaseLineRecord {
    PurchaseLineRecord {
        purchase_order_id: order,
        stock_item_key: 1,
        stock_item_name: item.into(),
        supplier_name: supplier.into(),
        package_type: "Carton".into(),
        ordered_outers: ordered,
        received_outers: received,
        difference_outers: received - ordered,
        delivery_status: DeliveryStatus::classify(ordered, received),
        expected_amount: Decimal::from(amount),
        received_amount: Decimal::from(amount),
    }
}

#[test]
fn products_grouped_by_name_and_ranked() {
    let sales = vec![
        sale(1, "A", "X", 2, 20),
        sale(2, "A", "X", 3, 30),
        sale(3, "B", "X", 1, 100),
    ];
    let products = products_from_sales(&sales);
    assert_eq!(products.len(), 2);
    assert_eq!((products[0].name.as_str(), products[0].sales), ("A", 5));
    assert_eq!(products[0].revenue, Decimal::from(50));
    assert_eq!((products[1].name.as_str(), products[1].sales), ("B", 1));
    assert_eq!(products[1].revenue, Decimal::from(100));

    let top = top_n(&products, 1, |p| p.revenue);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "B");
}

#[test]
fn descriptive_fields_fixed_at_first_occurrence() {
    let sales = vec![sale(1, "A", "First", 1, 1), sale(2, "A", "Second", 1, 1)];
    let products = products_from_sales(&sales);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].category, "First");
    assert_eq!(products[0].product_id, 10);
}

#[test]
fn output_keeps_first_seen_order() {
    let sales = vec![
        sale(1, "C", "X", 1, 1),
        sale(2, "A", "X", 1, 1),
        sale(3, "C", "X", 1, 1),
        sale(4, "B", "X", 1, 1),
    ];
    let names: Vec<String> = products_from_sales(&sales).into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    assert_eq!(
        sales_by_delivery_method(&sales)
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>(),
        vec!["Van", "Courier"]
    );
}

#[test]
fn locations_accumulate_movement_and_lines() {
    let sales = vec![
        sale(1, "A", "X", 4, 10),
        sale(4, "B", "X", 6, 20),
        sale(2, "C", "X", 1, 5),
    ];
    let locations = locations_from_sales(&sales);
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].location_id, 101);
    assert_eq!(locations[0].stock_movement, 10);
    assert_eq!(locations[0].revenue, Decimal::from(30));
    assert_eq!(locations[0].lines, 2);
    assert_eq!(locations[1].location_id, 102);
}

#[test]
fn suppliers_count_distinct_orders() {
    let lines = vec![
        line(1, "Fabrikam", "Shirt", 10, 10, 100),
        line(1, "Fabrikam", "Mug", 5, 5, 50),
        line(2, "Fabrikam", "Mug", 5, 4, 50),
        line(3, "Litware", "Cable", 7, 7, 70),
    ];
    let suppliers = suppliers_from_purchases(&lines);
    assert_eq!(suppliers.len(), 2);
    assert_eq!(suppliers[0].supplier_name, "Fabrikam");
    assert_eq!(suppliers[0].number_of_orders, 2);
    assert_eq!(suppliers[0].total_ordered_outers, 20);
    assert_eq!(suppliers[0].total_purchase_amount, Decimal::from(200));
    assert_eq!(suppliers[1].number_of_orders, 1);
}

#[test]
fn months_sorted_with_growth() {
    let sales = vec![sale_in(3, 150), sale_in(1, 100), sale_in(2, 150)];
    let months = sales_by_month(&sales);
    let periods: Vec<&str> = months.iter().map(|m| m.period.as_str()).collect();
    assert_eq!(periods, vec!["2025-01", "2025-02", "2025-03"]);
    assert_eq!(months[0].growth, Decimal::ZERO);
    assert_eq!(months[1].growth, Decimal::from(50));
    assert_eq!(months[2].growth, Decimal::ZERO);
}

#[test]
fn status_counts_include_empty_partitions() {
    let lines = vec![line(1, "S", "I", 10, 10, 1), line(2, "S", "I", 10, 8, 1)];
    assert_eq!(
        delivery_status_counts(&lines),
        vec![
            (DeliveryStatus::OnTarget, 1),
            (DeliveryStatus::UnderDelivered, 1),
            (DeliveryStatus::OverDelivered, 0),
        ]
    );
}

#[test]
fn filter_by_category_and_pattern() {
    let sales = vec![
        sale(1, "Laptop Pro", "Electronics", 1, 1),
        sale(2, "Wireless Mouse", "Accessories", 1, 1),
        sale(3, "USB-C Hub", "Accessories", 1, 1),
    ];
    let by_cat = SalesFilter {
        category: Some("Accessories".into()),
        name_pattern: None,
    };
    assert_eq!(filter_sales(&sales, &by_cat).len(), 2);

    let lower = SalesFilter {
        category: Some("accessories".into()),
        name_pattern: None,
    };
    assert_eq!(filter_sales(&sales, &lower).len(), 2);

    let by_name = SalesFilter {
        category: Some("all".into()),
        name_pattern: Some(Regex::new("(?i)usb").unwrap()),
    };
    let hits = filter_sales(&sales, &by_name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].stock_item_name, "USB-C Hub");

    assert_eq!(categories(&sales), vec!["Electronics", "Accessories"]);
}

#[test]
fn sales_joined_with_purchases() {
    let sales = vec![sale(1, "Mug", "X", 4, 40), sale(2, "Pen", "X", 2, 6)];
    let lines = vec![
        line(1, "S", "Mug", 10, 10, 50),
        line(2, "S", "Shirt", 3, 3, 30),
    ];
    let rows = sales_vs_purchases(&sales, &lines);
    let names: Vec<&str> = rows.iter().map(|r| r.stock_item_name.as_str()).collect();
    assert_eq!(names, vec!["Mug", "Shirt", "Pen"]);

    assert_eq!(rows[0].quantity_difference, -6);
    assert_eq!(rows[0].amount_difference, Decimal::from(-10));
    assert_eq!(rows[0].sales_to_purchase_ratio, Decimal::new(8, 1));

    assert_eq!(rows[1].sales_quantity, 0);
    assert_eq!(rows[1].sales_to_purchase_ratio, Decimal::ZERO);

    assert_eq!(rows[2].purchase_quantity, 0);
    assert_eq!(rows[2].quantity_difference, 2);
    assert_eq!(rows[2].sales_to_purchase_ratio, Decimal::ZERO);
}

proptest! {
    #[test]
    fn grouping_conserves_totals(
        raw in prop::collection::vec((0usize..6, 0i64..1000, 0i64..1_000_000), 0..60)
    ) {
        let names = ["A", "B", "C", "D", "E", "F"];
        let sales: Vec<SaleRecord> = raw
            .iter()
            .enumerate()
            .map(|(i, (n, qty, cents))| {
                let mut s = sale(i as i64, names[*n], "X", *qty, 0);
                s.total = Decimal::new(*cents, 2);
                s
            })
            .collect();
        let products = products_from_sales(&sales);

        let qty_in: i64 = sales.iter().map(|s| s.quantity).sum();
        let qty_out: i64 = products.iter().map(|p| p.sales).sum();
        prop_assert_eq!(qty_in, qty_out);

        let rev_in: Decimal = sales.iter().map(|s| s.total).sum();
        let rev_out: Decimal = products.iter().map(|p| p.revenue).sum();
        prop_assert_eq!(rev_in, rev_out);

        let keys: HashSet<&str> = products.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(keys.len(), products.len());
    }
}
