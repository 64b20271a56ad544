// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed datasets shown when the backend is unreachable or returns nothing.

use crate::models::{DeliveryStatus, PurchaseLineRecord, SaleRecord, WarehouseRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackData {
    pub sales: Vec<SaleRecord>,
    pub purchases: Vec<PurchaseLineRecord>,
    pub warehouses: Vec<WarehouseRecord>,
}

impl Default for FallbackData {
    fn default() -> Self {
        FallbackData {
            sales: sales(),
            purchases: purchases(),
            warehouses: warehouses(),
        }
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

type SaleRow = (
    i64,
    (i32, u32, u32),
    i64,
    &'static str,
    &'static str,
    i64,
    i64,
    i64,
    &'static str,
    &'static str,
    i64,
);

pub fn sales() -> Vec<SaleRecord> {
    let rows: [SaleRow; 14] = [
        (1, (2025, 4, 2), 11, "Laptop Pro", "Electronics", 4, 400000, 92000, "Each", "Delivery Van", 101),
        (2, (2025, 4, 5), 12, "Wireless Mouse", "Accessories", 40, 200000, 61000, "Carton", "Courier", 102),
        (3, (2025, 4, 11), 14, "Monitor 27\"", "Electronics", 6, 300000, 54000, "Each", "Delivery Van", 103),
        (4, (2025, 4, 19), 13, "USB-C Hub", "Accessories", 25, 125000, 37500, "Packet", "Courier", 101),
        (5, (2025, 4, 27), 15, "Keyboard Mechanical", "Accessories", 12, 120000, 30000, "Each", "Customer Collect", 104),
        (6, (2025, 5, 3), 11, "Laptop Pro", "Electronics", 5, 500000, 115000, "Each", "Delivery Van", 102),
        (7, (2025, 5, 9), 16, "Webcam HD", "Electronics", 18, 180000, 45000, "Packet", "Courier", 103),
        (8, (2025, 5, 14), 12, "Wireless Mouse", "Accessories", 30, 150000, 45750, "Carton", "Courier", 101),
        (9, (2025, 5, 22), 15, "Keyboard Mechanical", "Accessories", 9, 90000, 22500, "Each", "Customer Collect", 104),
        (10, (2025, 6, 1), 11, "Laptop Pro", "Electronics", 6, 600000, 138000, "Each", "Delivery Van", 101),
        (11, (2025, 6, 8), 14, "Monitor 27\"", "Electronics", 8, 400000, 72000, "Each", "Delivery Van", 102),
        (12, (2025, 6, 15), 13, "USB-C Hub", "Accessories", 30, 150000, 45000, "Packet", "Courier", 103),
        (13, (2025, 6, 21), 16, "Webcam HD", "Electronics", 14, 140000, 35000, "Packet", "Courier", 104),
        (14, (2025, 6, 28), 12, "Wireless Mouse", "Accessories", 36, 180000, 54900, "Carton", "Customer Collect", 101),
    ];
    rows.iter()
        .map(
            |&(key, (y, m, d), item, name, category, qty, total, profit, package, delivery, city)| {
                SaleRecord {
                    sale_key: key,
                    date: day(y, m, d),
                    stock_item_key: item,
                    quantity: qty,
                    total: money(total),
                    profit: money(profit),
                    customer_key: 200 + key % 5,
                    sales_person_key: 300 + key % 3,
                    package_type: package.to_string(),
                    delivery_method: delivery.to_string(),
                    city_key: city,
                    stock_item_name: name.to_string(),
                    category: category.to_string(),
                }
            },
        )
        .collect()
}

type PurchaseRow = (
    i64,
    i64,
    &'static str,
    &'static str,
    &'static str,
    i64,
    i64,
    i64,
    i64,
);

pub fn purchases() -> Vec<PurchaseLineRecord> {
    let rows: [PurchaseRow; 10] = [
        (5001, 11, "Laptop Pro", "Fabrikam, Inc.", "Each", 20, 20, 1600000, 1600000),
        (5001, 14, "Monitor 27\"", "Fabrikam, Inc.", "Each", 20, 18, 800000, 720000),
        (5002, 16, "Webcam HD", "Fabrikam, Inc.", "Packet", 40, 40, 240000, 240000),
        (5003, 12, "Wireless Mouse", "Litware, Inc.", "Carton", 150, 150, 450000, 450000),
        (5003, 13, "USB-C Hub", "Litware, Inc.", "Packet", 80, 84, 240000, 252000),
        (5004, 15, "Keyboard Mechanical", "Northwind Electric Cars", "Each", 30, 30, 180000, 180000),
        (5005, 17, "Docking Station", "A Datum Corporation", "Each", 10, 10, 150000, 150000),
        (5006, 18, "Phone Charger", "The Phone Company", "Carton", 60, 54, 90000, 81000),
        (5007, 19, "Packing Tape", "Contoso, Ltd.", "Packet", 57, 57, 31350, 31350),
        (5008, 20, "Shipping Labels", "Graphic Design Institute", "Packet", 100, 100, 64890, 64890),
    ];
    rows.iter()
        .map(
            |&(order, item, name, supplier, package, ordered, received, expected, got)| {
                PurchaseLineRecord {
                    purchase_order_id: order,
                    stock_item_key: item,
                    stock_item_name: name.to_string(),
                    supplier_name: supplier.to_string(),
                    package_type: package.to_string(),
                    ordered_outers: ordered,
                    received_outers: received,
                    difference_outers: received - ordered,
                    delivery_status: DeliveryStatus::classify(ordered, received),
                    expected_amount: money(expected),
                    received_amount: money(got),
                }
            },
        )
        .collect()
}

pub fn warehouses() -> Vec<WarehouseRecord> {
    [
        ("1", "New York", 10000, 8500),
        ("2", "Los Angeles", 8000, 6200),
        ("3", "Chicago", 12000, 9800),
        ("4", "Houston", 9000, 7100),
    ]
    .iter()
    .map(|&(id, location, capacity, current_stock)| WarehouseRecord {
        id: id.to_string(),
        location: location.to_string(),
        capacity,
        current_stock,
        last_updated: day(2025, 6, 30),
    })
    .collect()
}
