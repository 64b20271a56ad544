// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::grouping::sales_vs_purchases;
use crate::metrics::ranking::{bottom_n, top_n};
use crate::metrics::ratio::ratio_buckets;
use crate::models::SalesVsPurchase;
use crate::utils::{fmt_compact_money, fmt_count, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;

pub fn handle(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = sub
        .get_one::<String>("view")
        .map(String::as_str)
        .unwrap_or("table");
    if view == "buckets" {
        let dataset = app.dataset();
        let rows = ratio_buckets(&sales_vs_purchases(
            &dataset.sales.rows,
            &dataset.purchases.rows,
        ));
        debug!(view = "buckets", rows = rows.len(), "rendering");
        if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
            let data = rows
                .iter()
                .map(|b| vec![b.range.clone(), b.count.to_string()])
                .collect();
            println!("{}", pretty_table(&["Ratio S/P", "Items"], data));
        }
        return Ok(());
    }

    let rows = compare_rows(app, sub)?;
    debug!(view = view, rows = rows.len(), "rendering");
    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.stock_item_name.clone(),
                fmt_count(r.sales_quantity),
                fmt_compact_money(&r.sales_amount),
                fmt_count(r.purchase_quantity),
                fmt_compact_money(&r.purchase_amount),
                signed_count(r.quantity_difference),
                fmt_compact_money(&r.amount_difference),
                fmt_percent(&r.sales_to_purchase_ratio.saturating_mul(Decimal::ONE_HUNDRED)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "#",
                "Product",
                "Sales Qty",
                "Sales Amount",
                "Purchase Qty",
                "Purchase Amount",
                "Qty Diff",
                "Amount Diff",
                "Ratio S/P",
            ],
            data
        )
    );
    Ok(())
}

fn signed_count(n: i64) -> String {
    if n > 0 {
        format!("+{}", fmt_count(n))
    } else {
        fmt_count(n)
    }
}

/// `table` ranks by sales amount; `overstock` keeps items bought beyond
/// what was sold, most negative difference first.
pub fn compare_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<SalesVsPurchase>> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(app.config.table_limit);
    let dataset = app.dataset();
    let rows = sales_vs_purchases(&dataset.sales.rows, &dataset.purchases.rows);
    match sub.get_one::<String>("view").map(String::as_str) {
        Some("overstock") => {
            let surplus: Vec<SalesVsPurchase> = rows
                .into_iter()
                .filter(|r| r.quantity_difference < 0)
                .collect();
            Ok(bottom_n(&surplus, limit, |r| r.quantity_difference))
        }
        _ => Ok(top_n(&rows, limit, |r| r.sales_amount)),
    }
}
