// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::grouping::{
    delivery_status_counts, purchases_by_package_type, stock_items_from_purchases,
    suppliers_from_purchases,
};
use crate::metrics::kpi::purchase_kpis;
use crate::metrics::ranking::top_n;
use crate::metrics::ratio::{distribution, percentage, shares};
use crate::models::{ChartPoint, DerivedStockItemView, DerivedSupplierView, SharePoint};
use crate::utils::{
    fmt_compact_money, fmt_count, fmt_money, fmt_percent, kpi_table, maybe_print_json,
    pretty_table, share_table,
};
use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("kpis", sub)) => kpis(app, sub)?,
        Some(("suppliers", sub)) => suppliers(app, sub)?,
        Some(("stock-items", sub)) => stock_items(app, sub)?,
        Some(("package-types", sub)) => package_types(app, sub)?,
        Some(("status", sub)) => status(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn kpis(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = purchase_kpis(&app.purchases(), &app.config.thresholds);
    debug!(view = "purchase kpis", rows = rows.len(), "rendering");
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        println!("{}", kpi_table(&rows));
    }
    Ok(())
}

/// Top suppliers plus the purchase total they are a share of, both taken
/// from a single fetch.
pub struct SupplierRows {
    pub rows: Vec<DerivedSupplierView>,
    pub whole: Decimal,
}

impl SupplierRows {
    pub fn share(&self, supplier: &DerivedSupplierView) -> Decimal {
        percentage(supplier.total_purchase_amount, self.whole)
    }
}

pub fn supplier_rows(app: &App, sub: &clap::ArgMatches) -> Result<SupplierRows> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(app.config.table_limit);
    let lines = app.purchases();
    let whole = lines.iter().map(|l| l.expected_amount).sum();
    let grouped = suppliers_from_purchases(&lines);
    Ok(SupplierRows {
        rows: top_n(&grouped, limit, |s| s.total_purchase_amount),
        whole,
    })
}

fn suppliers(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let view = supplier_rows(app, sub)?;
    debug!(view = "suppliers", rows = view.rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.rows)? {
        return Ok(());
    }
    let data = view
        .rows
        .iter()
        .map(|s| {
            vec![
                s.supplier_name.clone(),
                fmt_money(&s.total_purchase_amount),
                fmt_percent(&view.share(s)),
                fmt_count(s.total_ordered_outers),
                s.number_of_orders.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Supplier", "Purchase Amount", "Share", "Ordered Outers", "Orders"],
            data
        )
    );
    Ok(())
}

pub fn stock_item_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<DerivedStockItemView>> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(app.config.table_limit);
    let grouped = stock_items_from_purchases(&app.purchases());
    Ok(top_n(&grouped, limit, |s| s.total_amount))
}

fn stock_items(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = stock_item_rows(app, sub)?;
    debug!(view = "stock-items", rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                s.stock_item_name.clone(),
                fmt_count(s.total_ordered_outers),
                fmt_compact_money(&s.total_amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["#", "Stock Item", "Ordered Outers", "Amount"], data)
    );
    Ok(())
}

fn package_types(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = shares(&purchases_by_package_type(&app.purchases()));
    debug!(view = "package-types", rows = rows.len(), "rendering");
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        println!("{}", share_table("Package Type", &rows, fmt_money));
    }
    Ok(())
}

/// Share of lines per delivery status, measured against all lines.
pub fn status_rows(app: &App) -> Vec<SharePoint> {
    let lines = app.purchases();
    let counts: Vec<ChartPoint> = delivery_status_counts(&lines)
        .into_iter()
        .map(|(status, n)| ChartPoint {
            name: status.label().to_string(),
            value: Decimal::from(n),
        })
        .collect();
    distribution(&counts, Decimal::from(lines.len()))
}

fn status(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = status_rows(app);
    debug!(view = "status", rows = rows.len(), "rendering");
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        println!(
            "{}",
            share_table("Delivery Status", &rows, |v: &Decimal| v.to_string())
        );
    }
    Ok(())
}
