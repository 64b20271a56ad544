// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::grouping::products_from_sales;
use crate::metrics::kpi::{purchase_kpis, sales_kpis, warehouse_kpis};
use crate::metrics::ranking::top_n;
use crate::models::{DerivedProductView, KpiSummary};
use crate::source::{Dataset, Origin};
use crate::utils::{fmt_count, fmt_money, kpi_table, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct SourceStatus {
    pub category: String,
    pub rows: usize,
    #[serde(flatten)]
    pub origin: Origin,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub sources: Vec<SourceStatus>,
    pub sales_kpis: Vec<KpiSummary>,
    pub purchase_kpis: Vec<KpiSummary>,
    pub warehouse_kpis: Vec<KpiSummary>,
    pub top_products: Vec<DerivedProductView>,
}

pub fn source_status(dataset: &Dataset) -> Vec<SourceStatus> {
    dataset
        .origins()
        .into_iter()
        .map(|(category, rows, origin)| SourceStatus {
            category: category.to_string(),
            rows,
            origin: origin.clone(),
        })
        .collect()
}

pub fn build(app: &App) -> DashboardView {
    let dataset = app.dataset();
    let thresholds = &app.config.thresholds;
    DashboardView {
        sources: source_status(&dataset),
        sales_kpis: sales_kpis(&dataset.sales.rows),
        purchase_kpis: purchase_kpis(&dataset.purchases.rows, thresholds),
        warehouse_kpis: warehouse_kpis(&dataset.warehouses.rows, thresholds),
        top_products: top_n(
            &products_from_sales(&dataset.sales.rows),
            app.config.top_limit,
            |p| p.revenue,
        ),
    }
}

pub fn handle(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let view = build(app);
    debug!(
        view = "dashboard",
        rows = view.top_products.len(),
        fallback = view.sources.iter().filter(|s| s.origin != Origin::Live).count(),
        "rendering"
    );
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    for s in &view.sources {
        if let Origin::Fallback { reason } = &s.origin {
            println!("note: {} shows built-in data ({})", s.category, reason);
        }
    }
    println!("Sales Overview\n{}", kpi_table(&view.sales_kpis));
    println!("Purchases\n{}", kpi_table(&view.purchase_kpis));
    println!("Warehouse Operations\n{}", kpi_table(&view.warehouse_kpis));
    let data = view
        .top_products
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.category.clone(),
                fmt_money(&p.revenue),
                format!("{} sales", fmt_count(p.sales)),
            ]
        })
        .collect();
    println!(
        "Top Products\n{}",
        pretty_table(&["Product", "Category", "Revenue", "Sales"], data)
    );
    Ok(())
}
