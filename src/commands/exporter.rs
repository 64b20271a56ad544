// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::grouping::{
    locations_from_sales, products_from_sales, sales_by_month, sales_vs_purchases,
    stock_items_from_purchases, suppliers_from_purchases,
};
use crate::metrics::kpi::{purchase_kpis, sales_kpis, warehouse_kpis};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => bail!("Unknown format: {} (use csv|json)", other),
        }
    }
}

pub fn handle(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let view = sub.get_one::<String>("view").context("view missing")?;
    let fmt = ExportFormat::parse(sub.get_one::<String>("format").context("format missing")?)?;
    let out = Path::new(sub.get_one::<String>("out").context("out missing")?);

    let thresholds = &app.config.thresholds;
    let written = match view.as_str() {
        "products" => write_rows(&products_from_sales(&app.sales()), fmt, out)?,
        "locations" => write_rows(&locations_from_sales(&app.sales()), fmt, out)?,
        "months" => write_rows(&sales_by_month(&app.sales()), fmt, out)?,
        "suppliers" => write_rows(&suppliers_from_purchases(&app.purchases()), fmt, out)?,
        "stock-items" => write_rows(&stock_items_from_purchases(&app.purchases()), fmt, out)?,
        "compare" => {
            let dataset = app.dataset();
            write_rows(
                &sales_vs_purchases(&dataset.sales.rows, &dataset.purchases.rows),
                fmt,
                out,
            )?
        }
        "sales-kpis" => write_rows(&sales_kpis(&app.sales()), fmt, out)?,
        "purchase-kpis" => write_rows(&purchase_kpis(&app.purchases(), thresholds), fmt, out)?,
        "warehouse-kpis" => {
            write_rows(&warehouse_kpis(&app.warehouses(), thresholds), fmt, out)?
        }
        other => bail!("Unknown view: {}", other),
    };
    debug!(view = %view, rows = written, out = %out.display(), "exported");
    println!("Exported {} {} rows to {}", written, view, out.display());
    Ok(())
}

pub fn write_rows<T: Serialize>(rows: &[T], fmt: ExportFormat, out: &Path) -> Result<usize> {
    match fmt {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            std::fs::write(out, serde_json::to_string_pretty(rows)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
    }
    Ok(rows.len())
}
