// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::grouping::{
    SalesFilter, categories, filter_sales, locations_from_sales, products_from_sales, sales_by_category,
    sales_by_delivery_method, sales_by_month, sales_by_package_type,
};
use crate::metrics::kpi::sales_kpis;
use crate::metrics::ranking::{bottom_n, top_n};
use crate::metrics::ratio::shares;
use crate::models::{
    DerivedLocationView, DerivedProductView, KpiSummary, PeriodSales, SaleRecord, SharePoint,
};
use crate::utils::{
    fmt_count, fmt_money, fmt_signed_percent, kpi_table, maybe_print_json, pretty_table,
    share_table,
};
use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::debug;
use rust_decimal::Decimal;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("kpis", sub)) => kpis(app, sub)?,
        Some(("months", sub)) => months(app, sub)?,
        Some(("products", sub)) => products(app, sub)?,
        Some(("locations", sub)) => locations(app, sub)?,
        Some((view @ ("delivery-methods" | "packages" | "categories"), sub)) => {
            chart(app, sub, view)?
        }
        _ => {}
    }
    Ok(())
}

pub fn filter_from(sub: &clap::ArgMatches) -> Result<SalesFilter> {
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let name_pattern = match sub.get_one::<String>("match") {
        Some(raw) => Some(
            Regex::new(raw.trim()).with_context(|| format!("Invalid regex pattern '{}'", raw))?,
        ),
        None => None,
    };
    Ok(SalesFilter {
        category,
        name_pattern,
    })
}

pub fn filtered_sales(app: &App, sub: &clap::ArgMatches) -> Result<Vec<SaleRecord>> {
    let filter = filter_from(sub)?;
    let sales = app.sales();
    if let Some(cat) = &filter.category {
        let known = categories(&sales);
        let listed = known.iter().any(|k| k.eq_ignore_ascii_case(cat));
        if !cat.eq_ignore_ascii_case("all") && !listed {
            bail!("Unknown category '{}' (known: {})", cat, known.join(", "));
        }
    }
    Ok(filter_sales(&sales, &filter))
}

pub fn kpi_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<KpiSummary>> {
    Ok(sales_kpis(&filtered_sales(app, sub)?))
}

fn kpis(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = kpi_rows(app, sub)?;
    debug!(view = "sales kpis", rows = rows.len(), "rendering");
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        println!("{}", kpi_table(&rows));
    }
    Ok(())
}

pub fn month_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<PeriodSales>> {
    Ok(sales_by_month(&filtered_sales(app, sub)?))
}

fn months(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = month_rows(app, sub)?;
    debug!(view = "sales months", rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .enumerate()
        .map(|(i, m)| {
            vec![
                m.period.clone(),
                fmt_money(&m.revenue),
                fmt_count(m.orders),
                if i == 0 {
                    "-".to_string()
                } else {
                    fmt_signed_percent(&m.growth)
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Revenue", "Orders", "Growth"], data)
    );
    Ok(())
}

pub fn product_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<DerivedProductView>> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(app.config.top_limit);
    let grouped = products_from_sales(&filtered_sales(app, sub)?);
    if sub.get_flag("bottom") {
        Ok(bottom_n(&grouped, limit, |p| p.revenue))
    } else {
        Ok(top_n(&grouped, limit, |p| p.revenue))
    }
}

fn products(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = product_rows(app, sub)?;
    debug!(view = "sales products", rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.name.clone(),
                p.category.clone(),
                fmt_count(p.sales),
                fmt_money(&p.revenue),
                fmt_money(&p.profit),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["#", "Product", "Category", "Sales", "Revenue", "Profit"],
            data
        )
    );
    Ok(())
}

pub fn location_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<DerivedLocationView>> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(app.config.table_limit);
    let grouped = locations_from_sales(&filtered_sales(app, sub)?);
    Ok(top_n(&grouped, limit, |l| l.stock_movement))
}

fn locations(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = location_rows(app, sub)?;
    debug!(view = "sales locations", rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|l| {
            vec![
                l.location_id.to_string(),
                fmt_count(l.stock_movement),
                fmt_money(&l.revenue),
                l.lines.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Location", "Stock Movement", "Revenue", "Lines"], data)
    );
    Ok(())
}

pub fn chart_rows(app: &App, sub: &clap::ArgMatches, view: &str) -> Result<Vec<SharePoint>> {
    let sales = filtered_sales(app, sub)?;
    let points = match view {
        "delivery-methods" => sales_by_delivery_method(&sales),
        "packages" => sales_by_package_type(&sales),
        "categories" => sales_by_category(&sales),
        other => bail!("Unknown sales chart '{}'", other),
    };
    Ok(shares(&points))
}

fn chart(app: &App, sub: &clap::ArgMatches, view: &str) -> Result<()> {
    let rows = chart_rows(app, sub, view)?;
    debug!(view = view, rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let table = match view {
        "categories" => share_table("Category", &rows, |v: &Decimal| v.to_string()),
        "packages" => share_table("Package", &rows, fmt_money),
        _ => share_table("Delivery Method", &rows, fmt_money),
    };
    println!("{}", table);
    Ok(())
}
