// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::metrics::kpi::warehouse_kpis;
use crate::metrics::ratio::utilization;
use crate::models::WarehouseRecord;
use crate::utils::{bar, fmt_count, fmt_percent, kpi_table, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("kpis", sub)) => {
            let rows = warehouse_kpis(&app.warehouses(), &app.config.thresholds);
            debug!(view = "warehouse kpis", rows = rows.len(), "rendering");
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
                println!("{}", kpi_table(&rows));
            }
        }
        Some(("locations", sub)) => locations(app, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn location_rows(app: &App, sub: &clap::ArgMatches) -> Vec<WarehouseRecord> {
    let wanted = sub
        .get_one::<String>("location")
        .map(|s| s.trim().to_string());
    app.warehouses()
        .into_iter()
        .filter(|w| match &wanted {
            Some(loc) if !loc.eq_ignore_ascii_case("all") => w.location.eq_ignore_ascii_case(loc),
            _ => true,
        })
        .collect()
}

fn locations(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let rows = location_rows(app, sub);
    debug!(view = "warehouse locations", rows = rows.len(), "rendering");
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let limit = app.config.thresholds.utilization_max;
    let data = rows
        .iter()
        .map(|w| {
            let used = utilization(w.current_stock, w.capacity);
            let flag = if used > limit { " !" } else { "" };
            vec![
                w.location.clone(),
                fmt_count(w.capacity),
                fmt_count(w.current_stock),
                format!("{}{}", fmt_percent(&used), flag),
                bar(used, Decimal::ONE_HUNDRED, 20),
                w.last_updated.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Location", "Capacity", "Current Stock", "Utilization", "", "Last Updated"],
            data
        )
    );
    Ok(())
}
