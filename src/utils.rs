// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::ratio::ratio;
use crate::models::{KpiSummary, SharePoint};
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const UA: &str = concat!(
    "salesboard/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/salesboard)"
);

pub fn http_client(timeout_secs: u64) -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn with_sign(negative: bool, s: String) -> String {
    if negative { format!("-{}", s) } else { s }
}

pub fn fmt_count(n: i64) -> String {
    with_sign(n < 0, group_thousands(&n.unsigned_abs().to_string()))
}

pub fn fmt_money(d: &Decimal) -> String {
    let fixed = format!("{:.2}", d.abs().round_dp(2));
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    with_sign(
        d.is_sign_negative() && !d.round_dp(2).is_zero(),
        format!("${}.{}", group_thousands(int_part), frac),
    )
}

/// Money with a K/M/B suffix for narrow table cells.
pub fn fmt_compact_money(d: &Decimal) -> String {
    let abs = d.abs();
    let billion = Decimal::from(1_000_000_000);
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);
    let body = if abs >= billion {
        format!("${:.2}B", abs / billion)
    } else if abs >= million {
        format!("${:.2}M", abs / million)
    } else if abs >= thousand {
        format!("${:.1}K", abs / thousand)
    } else {
        return fmt_money(d);
    };
    with_sign(d.is_sign_negative(), body)
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

pub fn fmt_signed_percent(d: &Decimal) -> String {
    if d.is_sign_negative() && !d.round_dp(1).is_zero() {
        fmt_percent(d)
    } else {
        format!("+{}", fmt_percent(&d.abs()))
    }
}

/// Horizontal bar scaled so that `max` fills `width` cells.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    let cells = (ratio(value, max) * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    "█".repeat(cells)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn kpi_table(kpis: &[KpiSummary]) -> Table {
    let rows = kpis
        .iter()
        .map(|k| {
            vec![
                k.label.clone(),
                k.value.clone(),
                k.change.map(|c| fmt_signed_percent(&c)).unwrap_or_default(),
                k.trend.arrow().to_string(),
            ]
        })
        .collect();
    pretty_table(&["KPI", "Value", "Change", "Trend"], rows)
}

/// Chart-shaped view: name, value, share of the whole, and a bar.
pub fn share_table(
    name_header: &str,
    points: &[SharePoint],
    fmt_value: impl Fn(&Decimal) -> String,
) -> Table {
    let max = points.iter().map(|p| p.value).max().unwrap_or(Decimal::ZERO);
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                fmt_value(&p.value),
                fmt_percent(&p.percentage),
                bar(p.value, max, 30),
            ]
        })
        .collect();
    pretty_table(&[name_header, "Value", "Share", ""], rows)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
