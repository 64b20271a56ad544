// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pretty_assertions::assert_eq;
use salesboard::app::App;
use salesboard::cli;
use salesboard::commands::{compare, dashboard, doctor, purchases, sales, warehouse};
use salesboard::config::Config;
use salesboard::fallback;
use salesboard::models::{PurchaseLineRecord, SaleRecord, WarehouseRecord};
use salesboard::source::{FetchError, MetricsSource, Origin};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Parse `args` and walk down to the innermost subcommand's matches.
fn leaf(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["salesboard"];
    argv.extend_from_slice(args);
    let mut m = cli::build_cli().try_get_matches_from(argv).unwrap();
    while let Some((_, sub)) = m.subcommand() {
        let next = sub.clone();
        m = next;
    }
    m
}

fn app() -> App {
    App::offline(Config::default())
}

#[test]
fn products_ranked_by_revenue() {
    let rows = sales::product_rows(&app(), &leaf(&["sales", "products", "--limit", "2"])).unwrap();
    let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop Pro", "Monitor 27\""]);
    assert_eq!(rows[0].sales, 15);
}

#[test]
fn products_default_to_top_limit() {
    let rows = sales::product_rows(&app(), &leaf(&["sales", "products"])).unwrap();
    assert_eq!(rows.len(), 5);
}

#[test]
fn bottom_ranking_starts_with_weakest() {
    let rows = sales::product_rows(
        &app(),
        &leaf(&["sales", "products", "--bottom", "-n", "1"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Keyboard Mechanical");
}

#[test]
fn category_filter_applies_before_grouping() {
    let rows = sales::product_rows(
        &app(),
        &leaf(&["sales", "products", "--category", "Accessories"]),
    )
    .unwrap();
    assert_eq!(rows[0].name, "Wireless Mouse");
    assert!(rows.iter().all(|p| p.category == "Accessories"));
}

#[test]
fn bad_pattern_is_reported() {
    let err = sales::product_rows(&app(), &leaf(&["sales", "products", "--match", "(?P<"]))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid regex pattern"));
}

#[test]
fn category_shares_sum_to_whole() {
    let rows = sales::chart_rows(&app(), &leaf(&["sales", "categories"]), "categories").unwrap();
    let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Electronics", "Accessories"]);
    let total: rust_decimal::Decimal = rows.iter().map(|p| p.percentage).sum();
    assert!((total - rust_decimal::Decimal::ONE_HUNDRED).abs() < rust_decimal::Decimal::new(1, 2));
}

#[test]
fn status_distribution_against_all_lines() {
    let rows = purchases::status_rows(&app());
    let got: Vec<(&str, String)> = rows
        .iter()
        .map(|p| (p.name.as_str(), p.percentage.normalize().to_string()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("On target", "70".to_string()),
            ("Under delivered", "20".to_string()),
            ("Over delivered", "10".to_string()),
        ]
    );
}

#[test]
fn suppliers_ranked_by_amount() {
    let rows = purchases::supplier_rows(&app(), &leaf(&["purchases", "suppliers", "-n", "2"]))
        .unwrap()
        .rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].supplier_name, "Fabrikam, Inc.");
    assert_eq!(rows[0].number_of_orders, 2);
}

#[test]
fn overstock_lists_most_negative_difference_first() {
    let rows = compare::compare_rows(&app(), &leaf(&["compare", "--view", "overstock"])).unwrap();
    assert_eq!(rows[0].stock_item_name, "Shipping Labels");
    assert_eq!(rows[0].quantity_difference, -100);
    assert!(rows.iter().all(|r| r.quantity_difference < 0));
    assert!(
        rows.windows(2)
            .all(|w| w[0].quantity_difference <= w[1].quantity_difference)
    );
}

#[test]
fn compare_table_ranked_by_sales_amount() {
    let rows = compare::compare_rows(&app(), &leaf(&["compare", "-n", "3"])).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].stock_item_name, "Laptop Pro");
}

#[test]
fn warehouse_location_filter_ignores_case() {
    let rows = warehouse::location_rows(&app(), &leaf(&["warehouse", "locations", "--location", "chicago"]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].location, "Chicago");

    let all = warehouse::location_rows(&app(), &leaf(&["warehouse", "locations", "--location", "all"]));
    assert_eq!(all.len(), 4);
}

#[test]
fn doctor_is_quiet_offline() {
    assert!(doctor::issues(&app()).is_empty());

    let bad = App::offline(Config {
        top_limit: 0,
        api_base_url: "localhost".into(),
        ..Config::default()
    });
    let issues: Vec<String> = doctor::issues(&bad).into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(issues, vec!["config_top_limit", "config_api_url"]);
}

#[test]
fn dashboard_collects_every_card() {
    let view = dashboard::build(&app());
    assert_eq!(view.sources.len(), 3);
    assert!(view.sources.iter().all(|s| s.origin == Origin::Live));
    assert_eq!(view.sales_kpis.len(), 4);
    assert_eq!(view.purchase_kpis.len(), 8);
    assert_eq!(view.warehouse_kpis.len(), 4);
    assert!(view.top_products.len() <= 5);
    assert_eq!(view.top_products[0].name, "Laptop Pro");
}

#[test]
fn config_file_and_flag_layering() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"top_limit": 3, "api_base_url": "http://files:1"}}"#).unwrap();

    let cfg = Config::resolve(Some(file.path()), None).unwrap();
    assert_eq!(cfg.top_limit, 3);
    assert_eq!(cfg.table_limit, 10);

    let cfg = Config::resolve(Some(file.path()), Some(" http://flag:2 ")).unwrap();
    assert_eq!(cfg.api_base_url, "http://flag:2");

    let dir = tempfile::tempdir().unwrap();
    assert!(Config::resolve(Some(&dir.path().join("missing.json")), None).is_err());
    assert!(Config::resolve(Some(Path::new("")), None).is_err());
}

#[test]
fn export_view_names_are_validated() {
    assert!(
        cli::build_cli()
            .try_get_matches_from(["salesboard", "export", "ledger", "--format", "csv", "--out", "x"])
            .is_err()
    );
}

/// Answers the first purchases request with one live line and fails every
/// later one, so each fetch sees a different collection.
struct FlakySource {
    calls: AtomicUsize,
}

impl MetricsSource for FlakySource {
    fn sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        Ok(fallback::sales())
    }

    fn purchases(&self) -> Result<Vec<PurchaseLineRecord>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(fallback::purchases().into_iter().take(1).collect())
        } else {
            Err(FetchError::Status {
                url: "http://backend/api/Purchase".into(),
                status: 502,
            })
        }
    }

    fn warehouses(&self) -> Result<Vec<WarehouseRecord>, FetchError> {
        Ok(fallback::warehouses())
    }

    fn describe(&self) -> String {
        "flaky".into()
    }
}

#[test]
fn supplier_shares_come_from_one_fetch() {
    let source = FlakySource {
        calls: AtomicUsize::new(0),
    };
    let app = App::new(Config::default(), Box::new(source));
    let view = purchases::supplier_rows(&app, &leaf(&["purchases", "suppliers"])).unwrap();

    assert_eq!(view.rows.len(), 1);
    let total: rust_decimal::Decimal = view.rows.iter().map(|s| view.share(s)).sum();
    assert!(total <= rust_decimal::Decimal::ONE_HUNDRED, "shares sum to {}", total);
    assert_eq!(view.share(&view.rows[0]), rust_decimal::Decimal::ONE_HUNDRED);
}

#[test]
fn category_filter_ignores_case() {
    let rows = sales::product_rows(
        &app(),
        &leaf(&["sales", "products", "--category", "accessories"]),
    )
    .unwrap();
    assert_eq!(rows[0].name, "Wireless Mouse");
}

#[test]
fn unknown_category_lists_known_ones() {
    let err = sales::product_rows(&app(), &leaf(&["sales", "products", "--category", "Toys"]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("Unknown category 'Toys'"), "{}", err);
    assert!(err.contains("Electronics, Accessories"), "{}", err);

    let all = sales::product_rows(&app(), &leaf(&["sales", "products", "--category", "ALL"]));
    assert_eq!(all.unwrap().len(), 5);
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn handlers_log_view_and_row_count() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let m = cli::build_cli()
            .try_get_matches_from(["salesboard", "purchases", "suppliers", "--json"])
            .unwrap();
        let (_, sub) = m.subcommand().unwrap();
        purchases::handle(&app(), sub).unwrap();
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("view=\"suppliers\""), "{}", logs);
    assert!(logs.contains("rows=7"), "{}", logs);
}
