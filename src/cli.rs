// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, builder::PossibleValuesParser, value_parser};

pub const EXPORT_VIEWS: [&str; 9] = [
    "products",
    "locations",
    "suppliers",
    "stock-items",
    "months",
    "compare",
    "sales-kpis",
    "purchase-kpis",
    "warehouse-kpis",
];

fn with_output(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue)
            .conflicts_with("json"),
    )
}

fn with_limit(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("limit")
            .long("limit")
            .short('n')
            .help("Maximum rows (defaults come from config)")
            .value_parser(value_parser!(usize)),
    )
}

fn with_sales_filters(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .help("Only this product category ('all' for every category)"),
    )
    .arg(
        Arg::new("match")
            .long("match")
            .help("Only products whose name matches this regex"),
    )
}

fn sales_cmd(name: &'static str, about: &'static str) -> Command {
    with_sales_filters(with_output(Command::new(name).about(about)))
}

fn plain_cmd(name: &'static str, about: &'static str) -> Command {
    with_output(Command::new(name).about(about))
}

pub fn build_cli() -> Command {
    Command::new("salesboard")
        .version(clap::crate_version!())
        .about("Sales, purchase, and warehouse metrics in the terminal")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .value_name("URL")
                .help("Backend base URL (overrides config and SALESBOARD_API_URL)"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Skip the backend and use the built-in datasets"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Config file (JSON)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("sales")
                .about("Sales metrics")
                .subcommand(sales_cmd("kpis", "Revenue, orders, order value, growth"))
                .subcommand(sales_cmd("months", "Monthly revenue with growth"))
                .subcommand(
                    with_limit(sales_cmd("products", "Products ranked by revenue")).arg(
                        Arg::new("bottom")
                            .long("bottom")
                            .help("Rank ascending (weakest first)")
                            .action(ArgAction::SetTrue),
                    ),
                )
                .subcommand(with_limit(sales_cmd(
                    "locations",
                    "Locations ranked by stock movement",
                )))
                .subcommand(sales_cmd("delivery-methods", "Revenue by delivery method"))
                .subcommand(sales_cmd("packages", "Revenue by package type"))
                .subcommand(sales_cmd("categories", "Quantity sold by category")),
        )
        .subcommand(
            Command::new("purchases")
                .about("Purchase-order metrics")
                .subcommand(plain_cmd("kpis", "Ordered vs received summary"))
                .subcommand(with_limit(plain_cmd(
                    "suppliers",
                    "Suppliers ranked by purchase amount",
                )))
                .subcommand(with_limit(plain_cmd(
                    "stock-items",
                    "Stock items ranked by purchase amount",
                )))
                .subcommand(plain_cmd("package-types", "Purchase amount by package type"))
                .subcommand(plain_cmd("status", "Delivery status distribution")),
        )
        .subcommand(
            Command::new("warehouse")
                .about("Warehouse capacity and stock")
                .subcommand(plain_cmd("kpis", "Capacity, stock, utilization"))
                .subcommand(
                    plain_cmd("locations", "Per-location utilization")
                        .arg(Arg::new("location").long("location").help("Only this location")),
                ),
        )
        .subcommand(with_limit(
            plain_cmd("compare", "Sales against purchases per stock item").arg(
                Arg::new("view")
                    .long("view")
                    .default_value("table")
                    .value_parser(PossibleValuesParser::new(["table", "overstock", "buckets"])),
            ),
        ))
        .subcommand(plain_cmd("dashboard", "All KPI cards and top products"))
        .subcommand(
            Command::new("export")
                .about("Write a derived view to a file")
                .arg(
                    Arg::new("view")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(EXPORT_VIEWS)),
                )
                .arg(Arg::new("format").long("format").required(true).help("csv|json"))
                .arg(Arg::new("out").long("out").required(true).value_name("PATH")),
        )
        .subcommand(Command::new("doctor").about("Check backend reachability and config"))
        .subcommand(
            Command::new("config")
                .about("Configuration")
                .subcommand(Command::new("show").about("Print the resolved configuration")),
        )
}
