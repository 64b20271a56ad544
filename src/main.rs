// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use salesboard::{app::App, cli, commands, config::Config};

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "salesboard=warn",
        1 => "salesboard=info",
        _ => "salesboard=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_tracing(matches.get_count("verbose"));

    let config = Config::resolve(
        matches.get_one::<String>("config").map(Path::new),
        matches.get_one::<String>("api-url").map(String::as_str),
    )?;
    let app = if matches.get_flag("offline") {
        App::offline(config)
    } else {
        App::online(config)?
    };

    match matches.subcommand() {
        Some(("sales", sub)) => commands::sales::handle(&app, sub)?,
        Some(("purchases", sub)) => commands::purchases::handle(&app, sub)?,
        Some(("warehouse", sub)) => commands::warehouse::handle(&app, sub)?,
        Some(("compare", sub)) => commands::compare::handle(&app, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&app)?,
        Some(("config", sub)) => commands::settings::handle(&app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
