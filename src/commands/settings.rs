// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::config::config_path;
use anyhow::Result;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            if let Ok(path) = config_path() {
                eprintln!("default config file: {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&app.config)?);
        }
        _ => {}
    }
    Ok(())
}
