// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::source::Origin;
use crate::utils::pretty_table;
use anyhow::Result;
use tracing::debug;

/// Everything worth flagging: config problems first, then every category
/// that fell back to built-in data.
pub fn issues(app: &App) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = app
        .config
        .issues()
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();

    let dataset = app.dataset();
    for (category, _, origin) in dataset.origins() {
        if let Origin::Fallback { reason } = origin {
            rows.push(vec![format!("{}_fallback", category), reason.clone()]);
        }
    }
    rows
}

pub fn handle(app: &App) -> Result<()> {
    println!("source: {}", app.source_name());
    let rows = issues(app);
    debug!(view = "doctor", rows = rows.len(), "rendering");
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
