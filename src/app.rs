// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::fallback::FallbackData;
use crate::models::{PurchaseLineRecord, SaleRecord, WarehouseRecord};
use crate::source::{Dataset, HttpSource, MetricsSource, StaticSource, load, load_dataset};
use anyhow::Result;

/// Everything a command needs: resolved config, where data comes from, and
/// what to show when that fails.
pub struct App {
    pub config: Config,
    source: Box<dyn MetricsSource>,
    fallback: FallbackData,
}

impl App {
    pub fn new(config: Config, source: Box<dyn MetricsSource>) -> Self {
        App {
            config,
            source,
            fallback: FallbackData::default(),
        }
    }

    pub fn online(config: Config) -> Result<Self> {
        let source = HttpSource::new(&config)?;
        Ok(App::new(config, Box::new(source)))
    }

    pub fn offline(config: Config) -> Self {
        App::new(config, Box::new(StaticSource::new(FallbackData::default())))
    }

    pub fn with_fallback(mut self, fallback: FallbackData) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    pub fn sales(&self) -> Vec<SaleRecord> {
        load("sales", self.source.sales(), &self.fallback.sales).rows
    }

    pub fn purchases(&self) -> Vec<PurchaseLineRecord> {
        load("purchases", self.source.purchases(), &self.fallback.purchases).rows
    }

    pub fn warehouses(&self) -> Vec<WarehouseRecord> {
        load("warehouses", self.source.warehouses(), &self.fallback.warehouses).rows
    }

    pub fn dataset(&self) -> Dataset {
        load_dataset(self.source.as_ref(), &self.fallback)
    }
}
