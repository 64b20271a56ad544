// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::fallback::FallbackData;
use crate::models::{PurchaseLineRecord, SaleRecord, WarehouseRecord};
use crate::utils::http_client;
use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const SALES_ENDPOINT: &str = "/api/Sale";
pub const PURCHASES_ENDPOINT: &str = "/api/Purchase";
pub const WAREHOUSES_ENDPOINT: &str = "/api/Warehouse";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{what} returned no rows")]
    Empty { what: String },
}

/// Where record collections come from. One call per metrics category.
pub trait MetricsSource: Sync {
    fn sales(&self) -> Result<Vec<SaleRecord>, FetchError>;
    fn purchases(&self) -> Result<Vec<PurchaseLineRecord>, FetchError>;
    fn warehouses(&self) -> Result<Vec<WarehouseRecord>, FetchError>;
    fn describe(&self) -> String;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(HttpSource {
            client: http_client(config.timeout_secs)?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_rows<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

impl MetricsSource for HttpSource {
    fn sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        self.get_rows(SALES_ENDPOINT)
    }

    fn purchases(&self) -> Result<Vec<PurchaseLineRecord>, FetchError> {
        self.get_rows(PURCHASES_ENDPOINT)
    }

    fn warehouses(&self) -> Result<Vec<WarehouseRecord>, FetchError> {
        self.get_rows(WAREHOUSES_ENDPOINT)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Serves the fallback datasets directly; used with `--offline`.
pub struct StaticSource {
    data: FallbackData,
}

impl StaticSource {
    pub fn new(data: FallbackData) -> Self {
        StaticSource { data }
    }
}

impl MetricsSource for StaticSource {
    fn sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        Ok(self.data.sales.clone())
    }

    fn purchases(&self) -> Result<Vec<PurchaseLineRecord>, FetchError> {
        Ok(self.data.purchases.clone())
    }

    fn warehouses(&self) -> Result<Vec<WarehouseRecord>, FetchError> {
        Ok(self.data.warehouses.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum Origin {
    Live,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub rows: Vec<T>,
    pub origin: Origin,
}

/// Keep fetched rows, or substitute `fallback` when the fetch failed or
/// came back empty.
pub fn load<T: Clone>(
    category: &str,
    fetched: Result<Vec<T>, FetchError>,
    fallback: &[T],
) -> Loaded<T> {
    let err = match fetched {
        Ok(rows) if !rows.is_empty() => {
            info!(category, rows = rows.len(), "loaded live data");
            return Loaded {
                rows,
                origin: Origin::Live,
            };
        }
        Ok(_) => FetchError::Empty {
            what: category.to_string(),
        },
        Err(e) => e,
    };
    warn!(category, error = %err, "using fallback data");
    Loaded {
        rows: fallback.to_vec(),
        origin: Origin::Fallback {
            reason: err.to_string(),
        },
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub sales: Loaded<SaleRecord>,
    pub purchases: Loaded<PurchaseLineRecord>,
    pub warehouses: Loaded<WarehouseRecord>,
}

impl Dataset {
    pub fn origins(&self) -> Vec<(&'static str, usize, &Origin)> {
        vec![
            ("sales", self.sales.rows.len(), &self.sales.origin),
            ("purchases", self.purchases.rows.len(), &self.purchases.origin),
            ("warehouses", self.warehouses.rows.len(), &self.warehouses.origin),
        ]
    }
}

fn joined<T: Clone>(
    category: &str,
    handle: thread::ScopedJoinHandle<'_, Loaded<T>>,
    fallback: &[T],
) -> Loaded<T> {
    handle.join().unwrap_or_else(|_| Loaded {
        rows: fallback.to_vec(),
        origin: Origin::Fallback {
            reason: format!("{} worker panicked", category),
        },
    })
}

/// Fetch every category concurrently and wait for all of them.
pub fn load_dataset(source: &dyn MetricsSource, fallback: &FallbackData) -> Dataset {
    thread::scope(|s| {
        let sales = s.spawn(|| load("sales", source.sales(), &fallback.sales));
        let purchases = s.spawn(|| load("purchases", source.purchases(), &fallback.purchases));
        let warehouses =
            s.spawn(|| load("warehouses", source.warehouses(), &fallback.warehouses));
        Dataset {
            sales: joined("sales", sales, &fallback.sales),
            purchases: joined("purchases", purchases, &fallback.purchases),
            warehouses: joined("warehouses", warehouses, &fallback.warehouses),
        }
    })
}
