// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod cli;
pub mod config;
pub mod fallback;
pub mod metrics;
pub mod models;
pub mod source;
pub mod utils;
pub mod commands;
