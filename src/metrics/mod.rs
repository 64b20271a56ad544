// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over fetched record collections. Nothing in here does
//! I/O or keeps state between calls.

pub mod grouping;
pub mod kpi;
pub mod ranking;
pub mod ratio;
