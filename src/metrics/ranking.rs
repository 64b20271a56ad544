// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// The `n` largest items by `field`, largest first. Ties keep input order.
pub fn top_n<T: Clone, V: Ord>(items: &[T], n: usize, field: impl Fn(&T) -> V) -> Vec<T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| field(b).cmp(&field(a)));
    ranked.into_iter().take(n).cloned().collect()
}

/// The `n` smallest items by `field`, smallest first. Ties keep input order.
pub fn bottom_n<T: Clone, V: Ord>(items: &[T], n: usize, field: impl Fn(&T) -> V) -> Vec<T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| field(a).cmp(&field(b)));
    ranked.into_iter().take(n).cloned().collect()
}
