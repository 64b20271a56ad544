// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use proptest::prelude::*;
use salesboard::metrics::ranking::{bottom_n, top_n};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    score: i64,
}

fn rows(scores: &[i64]) -> Vec<Row> {
    scores
        .iter()
        .enumerate()
        .map(|(id, &score)| Row { id, score })
        .collect()
}

#[test]
fn ties_keep_input_order() {
    let input = rows(&[5, 9, 5, 9, 1]);
    let ids: Vec<usize> = top_n(&input, 4, |r| r.score).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 0, 2]);
}

#[test]
fn limit_larger_than_input_returns_everything() {
    let input = rows(&[3, 1, 2]);
    assert_eq!(top_n(&input, 10, |r| r.score).len(), 3);
    assert!(top_n(&input, 0, |r| r.score).is_empty());
    assert!(top_n(&Vec::<Row>::new(), 5, |r| r.score).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let input = rows(&[1, 3, 2]);
    let before = input.clone();
    let _ = top_n(&input, 2, |r| r.score);
    assert_eq!(input, before);
}

#[test]
fn bottom_ranks_ascending() {
    let input = rows(&[4, 2, 8, 2]);
    let ids: Vec<usize> = bottom_n(&input, 3, |r| r.score).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 0]);
}

proptest! {
    #[test]
    fn top_n_is_bounded_sorted_prefix(
        scores in prop::collection::vec(-1000i64..1000, 0..50),
        n in 0usize..20
    ) {
        let input = rows(&scores);
        let top = top_n(&input, n, |r| r.score);
        prop_assert!(top.len() <= n);
        prop_assert_eq!(top.len(), n.min(input.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        let full = top_n(&input, input.len(), |r| r.score);
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }
}
