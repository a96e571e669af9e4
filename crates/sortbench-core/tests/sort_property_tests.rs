// Dweve SortBench - Sorting Algorithm Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property-based tests for the sort algorithms using proptest.
//!
//! For every algorithm and arbitrary input: the output must be
//! non-decreasing and a permutation of the input multiset. Since the
//! reference result is the std stable sort of the same input, asserting
//! equality against it covers both properties at once for `i32`
//! elements.

use proptest::prelude::*;
use sortbench_core::{bubble_sort, heap_sort, merge_sort, quick_sort, transposition_sort};

fn reference_sorted(v: &[i32]) -> Vec<i32> {
    let mut expected = v.to_vec();
    expected.sort();
    expected
}

proptest! {
    #[test]
    fn merge_sort_matches_reference(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut out = v.clone();
        let right = out.len().saturating_sub(1);
        merge_sort(&mut out, 0, right);
        prop_assert_eq!(out, reference_sorted(&v));
    }

    #[test]
    fn quick_sort_matches_reference(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut out = v.clone();
        let right = out.len().saturating_sub(1);
        quick_sort(&mut out, 0, right);
        prop_assert_eq!(out, reference_sorted(&v));
    }

    #[test]
    fn heap_sort_matches_reference(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut out = v.clone();
        let right = out.len().saturating_sub(1);
        heap_sort(&mut out, 0, right);
        prop_assert_eq!(out, reference_sorted(&v));
    }

    #[test]
    fn bubble_sort_matches_reference(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut out = v.clone();
        let size = out.len();
        let comparisons = bubble_sort(&mut out, size);
        prop_assert_eq!(out, reference_sorted(&v));
        // Never more work than the full quadratic sweep.
        let n = size as u64;
        prop_assert!(comparisons <= n.saturating_mul(n.saturating_sub(1)) / 2);
    }

    #[test]
    fn transposition_sort_matches_reference(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut out = v.clone();
        let size = out.len();
        let steps = transposition_sort(&mut out, size);
        prop_assert_eq!(out, reference_sorted(&v));
        prop_assert!(steps >= 2);
        prop_assert_eq!(steps % 2, 0);
    }

    #[test]
    fn sorting_sorted_input_is_idempotent(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let sorted = reference_sorted(&v);
        let right = sorted.len().saturating_sub(1);

        let mut m = sorted.clone();
        merge_sort(&mut m, 0, right);
        prop_assert_eq!(&m, &sorted);

        let mut q = sorted.clone();
        quick_sort(&mut q, 0, right);
        prop_assert_eq!(&q, &sorted);

        let mut h = sorted.clone();
        heap_sort(&mut h, 0, right);
        prop_assert_eq!(&h, &sorted);

        let mut b = sorted.clone();
        bubble_sort(&mut b, sorted.len());
        prop_assert_eq!(&b, &sorted);

        let mut t = sorted.clone();
        transposition_sort(&mut t, sorted.len());
        prop_assert_eq!(&t, &sorted);
    }
}
