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

//! Bubble sort with an exact comparison count.

/// Sorts the first `size` elements of `a` in place and returns the exact
/// number of element-pair comparisons performed (not swaps).
///
/// Standard adjacent-pair passes with early exit when a full pass makes
/// no swap. The count is deterministic for a given input: an
/// already-sorted input of size N costs exactly `N - 1` comparisons (one
/// pass, then exit), a strictly decreasing input exactly `N(N-1)/2`.
/// The count is a benchmark metric in its own right, not a timing
/// side-channel.
///
/// O(N²) worst and average case, O(N) best case.
///
/// # Examples
///
/// ```
/// use sortbench_core::bubble_sort;
///
/// let mut v = vec![1, 2, 3, 4];
/// assert_eq!(bubble_sort(&mut v, 4), 3);
/// ```
pub fn bubble_sort<T: Ord>(a: &mut [T], size: usize) -> u64 {
    let mut comparisons = 0;
    for i in 0..size.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..size - 1 - i {
            comparisons += 1;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_shuffled_input() {
        let mut v = vec![5, 2, 9, 1, 7, 3, 8, 6, 4];
        bubble_sort(&mut v, 9);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_sorted_input_costs_n_minus_one() {
        let mut v: Vec<u32> = (0..10).collect();
        let comparisons = bubble_sort(&mut v, 10);
        assert_eq!(comparisons, 9);
        assert_eq!(v, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_reversed_input_costs_full_quadratic() {
        let mut v: Vec<u32> = (0..10).rev().collect();
        let comparisons = bubble_sort(&mut v, 10);
        assert_eq!(comparisons, 10 * 9 / 2);
        assert_eq!(v, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        assert_eq!(bubble_sort(&mut empty, 0), 0);

        let mut one = vec![42];
        assert_eq!(bubble_sort(&mut one, 1), 0);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_count_is_reproducible() {
        let input = vec![4, 2, 7, 1, 3];
        let mut a = input.clone();
        let mut b = input.clone();
        assert_eq!(bubble_sort(&mut a, 5), bubble_sort(&mut b, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicates() {
        let mut v = vec![2, 2, 1, 1];
        bubble_sort(&mut v, 4);
        assert_eq!(v, [1, 1, 2, 2]);
    }
}
