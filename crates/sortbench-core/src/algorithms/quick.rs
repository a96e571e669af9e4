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

//! Quick sort with Lomuto partitioning.

/// Sorts the closed range `[left, right]` of `a` in place. Not stable.
///
/// Partitions with the Lomuto scheme around the last element of the
/// range, then recurses on both sides of the pivot. Because the pivot is
/// always the last element, an already-sorted input degenerates to
/// O(N²) with recursion depth N-1 — the benchmark's "already-sorted"
/// case deliberately exercises this worst case.
///
/// `left >= right` is a no-op. Average O(N log N), worst case O(N²); no
/// extra space beyond the recursion stack.
///
/// # Examples
///
/// ```
/// use sortbench_core::quick_sort;
///
/// let mut v = vec![3, 1, 2];
/// quick_sort(&mut v, 0, 2);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn quick_sort<T: Ord>(a: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let p = partition(a, left, right);
    if p > left {
        quick_sort(a, left, p - 1);
    }
    quick_sort(a, p + 1, right);
}

/// Lomuto partition of `[left, right]` around `a[right]`.
///
/// Returns the final pivot index. Elements comparing `<=` to the pivot
/// end up on the left side, so ties land left of the pivot.
fn partition<T: Ord>(a: &mut [T], left: usize, right: usize) -> usize {
    let mut i = left;
    for j in left..right {
        if a[j] <= a[right] {
            a.swap(i, j);
            i += 1;
        }
    }
    a.swap(i, right);
    i
}
