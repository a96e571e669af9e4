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

//! Top-down merge sort.

/// Sorts the closed range `[left, right]` of `a` in place.
///
/// Recursively splits at `mid = left + (right - left) / 2`, sorts both
/// halves, then merges them. Stable: the merge step takes from the left
/// run on ties, so equal-key elements keep their original relative order.
///
/// `left >= right` is a no-op. Indices outside the slice are a
/// precondition violation and panic.
///
/// O(N log N) in all cases; each merge allocates a temporary buffer
/// scoped to that call and releases it before returning.
///
/// # Examples
///
/// ```
/// use sortbench_core::merge_sort;
///
/// let mut v = vec![3, 1, 2];
/// merge_sort(&mut v, 0, 2);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn merge_sort<T: Ord + Clone>(a: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort(a, left, mid);
    merge_sort(a, mid + 1, right);
    merge(a, left, mid, right);
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<T: Ord + Clone>(a: &mut [T], left: usize, mid: usize, right: usize) {
    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        // <= keeps the left run's element first on ties (stability).
        if a[i] <= a[j] {
            temp.push(a[i].clone());
            i += 1;
        } else {
            temp.push(a[j].clone());
            j += 1;
        }
    }
    while i <= mid {
        temp.push(a[i].clone());
        i += 1;
    }
    while j <= right {
        temp.push(a[j].clone());
        j += 1;
    }

    a[left..=right].clone_from_slice(&temp);
}
