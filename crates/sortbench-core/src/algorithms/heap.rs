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

//! In-place heap sort.

/// Sorts the closed range `[left, right]` of `a` in place. Not stable.
///
/// Operates on a 0-based logical window of size `n = right - left + 1`
/// shifted by `left`: heap positions map to slice indices as
/// `left + pos`, with children of `root` at `2*root + 1` and
/// `2*root + 2` in window coordinates. Phase 1 builds a max-heap
/// bottom-up from `n/2 - 1` down to 0; phase 2 repeatedly swaps the root
/// with the last unsorted slot, shrinks the heap, and re-sifts.
///
/// O(N log N) in all cases, no auxiliary allocation.
///
/// # Examples
///
/// ```
/// use sortbench_core::heap_sort;
///
/// let mut v = vec![3, 1, 2];
/// heap_sort(&mut v, 0, 2);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn heap_sort<T: Ord>(a: &mut [T], left: usize, right: usize) {
    if right <= left {
        return;
    }
    let n = right - left + 1;

    for root in (0..n / 2).rev() {
        heapify(a, left, root, n - 1);
    }
    for last in (1..n).rev() {
        a.swap(left, left + last);
        heapify(a, left, 0, last - 1);
    }
}

/// Sifts the subtree rooted at window position `root` down until
/// max-heap order holds over window positions `[0, last]`.
///
/// `base` is the slice index of window position 0; all heap arithmetic
/// stays window-relative and is only shifted by `base` on access.
fn heapify<T: Ord>(a: &mut [T], base: usize, mut root: usize, last: usize) {
    loop {
        let mut largest = root;
        let left_child = 2 * root + 1;
        let right_child = 2 * root + 2;

        if left_child <= last && a[base + left_child] > a[base + largest] {
            largest = left_child;
        }
        if right_child <= last && a[base + right_child] > a[base + largest] {
            largest = right_child;
        }
        if largest == root {
            break;
        }
        a.swap(base + root, base + largest);
        root = largest;
    }
}
