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

//! Odd-even transposition sort.

/// Sorts the first `size` elements of `a` in place and returns the total
/// number of passes performed.
///
/// Each outer iteration runs two full adjacent-swap passes: an "odd"
/// pass over pairs `(1,2), (3,4), …` and an "even" pass over
/// `(0,1), (2,3), …`. A single sorted flag is reset at the top of each
/// iteration and cleared by any swap in either pass; the loop exits once
/// both passes of an iteration swap nothing.
///
/// The returned step count is always even and includes the final
/// all-no-op pass pair, so it is at least 2. For `size < 2` neither pass
/// has any pair to inspect: the flag stays set and the function returns
/// exactly 2 — defined behavior, not a special case.
///
/// O(N²) worst-case passes.
///
/// # Examples
///
/// ```
/// use sortbench_core::transposition_sort;
///
/// let mut v = vec![2, 1];
/// let steps = transposition_sort(&mut v, 2);
/// assert_eq!(v, [1, 2]);
/// assert_eq!(steps % 2, 0);
/// ```
pub fn transposition_sort<T: Ord>(a: &mut [T], size: usize) -> u64 {
    let mut steps = 0;
    let mut sorted = false;

    while !sorted {
        sorted = true;

        for i in (1..size.saturating_sub(1)).step_by(2) {
            if a[i] > a[i + 1] {
                a.swap(i, i + 1);
                sorted = false;
            }
        }
        steps += 1;

        for i in (0..size.saturating_sub(1)).step_by(2) {
            if a[i] > a[i + 1] {
                a.swap(i, i + 1);
                sorted = false;
            }
        }
        steps += 1;
    }

    steps
}
