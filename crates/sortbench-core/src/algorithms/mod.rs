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

//! The five benchmarked sort algorithms.
//!
//! Each algorithm is a free function operating in place on a mutable
//! slice. The range-based sorts (merge, quick, heap) take a closed index
//! range `[left, right]`; the pass-based sorts (bubble, transposition)
//! take a logical size and additionally return a deterministic operation
//! count that the benchmark runner records as a metric.
//!
//! All five are single-threaded, synchronous, and comparison-based over
//! `T: Ord`. None of them is resizing-aware or parallel; they exist to be
//! measured, not reused as a general sorting library.

mod bubble;
mod heap;
mod merge;
mod quick;
mod transposition;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use transposition::transposition_sort;
