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

//! SortBench core: sorting algorithms and dataset preparation.
//!
//! This crate contains the algorithmic heart of the benchmark harness:
//!
//! - **Sort algorithms**: five independent, in-place implementations
//!   (merge, quick, heap, bubble, odd-even transposition), each generic
//!   over any totally-ordered element type.
//! - **Record type**: the [`InsuranceRecord`] the harness benchmarks
//!   against, ordered solely by its `charges` field.
//! - **Ordering preparation**: derivation of the three canonical input
//!   orderings (already-sorted, shuffled, reversed) from a base dataset.
//!
//! The algorithms never perform I/O, never allocate beyond the scoped
//! merge buffer, and never retain references past their call. Randomness
//! for the shuffled ordering is supplied by the caller through the
//! [`rand::Rng`] trait.

pub mod algorithms;
pub mod orderings;
pub mod record;

pub use algorithms::{bubble_sort, heap_sort, merge_sort, quick_sort, transposition_sort};
pub use orderings::{prepare_orderings, OrderingVariant, PreparedOrderings};
pub use record::InsuranceRecord;
