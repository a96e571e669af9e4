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

//! Benchmark execution for the sorting harness.
//!
//! The runner drives one selected algorithm over the three prepared
//! orderings in fixed sequence (already-sorted, shuffled, reversed),
//! timing each sort with a monotonic clock and recording metrics through
//! two append-only sinks:
//!
//! - [`AnalysisLog`]: one comma-joined metric line per measurement, with
//!   a two-line header written only when the file is first created.
//! - [`SortedOutput`]: one labeled block per case with the resulting
//!   sequence, written unconditionally — including for unrecognized
//!   algorithm names, which skip sorting and metrics but still dump the
//!   unsorted clone.
//!
//! Everything here is single-threaded and runs each case to completion;
//! there is no cancellation, and a pathological O(N²) case simply takes
//! as long as it takes.

pub mod error;
pub mod metrics;
pub mod runner;
pub mod sinks;

pub use error::{BenchError, Result};
pub use metrics::{Metric, MetricValue};
pub use runner::{run_all, run_case, Algorithm};
pub use sinks::{AnalysisLog, SortedOutput};
