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

//! Per-case benchmark execution and algorithm dispatch.

use crate::error::Result;
use crate::metrics::Metric;
use crate::sinks::{AnalysisLog, SortedOutput};
use sortbench_core::{
    bubble_sort, heap_sort, merge_sort, quick_sort, transposition_sort, OrderingVariant,
    PreparedOrderings,
};
use std::fmt::Display;
use std::time::Instant;

/// The fixed set of benchmarked algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Bubble sort; records `timeSec` then `comparisons`.
    Bubble,
    /// Odd-even transposition sort; records `comparisons` then `timeSec`.
    Transposition,
    /// Top-down merge sort; records `timeSec` only.
    Merge,
    /// Quick sort (Lomuto, last-element pivot); records `timeSec` only.
    Quick,
    /// Heap sort; records `timeSec` only.
    Heap,
}

impl Algorithm {
    /// Case-insensitive name lookup.
    ///
    /// Returns `None` for any name outside the fixed set. That is an
    /// explicit default, not an error: an unrecognized name skips
    /// sorting and metrics but the case still writes its output block.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name.to_lowercase().as_str() {
            "bubble" => Some(Algorithm::Bubble),
            "transposition" => Some(Algorithm::Transposition),
            "merge" => Some(Algorithm::Merge),
            "quick" => Some(Algorithm::Quick),
            "heap" => Some(Algorithm::Heap),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Transposition => "transposition",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }
}

/// Runs one (algorithm, ordering) case.
///
/// The prepared sequence is cloned privately so the algorithm under
/// test cannot corrupt shared dataset state. The monotonic clock is
/// sampled immediately around the sort call with no other work inside
/// the window; metric lines are appended afterwards in the
/// algorithm-specific order, and the resulting sequence (sorted or, for
/// an unrecognized name, untouched) is written as one labeled block.
pub fn run_case<T>(
    algorithm_name: &str,
    variant: OrderingVariant,
    input: &[T],
    n: usize,
    analysis: &mut AnalysisLog,
    output: &mut SortedOutput,
) -> Result<()>
where
    T: Ord + Clone + Display,
{
    let mut list = input.to_vec();
    let size = list.len();
    let right = size.saturating_sub(1);

    match Algorithm::from_name(algorithm_name) {
        Some(Algorithm::Bubble) => {
            let start = Instant::now();
            let comparisons = bubble_sort(&mut list, size);
            let seconds = start.elapsed().as_secs_f64();

            analysis.append(&Metric::time_sec(algorithm_name, variant, n, seconds))?;
            analysis.append(&Metric::comparisons(algorithm_name, variant, n, comparisons))?;
        }
        Some(Algorithm::Transposition) => {
            let start = Instant::now();
            let steps = transposition_sort(&mut list, size);
            let seconds = start.elapsed().as_secs_f64();

            analysis.append(&Metric::comparisons(algorithm_name, variant, n, steps))?;
            analysis.append(&Metric::time_sec(algorithm_name, variant, n, seconds))?;
        }
        Some(Algorithm::Merge) => {
            let start = Instant::now();
            merge_sort(&mut list, 0, right);
            let seconds = start.elapsed().as_secs_f64();

            analysis.append(&Metric::time_sec(algorithm_name, variant, n, seconds))?;
        }
        Some(Algorithm::Quick) => {
            let start = Instant::now();
            quick_sort(&mut list, 0, right);
            let seconds = start.elapsed().as_secs_f64();

            analysis.append(&Metric::time_sec(algorithm_name, variant, n, seconds))?;
        }
        Some(Algorithm::Heap) => {
            let start = Instant::now();
            heap_sort(&mut list, 0, right);
            let seconds = start.elapsed().as_secs_f64();

            analysis.append(&Metric::time_sec(algorithm_name, variant, n, seconds))?;
        }
        None => {}
    }

    output.write_block(algorithm_name, variant.name(), n, &list)?;
    Ok(())
}

/// Runs the three benchmark cases in fixed order and flushes both sinks.
pub fn run_all<T>(
    algorithm_name: &str,
    prepared: &PreparedOrderings<T>,
    n: usize,
    analysis: &mut AnalysisLog,
    output: &mut SortedOutput,
) -> Result<()>
where
    T: Ord + Clone + Display,
{
    for variant in OrderingVariant::ALL {
        run_case(
            algorithm_name,
            variant,
            prepared.get(variant),
            n,
            analysis,
            output,
        )?;
    }
    analysis.flush()?;
    output.flush()?;
    Ok(())
}
