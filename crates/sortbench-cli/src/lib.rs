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

//! Benchmark run orchestration for the `sortbench` binary.

pub mod error;

pub use error::CliError;

use sortbench_bench::{run_all, AnalysisLog, SortedOutput};
use sortbench_core::prepare_orderings;
use sortbench_csv::read_dataset;
use std::path::Path;

/// File the sorted sequences are dumped to, truncated each run.
pub const SORTED_PATH: &str = "sorted.txt";

/// File the metrics are appended to across runs.
pub const ANALYSIS_PATH: &str = "analysis.txt";

/// Executes one full benchmark run.
///
/// Loads the first `n` records from `dataset`, prepares the three
/// orderings (shuffling with the thread-local RNG), opens both sinks,
/// and runs the selected algorithm over each ordering in fixed
/// sequence. The algorithm name is lowercased once here; dispatch on an
/// unrecognized name silently skips sorting and metrics while still
/// writing the output blocks.
///
/// # Errors
///
/// Returns [`CliError`] on any dataset or sink fault. These abort the
/// run; output files already written to stay in whatever state the
/// fault left them.
pub fn run(dataset: &Path, algorithm: &str, n: usize) -> Result<(), CliError> {
    let algorithm = algorithm.to_lowercase();

    let base = read_dataset(dataset, n)?;

    let mut rng = rand::thread_rng();
    let prepared = prepare_orderings(&base, &mut rng);

    let mut output = SortedOutput::create(SORTED_PATH)?;
    let mut analysis = AnalysisLog::open(ANALYSIS_PATH)?;

    run_all(&algorithm, &prepared, n, &mut analysis, &mut output)?;

    println!("Done.");
    Ok(())
}
