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

//! Structured error types for the benchmark CLI.

use sortbench_bench::BenchError;
use sortbench_csv::DatasetError;
use thiserror::Error;

/// The main error type for CLI execution.
///
/// Everything below the argument parser is an unrecovered fault: the
/// run aborts on first error, leaving any partially written output
/// as-is. Wrong argument counts never reach this type — clap reports
/// usage and exits before any work is done.
#[derive(Debug, Error)]
pub enum CliError {
    /// Dataset could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// A benchmark output sink failed.
    #[error("Benchmark error: {0}")]
    Bench(#[from] BenchError),
}
