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

//! Sorting benchmark command-line interface.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// SortBench - sorting algorithm benchmark harness
///
/// Loads the first N records of a delimited dataset, derives three
/// input orderings (already-sorted, shuffled, reversed), runs the
/// selected algorithm against each, and records timings (plus operation
/// counts for bubble and transposition sorts) to `analysis.txt` while
/// dumping the resulting sequences to `sorted.txt`.
///
/// # Examples
///
/// ```bash
/// # Time merge sort on the first 500 records
/// sortbench insurance.csv merge 500
///
/// # Algorithm names are case-insensitive
/// sortbench insurance.csv BUBBLE 100
/// ```
#[derive(Parser)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - sorting algorithm benchmark harness", long_about = None)]
struct Cli {
    /// Path to the delimited dataset file (first line is a header).
    dataset: PathBuf,

    /// Algorithm name, case-insensitive:
    /// bubble, transposition, merge, quick, or heap.
    algorithm: String,

    /// Number of records to load from the dataset.
    n: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match sortbench_cli::run(&cli.dataset, &cli.algorithm, cli.n) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
