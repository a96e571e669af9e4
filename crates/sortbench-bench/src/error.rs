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

//! Error types for benchmark execution.

use thiserror::Error;

/// Benchmark execution error types.
///
/// The sorts themselves cannot fail; everything here comes from the
/// output sinks. A failed write aborts the run and leaves any partially
/// written output as-is (no rollback).
#[derive(Debug, Error)]
pub enum BenchError {
    /// I/O error writing to the analysis log or sorted output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `BenchError`.
pub type Result<T> = std::result::Result<T, BenchError>;
