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

//! Dataset loading for the sorting benchmark.
//!
//! Reads a bounded prefix of [`InsuranceRecord`]s from a comma-delimited
//! file: one header line (skipped), then one record per line. Reading
//! fewer rows than requested is not an error; malformed rows and
//! unreadable files are, and propagate as fatal faults to the caller.
//!
//! [`InsuranceRecord`]: sortbench_core::InsuranceRecord

pub mod error;
mod reader;

pub use error::{DatasetError, Result};
pub use reader::read_dataset;
