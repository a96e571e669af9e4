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

//! Benchmark metric records.

use sortbench_core::OrderingVariant;
use std::fmt;

/// The value of a single measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Elapsed wall-clock seconds for one sort call.
    Seconds(f64),
    /// An algorithm-specific operation count (comparisons or passes).
    Count(u64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Seconds(s) => write!(f, "{}", s),
            MetricValue::Count(c) => write!(f, "{}", c),
        }
    }
}

/// One benchmark measurement, created once per (algorithm, ordering)
/// run and appended to the analysis log. Never mutated or deleted.
///
/// # Examples
///
/// ```
/// use sortbench_bench::Metric;
/// use sortbench_core::OrderingVariant;
///
/// let m = Metric::comparisons("bubble", OrderingVariant::Reversed, 10, 45);
/// assert_eq!(m.to_line(), "bubble,reversed,10,comparisons,45");
/// ```
#[derive(Debug, Clone)]
pub struct Metric {
    /// Lowercased algorithm name as given on the command line.
    pub algorithm: String,
    /// Ordering variant the measurement belongs to.
    pub input_type: OrderingVariant,
    /// Requested input size N.
    pub n: usize,
    /// Metric name: `timeSec` or `comparisons`.
    pub name: &'static str,
    /// Measured value.
    pub value: MetricValue,
}

impl Metric {
    /// Creates a `timeSec` metric.
    pub fn time_sec(
        algorithm: impl Into<String>,
        input_type: OrderingVariant,
        n: usize,
        seconds: f64,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            input_type,
            n,
            name: "timeSec",
            value: MetricValue::Seconds(seconds),
        }
    }

    /// Creates a `comparisons` metric.
    pub fn comparisons(
        algorithm: impl Into<String>,
        input_type: OrderingVariant,
        n: usize,
        count: u64,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            input_type,
            n,
            name: "comparisons",
            value: MetricValue::Count(count),
        }
    }

    /// Renders the comma-joined analysis log line.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.algorithm,
            self.input_type.name(),
            self.n,
            self.name,
            self.value
        )
    }
}
