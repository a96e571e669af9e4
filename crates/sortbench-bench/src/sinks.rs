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

//! Append-only text sinks for metrics and sorted sequences.

use crate::error::Result;
use crate::metrics::Metric;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// The append-only analysis log.
///
/// Opened once per run. If the file did not exist before opening, two
/// header lines are written (a comment line and the column-name line);
/// file presence is the sole signal — an existing file, whatever its
/// contents, is appended to without headers.
///
/// # Examples
///
/// ```no_run
/// use sortbench_bench::{AnalysisLog, Metric};
/// use sortbench_core::OrderingVariant;
///
/// let mut log = AnalysisLog::open("analysis.txt")?;
/// log.append(&Metric::time_sec("merge", OrderingVariant::Shuffled, 100, 0.002))?;
/// log.flush()?;
/// # Ok::<(), sortbench_bench::BenchError>(())
/// ```
pub struct AnalysisLog {
    writer: BufWriter<File>,
}

impl AnalysisLog {
    /// Opens the log for appending, writing headers if the file is new.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Explicit existence check before open: header only on creation.
        let is_new = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);

        if is_new {
            writeln!(writer, "# Sorting Performance Data")?;
            writeln!(writer, "algorithm,inputType,N,metric,value")?;
        }

        Ok(Self { writer })
    }

    /// Appends one metric line.
    pub fn append(&mut self, metric: &Metric) -> Result<()> {
        writeln!(self.writer, "{}", metric.to_line())?;
        Ok(())
    }

    /// Flushes buffered lines to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// The sorted-sequence dump.
///
/// Created fresh (truncating) once per run; each case appends one
/// labeled block regardless of whether the algorithm was recognized.
pub struct SortedOutput {
    writer: BufWriter<File>,
}

impl SortedOutput {
    /// Creates (or truncates) the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Writes one case block: a header line, one line per record, and a
    /// blank separator line.
    pub fn write_block<T: Display>(
        &mut self,
        algorithm: &str,
        ordering: &str,
        n: usize,
        records: &[T],
    ) -> Result<()> {
        writeln!(self.writer, "=== {} / {} / N={} ===", algorithm, ordering, n)?;
        for record in records {
            writeln!(self.writer, "{}", record)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Flushes buffered output to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
