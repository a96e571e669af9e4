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

//! Reading a bounded record prefix from a delimited file.

use crate::error::{DatasetError, Result};
use sortbench_core::InsuranceRecord;
use std::path::Path;
use std::str::FromStr;

/// Number of fields in an insurance record row.
const RECORD_WIDTH: usize = 7;

/// Reads up to `n` records from the delimited file at `path`.
///
/// The first line is a column header and is skipped; fields are trimmed
/// of surrounding whitespace. Reading stops after `n` data rows, or
/// earlier if the file runs out — a short read silently returns the rows
/// that exist and is not an error.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened, a row is
/// malformed, a row has fewer than 7 fields, or a numeric field fails to
/// parse. These are fatal faults; the caller is expected to abort.
///
/// # Examples
///
/// ```no_run
/// use sortbench_csv::read_dataset;
///
/// let records = read_dataset("insurance.csv", 100)?;
/// assert!(records.len() <= 100);
/// # Ok::<(), sortbench_csv::DatasetError>(())
/// ```
pub fn read_dataset(path: impl AsRef<Path>, n: usize) -> Result<Vec<InsuranceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::with_capacity(n);
    for (idx, row) in reader.records().take(n).enumerate() {
        let row = row?;
        // 1-based data row number, excluding the header line.
        let row_num = idx + 1;

        if row.len() < RECORD_WIDTH {
            return Err(DatasetError::WidthMismatch {
                row: row_num,
                expected: RECORD_WIDTH,
                actual: row.len(),
            });
        }

        records.push(InsuranceRecord::new(
            parse_field(&row, row_num, 0, "age")?,
            &row[1],
            parse_field(&row, row_num, 2, "bmi")?,
            parse_field(&row, row_num, 3, "children")?,
            &row[4],
            &row[5],
            parse_field(&row, row_num, 6, "charges")?,
        ));
    }

    Ok(records)
}

/// Parses one numeric field, attaching row/column context on failure.
fn parse_field<T: FromStr>(
    row: &csv::StringRecord,
    row_num: usize,
    index: usize,
    column: &'static str,
) -> Result<T> {
    let value = &row[index];
    value.parse().map_err(|_| DatasetError::TypeMismatch {
        row: row_num,
        column,
        value: value.to_string(),
    })
}
