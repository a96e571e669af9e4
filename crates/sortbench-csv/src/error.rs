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

//! Error types for dataset loading.

use thiserror::Error;

/// Dataset loading error types.
///
/// Every variant is a fatal fault: the harness attempts each operation
/// exactly once and never retries or recovers. A short read (fewer data
/// rows than requested) is deliberately *not* represented here.
///
/// # Examples
///
/// ```
/// use sortbench_csv::DatasetError;
///
/// let err = DatasetError::TypeMismatch {
///     row: 3,
///     column: "charges",
///     value: "abc".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid numeric field 'charges' at row 3: 'abc'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O error opening or reading the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited record reported by the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A numeric field failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_csv::DatasetError;
    ///
    /// let err = DatasetError::TypeMismatch {
    ///     row: 12,
    ///     column: "age",
    ///     value: "??".to_string(),
    /// };
    /// assert!(err.to_string().contains("row 12"));
    /// ```
    #[error("Invalid numeric field '{column}' at row {row}: '{value}'")]
    TypeMismatch {
        /// Data row number (1-based, excluding the header line).
        row: usize,
        /// Column name that failed to parse.
        column: &'static str,
        /// The offending field value.
        value: String,
    },

    /// A data row carried fewer fields than the record requires.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_csv::DatasetError;
    ///
    /// let err = DatasetError::WidthMismatch { row: 4, expected: 7, actual: 5 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Row width mismatch: expected 7 fields, got 5 in row 4"
    /// );
    /// ```
    #[error("Row width mismatch: expected {expected} fields, got {actual} in row {row}")]
    WidthMismatch {
        /// Data row number (1-based, excluding the header line).
        row: usize,
        /// Required field count.
        expected: usize,
        /// Actual field count in the row.
        actual: usize,
    },
}

/// Convenience type alias for `Result` with `DatasetError`.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = DatasetError::TypeMismatch {
            row: 3,
            column: "bmi",
            value: "heavy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid numeric field 'bmi' at row 3: 'heavy'"
        );
    }

    #[test]
    fn test_width_mismatch_display() {
        let err = DatasetError::WidthMismatch {
            row: 10,
            expected: 7,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Row width mismatch: expected 7 fields, got 3 in row 10"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DatasetError::from(io_err);
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DatasetError>();
    }
}
