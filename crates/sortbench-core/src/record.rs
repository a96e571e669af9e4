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

//! The benchmark record type.

use std::cmp::Ordering;
use std::fmt;

/// A single row from the insurance dataset.
///
/// The record carries seven fields but is ordered solely by `charges`.
/// The remaining fields are opaque payload: they are parsed, carried
/// through every sort, and written back out, but never inspected by the
/// sort logic. Records are immutable after construction, so comparisons
/// are total and consistent across calls.
///
/// # Ordering
///
/// `Ord` is implemented via [`f64::total_cmp`] on `charges`, which gives
/// a total order even in the presence of non-finite values. Equality is
/// defined the same way, so two records with equal charges but different
/// payloads compare equal — exactly what the stability tests rely on.
///
/// # Examples
///
/// ```
/// use sortbench_core::InsuranceRecord;
///
/// let a = InsuranceRecord::new(19, "female", 27.9, 0, "yes", "southwest", 500.0);
/// let b = InsuranceRecord::new(18, "male", 33.77, 1, "no", "southeast", 100.0);
/// assert!(b < a);
/// assert_eq!(a.to_string(), "19,female,27.9,0,yes,southwest,500.0");
/// ```
#[derive(Debug, Clone)]
pub struct InsuranceRecord {
    /// Policy holder age in years.
    pub age: u32,
    /// Policy holder sex.
    pub sex: String,
    /// Body mass index.
    pub bmi: f64,
    /// Number of dependent children.
    pub children: u32,
    /// Smoker flag as it appears in the dataset (`yes`/`no`).
    pub smoker: String,
    /// Residential region.
    pub region: String,
    /// Annual medical charges. This is the ordering key.
    pub charges: f64,
}

impl InsuranceRecord {
    /// Creates a new record.
    pub fn new(
        age: u32,
        sex: impl Into<String>,
        bmi: f64,
        children: u32,
        smoker: impl Into<String>,
        region: impl Into<String>,
        charges: f64,
    ) -> Self {
        Self {
            age,
            sex: sex.into(),
            bmi,
            children,
            smoker: smoker.into(),
            region: region.into(),
            charges,
        }
    }
}

impl PartialEq for InsuranceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.charges.total_cmp(&other.charges) == Ordering::Equal
    }
}

impl Eq for InsuranceRecord {}

impl PartialOrd for InsuranceRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InsuranceRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.charges.total_cmp(&other.charges)
    }
}

impl fmt::Display for InsuranceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:?} keeps the trailing .0 on integral floats (30.0, not 30).
        write!(
            f,
            "{},{},{:?},{},{},{},{:?}",
            self.age, self.sex, self.bmi, self.children, self.smoker, self.region, self.charges
        )
    }
}
