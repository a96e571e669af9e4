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

//! Derivation of the three canonical benchmark orderings.

use rand::seq::SliceRandom;
use rand::Rng;

/// The three fixed input orderings each benchmark run exercises, in
/// their fixed execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingVariant {
    /// Base dataset sorted ascending by key.
    AlreadySorted,
    /// The sorted dataset, randomly shuffled.
    Shuffled,
    /// The sorted dataset, sorted descending.
    Reversed,
}

impl OrderingVariant {
    /// All variants in benchmark execution order.
    pub const ALL: [OrderingVariant; 3] = [
        OrderingVariant::AlreadySorted,
        OrderingVariant::Shuffled,
        OrderingVariant::Reversed,
    ];

    /// The name used in metric lines and sorted-output block headers.
    pub fn name(&self) -> &'static str {
        match self {
            OrderingVariant::AlreadySorted => "already-sorted",
            OrderingVariant::Shuffled => "shuffled",
            OrderingVariant::Reversed => "reversed",
        }
    }
}

/// The three independently owned sequences derived from one base
/// dataset. Each is handed to the runner exactly once; the runner clones
/// privately per case, so these are never mutated after preparation.
#[derive(Debug, Clone)]
pub struct PreparedOrderings<T> {
    /// Ascending by key.
    pub sorted: Vec<T>,
    /// Random permutation of `sorted`.
    pub shuffled: Vec<T>,
    /// Descending by key.
    pub reversed: Vec<T>,
}

impl<T> PreparedOrderings<T> {
    /// Returns the sequence for one ordering variant.
    pub fn get(&self, variant: OrderingVariant) -> &[T] {
        match variant {
            OrderingVariant::AlreadySorted => &self.sorted,
            OrderingVariant::Shuffled => &self.shuffled,
            OrderingVariant::Reversed => &self.reversed,
        }
    }
}

/// Builds the three benchmark orderings from one base dataset.
///
/// The base is first sorted ascending (stable); the shuffled ordering is
/// a random permutation of that sorted sequence drawn from `rng`, and
/// the reversed ordering is a stable descending sort of it. Randomness
/// is an external capability: the caller supplies the [`Rng`], the
/// preparer merely consumes it.
pub fn prepare_orderings<T, R>(base: &[T], rng: &mut R) -> PreparedOrderings<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let mut sorted = base.to_vec();
    sorted.sort();

    let mut shuffled = sorted.clone();
    shuffled.shuffle(rng);

    let mut reversed = sorted.clone();
    reversed.sort_by(|x, y| y.cmp(x));

    PreparedOrderings {
        sorted,
        shuffled,
        reversed,
    }
}
