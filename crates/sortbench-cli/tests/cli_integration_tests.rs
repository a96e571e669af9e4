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

//! End-to-end CLI tests.
//!
//! Each test runs the binary in its own temp directory, since the
//! output files (`sorted.txt`, `analysis.txt`) land in the working
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DATASET: &str = "\
age,sex,bmi,children,smoker,region,charges
19,female,27.9,0,yes,southwest,500.0
18,male,33.77,1,no,southeast,100.0
28,male,33.0,3,no,southeast,300.0
33,male,22.705,0,no,northwest,400.0
32,male,28.88,0,no,northwest,200.0
";

// Test helper to create a sortbench command rooted in a fresh temp dir
// holding the standard dataset.
fn bench_cmd() -> (Command, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("insurance.csv"), DATASET).expect("Failed to write dataset");

    let mut cmd = Command::cargo_bin("sortbench").expect("Failed to find sortbench binary");
    cmd.current_dir(dir.path());
    (cmd, dir)
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("Failed to read output file")
}

// ===== Usage Tests =====

#[test]
fn test_no_arguments_prints_usage_and_touches_nothing() {
    let (mut cmd, dir) = bench_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!dir.path().join("sorted.txt").exists());
    assert!(!dir.path().join("analysis.txt").exists());
}

#[test]
fn test_wrong_argument_count_fails() {
    let (mut cmd, _dir) = bench_cmd();
    cmd.args(["insurance.csv", "merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_numeric_n_aborts() {
    let (mut cmd, dir) = bench_cmd();
    cmd.args(["insurance.csv", "merge", "lots"]).assert().failure();
    assert!(!dir.path().join("sorted.txt").exists());
}

#[test]
fn test_missing_dataset_aborts() {
    let (mut cmd, _dir) = bench_cmd();
    cmd.args(["absent.csv", "merge", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ===== Merge Scenario =====

#[test]
fn test_merge_sorts_ascending_and_logs_three_timings() {
    let (mut cmd, dir) = bench_cmd();
    cmd.args(["insurance.csv", "merge", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."));

    // First three records have charges 500, 100, 300; the
    // already-sorted block lists them ascending.
    let sorted = read(dir.path(), "sorted.txt");
    assert!(sorted.starts_with(
        "=== merge / already-sorted / N=3 ===\n\
         18,male,33.77,1,no,southeast,100.0\n\
         28,male,33.0,3,no,southeast,300.0\n\
         19,female,27.9,0,yes,southwest,500.0\n"
    ));

    let analysis = read(dir.path(), "analysis.txt");
    let lines: Vec<&str> = analysis.lines().collect();
    assert_eq!(lines[0], "# Sorting Performance Data");
    assert_eq!(lines[1], "algorithm,inputType,N,metric,value");
    assert_eq!(
        lines.iter().filter(|l| l.contains(",timeSec,")).count(),
        3
    );
    assert!(!analysis.contains(",comparisons,"));
}

#[test]
fn test_second_run_appends_without_repeating_headers() {
    let (mut cmd, dir) = bench_cmd();
    cmd.args(["insurance.csv", "merge", "3"]).assert().success();

    Command::cargo_bin("sortbench")
        .unwrap()
        .current_dir(dir.path())
        .args(["insurance.csv", "heap", "3"])
        .assert()
        .success();

    let analysis = read(dir.path(), "analysis.txt");
    assert_eq!(
        analysis
            .lines()
            .filter(|l| *l == "# Sorting Performance Data")
            .count(),
        1
    );
    assert_eq!(
        analysis.lines().filter(|l| l.contains(",timeSec,")).count(),
        6
    );
}

// ===== Case-Insensitive Dispatch =====

#[test]
fn test_uppercase_bubble_matches_lowercase() {
    let (mut upper, upper_dir) = bench_cmd();
    upper.args(["insurance.csv", "BUBBLE", "5"]).assert().success();

    let (mut lower, lower_dir) = bench_cmd();
    lower.args(["insurance.csv", "bubble", "5"]).assert().success();

    // Comparison counts are deterministic per ordering, so both runs
    // must log identical comparisons lines (timings naturally differ).
    let count_lines = |dir: &Path| -> Vec<String> {
        read(dir, "analysis.txt")
            .lines()
            .filter(|l| l.contains(",comparisons,"))
            .map(String::from)
            .collect()
    };
    let upper_counts = count_lines(upper_dir.path());
    let lower_counts = count_lines(lower_dir.path());

    assert_eq!(upper_counts.len(), 3);
    // already-sorted and reversed counts are fixed; only the shuffled
    // ordering varies between runs.
    assert_eq!(upper_counts[0], "bubble,already-sorted,5,comparisons,4");
    assert_eq!(lower_counts[0], "bubble,already-sorted,5,comparisons,4");
    assert_eq!(upper_counts[2], "bubble,reversed,5,comparisons,10");
    assert_eq!(lower_counts[2], "bubble,reversed,5,comparisons,10");

    // The dispatch lowercases the name, so block headers match too.
    assert!(read(upper_dir.path(), "sorted.txt")
        .contains("=== bubble / already-sorted / N=5 ==="));
}

// ===== Unrecognized Algorithm =====

#[test]
fn test_unrecognized_algorithm_dumps_unsorted_and_logs_nothing() {
    let (mut cmd, dir) = bench_cmd();
    cmd.args(["insurance.csv", "selection", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."));

    // Headers only, zero metric lines.
    let analysis = read(dir.path(), "analysis.txt");
    assert_eq!(
        analysis,
        "# Sorting Performance Data\nalgorithm,inputType,N,metric,value\n"
    );

    // All three blocks are still written; the shuffled block carries
    // every record, in whatever order the shuffle produced.
    let sorted = read(dir.path(), "sorted.txt");
    assert!(sorted.contains("=== selection / already-sorted / N=5 ==="));
    assert!(sorted.contains("=== selection / shuffled / N=5 ==="));
    assert!(sorted.contains("=== selection / reversed / N=5 ==="));

    let shuffled_block: Vec<&str> = sorted
        .split("=== selection / shuffled / N=5 ===\n")
        .nth(1)
        .unwrap()
        .lines()
        .take_while(|l| !l.is_empty())
        .collect();
    assert_eq!(shuffled_block.len(), 5);
    for charges in ["100.0", "200.0", "300.0", "400.0", "500.0"] {
        assert!(
            shuffled_block.iter().any(|l| l.ends_with(charges)),
            "missing record with charges {}",
            charges
        );
    }
}

// ===== Short Read =====

#[test]
fn test_requesting_more_records_than_available_is_fine() {
    let (mut cmd, dir) = bench_cmd();
    cmd.args(["insurance.csv", "quick", "50"]).assert().success();

    // Block headers carry the requested N; the blocks hold the 5
    // records that exist.
    let sorted = read(dir.path(), "sorted.txt");
    assert!(sorted.contains("=== quick / already-sorted / N=50 ==="));
    let first_block: Vec<&str> = sorted
        .split("=== quick / already-sorted / N=50 ===\n")
        .nth(1)
        .unwrap()
        .lines()
        .take_while(|l| !l.is_empty())
        .collect();
    assert_eq!(first_block.len(), 5);
}
