use std::hint::black_box;
use std::io::{self, Write};

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::core::config::BenchmarkConfig;
use crate::core::metrics::{format_float, measure_execution_time, RunInfo, Timing};
use crate::core::report::Report;

/// Result of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Run identity
    pub run: RunInfo,
    /// Requested loop count
    pub iterations: i64,
    /// Final accumulator value
    pub sum: i128,
    /// Elapsed time and loops per second
    pub timing: Timing,
}

/// The function under measurement
#[inline(never)]
pub fn add(a: i128, b: i128) -> i128 {
    a + b
}

/// Accumulate `0 + 1 + ... + (n - 1)` one `add` call at a time
pub fn sum_range(n: i64) -> i128 {
    let mut s: i128 = 0;
    for i in 0..n {
        s = black_box(add(s, i128::from(i)));
    }
    s
}

/// Closed form of `sum_range`
pub fn expected_sum(n: i64) -> i128 {
    if n <= 0 {
        return 0;
    }
    let n = i128::from(n);
    n * (n - 1) / 2
}

/// Time `sum_range` for the configured iteration count
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkReport {
    let run = RunInfo::new();
    let n = config.iterations;
    info!("Running addition loop for {} iterations", n);

    let (sum, elapsed) = measure_execution_time(|| sum_range(black_box(n)));
    let timing = Timing::from_elapsed(elapsed, n.max(0) as f64);

    debug!("Sum {} in {:?} ({} loops/s)", sum, elapsed, timing.per_second);

    BenchmarkReport {
        run,
        iterations: n,
        sum,
        timing,
    }
}

impl Report for BenchmarkReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.sum)?;
        writeln!(
            out,
            "{} seconds elapsed, {} loops per second",
            format_float(self.timing.elapsed_secs),
            format_float(self.timing.per_second)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-4, 4), 0);
    }

    #[test]
    fn test_sum_matches_closed_form() {
        for n in [0, 1, 2, 3, 10, 1000, 12_345] {
            assert_eq!(sum_range(n), expected_sum(n), "n = {}", n);
        }
        assert_eq!(sum_range(10), 45);
    }

    #[test]
    fn test_negative_iterations_run_nothing() {
        assert_eq!(sum_range(-5), 0);
        assert_eq!(expected_sum(-5), 0);

        let report = run_benchmark(&BenchmarkConfig::new(-5));
        assert_eq!(report.sum, 0);
        assert_eq!(report.timing.per_second, 0.0);
    }

    #[test]
    fn test_expected_sum_does_not_overflow() {
        let n = i64::MAX;
        let expected = i128::from(n) * (i128::from(n) - 1) / 2;
        assert_eq!(expected_sum(n), expected);
    }

    #[test]
    fn test_run_benchmark_report() {
        let report = run_benchmark(&BenchmarkConfig::new(1000));
        assert_eq!(report.iterations, 1000);
        assert_eq!(report.sum, 499_500);
        assert!(report.timing.elapsed_secs >= 0.0);
        assert!(report.timing.per_second > 0.0);
    }

    #[test]
    fn test_text_output() {
        let report = BenchmarkReport {
            run: RunInfo::new(),
            iterations: 4,
            sum: 6,
            timing: Timing {
                elapsed_secs: 0.5,
                per_second: 8.0,
            },
        };
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "6\n0.5 seconds elapsed, 8.0 loops per second\n"
        );
    }

    #[test]
    fn test_text_output_small_and_zero_values() {
        let report = BenchmarkReport {
            run: RunInfo::new(),
            iterations: 0,
            sum: 0,
            timing: Timing {
                elapsed_secs: 0.000001,
                per_second: 0.0,
            },
        };
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\n1e-06 seconds elapsed, 0.0 loops per second\n"
        );
    }
}
