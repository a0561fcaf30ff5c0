use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Identity of a single program run, attached to every report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunInfo {
    /// Unique identifier for the run
    pub run_id: Uuid,
    /// When the run started
    pub started_at: DateTime<Utc>,
}

/// Timing of one measured section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Timing {
    /// Wall-clock time in seconds
    pub elapsed_secs: f64,
    /// Units of work completed per second
    pub per_second: f64,
}

impl RunInfo {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for RunInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl Timing {
    /// Build a timing from an elapsed duration and the amount of work done
    pub fn from_elapsed(elapsed: Duration, units: f64) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();
        Self {
            elapsed_secs,
            per_second: throughput(units, elapsed_secs),
        }
    }
}

/// Work units per second; infinite when the clock did not advance
pub fn throughput(units: f64, elapsed_secs: f64) -> f64 {
    if units <= 0.0 {
        0.0
    } else if elapsed_secs > 0.0 {
        units / elapsed_secs
    } else {
        f64::INFINITY
    }
}

/// Shortest round-trip decimal form of `x`, always with a fraction or an
/// exponent: `8.0`, `0.25`, `1e-06`, `1.5e+16`. Exponent form is used when
/// the decimal exponent is below -4 or at least 16.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0".to_string() } else { "0.0".to_string() };
    }

    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exp) {
        let plain = format!("{}", x);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

/// Run `f` and return its result with the wall-clock time it took
pub fn measure_execution_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    debug!("Measured section took {:?}", duration);

    (result, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        assert_eq!(throughput(100.0, 2.0), 50.0);
        assert_eq!(throughput(0.0, 2.0), 0.0);
        assert_eq!(throughput(0.0, 0.0), 0.0);
        assert!(throughput(10.0, 0.0).is_infinite());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(8.0), "8.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.000001), "1e-06");
        assert_eq!(format_float(0.0000123), "1.23e-05");
        assert_eq!(format_float(123456.789), "123456.789");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_measure_execution_time_returns_result() {
        let (value, duration) = measure_execution_time(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(duration.as_secs_f64() >= 0.0);
    }

    #[test]
    fn test_timing_from_elapsed() {
        let timing = Timing::from_elapsed(Duration::from_millis(500), 1000.0);
        assert_eq!(timing.elapsed_secs, 0.5);
        assert_eq!(timing.per_second, 2000.0);
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(RunInfo::new().run_id, RunInfo::new().run_id);
    }
}
