//! Wall-clock timing for the benchmark suites.

use std::time::{Duration, Instant};

/// Time a single invocation, returning its output and elapsed time.
pub fn time_once<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Aggregate statistics over repeated timed invocations.
#[derive(Debug, Clone)]
pub struct TimingStats {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub samples: u32,
}

/// Run `f` through a warmup phase, then measure `trials` invocations.
/// Callers normalize `trials` to a positive count beforehand.
pub fn time_detailed<F>(warmup: u32, trials: u32, mut f: F) -> TimingStats
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let mut durations = Vec::with_capacity(trials as usize);
    for _ in 0..trials {
        let start = Instant::now();
        f();
        durations.push(start.elapsed());
    }

    durations.sort();
    let min = durations.first().copied().unwrap_or_default();
    let max = durations.last().copied().unwrap_or_default();
    let median = if durations.len() % 2 == 1 {
        durations[durations.len() / 2]
    } else {
        let mid = durations.len() / 2;
        (durations[mid - 1] + durations[mid]) / 2
    };
    let total: Duration = durations.iter().sum();
    let mean = total / trials;

    TimingStats {
        mean,
        median,
        min,
        max,
        samples: trials,
    }
}
