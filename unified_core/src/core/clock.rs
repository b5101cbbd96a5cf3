// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::{Duration, Instant};

/// Lightweight monotonic timer.
///
/// A clock starts measuring the moment it is created. The runner keeps one
/// per frame loop and calls [`restart`](Self::restart) once per frame to
/// obtain the delta time.
#[derive(Debug, Clone)]
pub struct Clock {
    started: Instant,
}

impl Clock {
    /// Creates a clock measuring from now.
    #[inline]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Returns the time elapsed since creation or the last restart.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns the elapsed time in seconds as `f32`.
    #[inline]
    pub fn elapsed_secs_f32(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Returns the elapsed time and rebases the clock to now.
    #[inline]
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.started;
        self.started = now;
        elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const SMALL_DURATION_MS: u64 = 15;
    const SLEEP_DURATION_MS: u64 = 50;
    const SLEEP_MARGIN_MS: u64 = 200;

    /// A freshly created clock reports a near-zero elapsed time.
    #[test]
    fn clock_starts_near_zero() {
        let clock = Clock::new();
        assert!(
            clock.elapsed() < Duration::from_millis(SMALL_DURATION_MS),
            "initial elapsed ({:?}) should be very small",
            clock.elapsed()
        );
    }

    /// Elapsed time tracks real time within a generous margin.
    #[test]
    fn clock_tracks_elapsed_time() {
        let clock = Clock::new();
        thread::sleep(Duration::from_millis(SLEEP_DURATION_MS));

        let elapsed = clock.elapsed();
        assert!(
            elapsed >= Duration::from_millis(SLEEP_DURATION_MS),
            "elapsed ({elapsed:?}) should cover the sleep"
        );
        assert!(
            elapsed < Duration::from_millis(SLEEP_DURATION_MS + SLEEP_MARGIN_MS),
            "elapsed ({elapsed:?}) should stay within the margin"
        );
        assert!(clock.elapsed_secs_f32() >= SLEEP_DURATION_MS as f32 / 1000.0);
    }

    /// restart returns the elapsed span and rebases the clock.
    #[test]
    fn restart_returns_elapsed_and_rebases() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(SLEEP_DURATION_MS));

        let reported = clock.restart();
        assert!(
            reported >= Duration::from_millis(SLEEP_DURATION_MS),
            "restart ({reported:?}) should report the slept span"
        );
        assert!(
            clock.elapsed() < Duration::from_millis(SMALL_DURATION_MS),
            "clock should measure from the restart point"
        );
    }
}
