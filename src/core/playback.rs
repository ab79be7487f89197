//! Playback clock
//!
//! Turns wall-clock time into a playhead position while playing. The clock
//! never reads the system time itself; callers pass `Instant`s in, which keeps
//! it deterministic.
//!
//! Every `start` opens a new run identified by a `RunToken`. Tick loops hold
//! on to the token they were started with; once the run ends (stop, toggle,
//! or reaching the end of the timeline) ticks carrying that token come back
//! `Tick::Stale` and change nothing, so a cancelled loop can never resurrect
//! playback or publish an old time.

use std::time::Instant;

use crate::state::Project;

/// Identifies one run of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum ClockState {
    Stopped,
    Running {
        started_at: Instant,
        time_at_start: f64,
        last_published: f64,
    },
}

/// Result of advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still running; publish this time.
    Advanced(f64),
    /// Reached the end of the timeline and stopped; publish this final time.
    Finished(f64),
    /// The token's run is over. Nothing to publish.
    Stale,
}

/// Stopped/running playback clock at 1x real time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    state: ClockState,
    run: u64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            state: ClockState::Stopped,
            run: 0,
        }
    }
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Token of the active run, if playing.
    pub fn current_run(&self) -> Option<RunToken> {
        self.is_running().then_some(RunToken(self.run))
    }

    /// Begin advancing from `current_time`. Starting while already running
    /// keeps the existing run.
    pub fn start(&mut self, current_time: f64, now: Instant) -> RunToken {
        if let Some(token) = self.current_run() {
            return token;
        }
        self.run += 1;
        self.state = ClockState::Running {
            started_at: now,
            time_at_start: current_time,
            last_published: current_time,
        };
        log::info!("Playback started at {:.2}s", current_time);
        RunToken(self.run)
    }

    /// Freeze the clock. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = ClockState::Stopped;
        log::info!("Playback stopped");
        true
    }

    /// Play/pause. Returns the new run's token when playback starts.
    pub fn toggle(&mut self, current_time: f64, now: Instant) -> Option<RunToken> {
        if self.stop() {
            None
        } else {
            Some(self.start(current_time, now))
        }
    }

    /// Advance the run identified by `token` to `now`.
    ///
    /// The published time is `min(time_at_start + elapsed, duration)` and never
    /// goes backwards within a run. Reaching `duration` stops the clock and
    /// yields `Tick::Finished` once; later ticks for the run are stale.
    pub fn tick(&mut self, token: RunToken, now: Instant, duration: f64) -> Tick {
        let ClockState::Running {
            started_at,
            time_at_start,
            last_published,
        } = self.state
        else {
            return Tick::Stale;
        };
        if token.0 != self.run {
            return Tick::Stale;
        }

        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        let time = (time_at_start + elapsed).max(last_published).min(duration);

        if time >= duration {
            self.state = ClockState::Stopped;
            log::info!("Playback reached end of timeline at {:.2}s", time);
            return Tick::Finished(time);
        }

        self.state = ClockState::Running {
            started_at,
            time_at_start,
            last_published: time,
        };
        Tick::Advanced(time)
    }

    /// Seek the project. While running, the run is rebased so playback
    /// continues from the new position without a jump.
    pub fn seek(&mut self, project: &mut Project, time: f64, now: Instant) -> f64 {
        let applied = project.seek(time);
        if self.is_running() {
            self.state = ClockState::Running {
                started_at: now,
                time_at_start: applied,
                last_published: applied,
            };
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    #[test]
    fn test_starts_stopped() {
        let clock = PlaybackClock::new();
        assert!(!clock.is_running());
        assert!(clock.current_run().is_none());
    }

    #[test]
    fn test_advances_with_wall_time() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(12.0, t0);

        assert_eq!(clock.tick(token, t0 + secs(0.5), 600.0), Tick::Advanced(12.5));
        assert_eq!(clock.tick(token, t0 + secs(3.0), 600.0), Tick::Advanced(15.0));
        assert!(clock.is_running());
    }

    #[test]
    fn test_never_decreases_within_a_run() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(0.0, t0);

        let mut last = 0.0;
        for step in [0.2, 0.1, 1.0, 1.0, 0.7, 2.5] {
            match clock.tick(token, t0 + secs(step), 600.0) {
                Tick::Advanced(time) => {
                    assert!(time >= last);
                    last = time;
                }
                other => panic!("unexpected tick {:?}", other),
            }
        }
        assert_eq!(last, 2.5);
    }

    #[test]
    fn test_finishes_exactly_once_without_overshoot() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(598.0, t0);

        assert_eq!(clock.tick(token, t0 + secs(1.0), 600.0), Tick::Advanced(599.0));
        assert_eq!(clock.tick(token, t0 + secs(5.0), 600.0), Tick::Finished(600.0));
        assert!(!clock.is_running());
        assert_eq!(clock.tick(token, t0 + secs(6.0), 600.0), Tick::Stale);
        assert!(!clock.stop());
    }

    #[test]
    fn test_stop_makes_pending_ticks_stale() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(0.0, t0);
        assert!(clock.stop());

        assert_eq!(clock.tick(token, t0 + secs(1.0), 600.0), Tick::Stale);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_old_token_cannot_drive_new_run() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let first = clock.start(0.0, t0);
        clock.stop();
        let second = clock.start(30.0, t0 + secs(10.0));

        assert_ne!(first, second);
        assert_eq!(clock.tick(first, t0 + secs(11.0), 600.0), Tick::Stale);
        assert_eq!(clock.tick(second, t0 + secs(11.0), 600.0), Tick::Advanced(31.0));
    }

    #[test]
    fn test_start_while_running_keeps_run() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(0.0, t0);
        assert_eq!(clock.start(50.0, t0 + secs(1.0)), token);
        assert_eq!(clock.tick(token, t0 + secs(2.0), 600.0), Tick::Advanced(2.0));
    }

    #[test]
    fn test_toggle() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.toggle(0.0, t0);
        assert!(token.is_some());
        assert!(clock.is_running());
        assert_eq!(clock.toggle(1.0, t0 + secs(1.0)), None);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_seek_while_stopped_clamps() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let mut project = Project::seeded();
        assert_eq!(clock.seek(&mut project, 700.0, t0), 600.0);
        assert_eq!(clock.seek(&mut project, -1.0, t0), 0.0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_seek_while_running_rebases() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let mut project = Project::seeded();
        let token = clock.start(0.0, t0);
        assert_eq!(clock.tick(token, t0 + secs(4.0), 600.0), Tick::Advanced(4.0));

        clock.seek(&mut project, 100.0, t0 + secs(5.0));
        assert_eq!(clock.tick(token, t0 + secs(6.0), 600.0), Tick::Advanced(101.0));

        // Seeking backwards is allowed and continues from there.
        clock.seek(&mut project, 20.0, t0 + secs(7.0));
        assert_eq!(clock.tick(token, t0 + secs(7.5), 600.0), Tick::Advanced(20.5));
    }

    #[test]
    fn test_start_at_end_finishes_on_first_tick() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new();
        let token = clock.start(600.0, t0);
        assert_eq!(clock.tick(token, t0, 600.0), Tick::Finished(600.0));
        assert!(!clock.is_running());
    }
}
