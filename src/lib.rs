use log::{debug, info};
use std::fmt;

pub mod audio;

/// Default countdown parameters.
pub mod defaults {
    /// Initial duration when the app starts: 25 minutes.
    pub const DURATION_SECS: u32 = 1500;
    /// Remaining seconds at which the warning alert fires.
    pub const WARNING_SECS: u32 = 900;
    /// Remaining seconds at which the critical alert fires.
    pub const CRITICAL_SECS: u32 = 300;
}

/// Where the countdown currently is in its lifecycle.
///
/// `Idle` and `Paused` are equivalent for timing purposes (no tick is
/// scheduled in either); they are distinguished so the UI can tell a fresh
/// timer from an interrupted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Ended,
}

/// A threshold crossing reported by [`CountdownEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Critical,
    Ended,
}

impl AlertKind {
    /// Warning and Critical auto-clear after a display window; Ended stays
    /// on screen until the timer is reset or reconfigured.
    pub fn is_transient(self) -> bool {
        matches!(self, AlertKind::Warning | AlertKind::Critical)
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Warning => write!(f, "warning"),
            AlertKind::Critical => write!(f, "critical"),
            AlertKind::Ended => write!(f, "ended"),
        }
    }
}

/// Remaining-seconds values that trigger alerts. Compared for exact
/// equality against the post-decrement value of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning_secs: u32,
    pub critical_secs: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_secs: defaults::WARNING_SECS,
            critical_secs: defaults::CRITICAL_SECS,
        }
    }
}

/// The countdown state machine.
///
/// Owns every scalar the timer UI renders: seconds remaining, the initial
/// duration, the current phase, and the active alert. The engine is pure --
/// scheduling (the 1 s tick, the 5 s alert clear) lives with the caller,
/// which drives [`tick`](Self::tick) and [`clear_alert`](Self::clear_alert).
///
/// Two counters make external scheduling safe:
/// - `alert_generation` is bumped whenever an alert is set or invalidated.
///   A delayed clear captures the generation it was scheduled for and
///   [`clear_alert`](Self::clear_alert) refuses anything stale, so an old
///   clear can never erase a newer alert.
/// - `revision` is bumped on every observable change, letting a reactive
///   view layer cheaply detect that a re-render is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownEngine {
    remaining_secs: u32,
    initial_secs: u32,
    phase: Phase,
    alert: Option<AlertKind>,
    alert_generation: u64,
    revision: u64,
    thresholds: Thresholds,
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new(defaults::DURATION_SECS)
    }
}

impl CountdownEngine {
    pub fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs,
            initial_secs,
            phase: Phase::Idle,
            alert: None,
            alert_generation: 0,
            revision: 0,
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_thresholds(initial_secs: u32, thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::new(initial_secs)
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn initial_secs(&self) -> u32 {
        self.initial_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn alert(&self) -> Option<AlertKind> {
        self.alert
    }

    /// Generation of the most recent alert. Capture this when scheduling a
    /// delayed clear and pass it back to [`clear_alert`](Self::clear_alert).
    pub fn alert_generation(&self) -> u64 {
        self.alert_generation
    }

    /// Monotonic change counter; bumped by every mutation that alters
    /// observable state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Idle/Paused -> Running. Rejected when nothing is left to count down
    /// or the timer is already running.
    pub fn start(&mut self) -> bool {
        if self.remaining_secs == 0 || self.phase == Phase::Running {
            debug!("start rejected in phase {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Running;
        self.revision += 1;
        true
    }

    /// Running -> Paused. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.revision += 1;
        }
    }

    /// Restore the initial duration and drop any alert. Any pending clear
    /// scheduled against the previous run is invalidated by the generation
    /// bump.
    pub fn reset(&mut self) {
        self.remaining_secs = self.initial_secs;
        self.phase = Phase::Paused;
        self.alert = None;
        self.alert_generation += 1;
        self.revision += 1;
        debug!("reset to {} seconds", self.initial_secs);
    }

    /// Replace the duration wholesale and behave like [`reset`](Self::reset).
    /// Seconds beyond 59 are accepted as-is; input coercion happens at the
    /// UI boundary.
    pub fn apply_duration(&mut self, minutes: u32, seconds: u32) {
        self.initial_secs = minutes.saturating_mul(60).saturating_add(seconds);
        self.remaining_secs = self.initial_secs;
        self.phase = Phase::Paused;
        self.alert = None;
        self.alert_generation += 1;
        self.revision += 1;
        info!("duration set to {} seconds", self.initial_secs);
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing unless the engine is Running with time left, so a stale
    /// interval callback firing after a pause cannot mutate state. The
    /// post-decrement value is compared for exact equality against each
    /// threshold; because the value strictly decreases by 1 per tick and
    /// only resets via `reset`/`apply_duration`, a threshold can neither be
    /// skipped nor fire twice within one continuous run. Reaching 0 ends
    /// the run: the phase becomes `Ended` and ticking stops.
    pub fn tick(&mut self) -> Option<AlertKind> {
        if self.phase != Phase::Running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        self.revision += 1;

        // Ended wins when a configured threshold coincides with 0.
        let crossed = if self.remaining_secs == 0 {
            Some(AlertKind::Ended)
        } else if self.remaining_secs == self.thresholds.critical_secs {
            Some(AlertKind::Critical)
        } else if self.remaining_secs == self.thresholds.warning_secs {
            Some(AlertKind::Warning)
        } else {
            None
        };

        if let Some(kind) = crossed {
            info!("{} alert at {} seconds remaining", kind, self.remaining_secs);
            self.alert = Some(kind);
            self.alert_generation += 1;
            if kind == AlertKind::Ended {
                self.phase = Phase::Ended;
            }
        }
        crossed
    }

    /// Clear a transient alert, but only if `generation` still matches the
    /// alert that scheduled this clear. Returns whether anything changed.
    ///
    /// Ended is never cleared here; it persists until reset/apply.
    pub fn clear_alert(&mut self, generation: u64) -> bool {
        if generation != self.alert_generation {
            debug!("ignoring stale alert clear (generation {})", generation);
            return false;
        }
        match self.alert {
            Some(kind) if kind.is_transient() => {
                self.alert = None;
                self.revision += 1;
                true
            }
            _ => false,
        }
    }
}
