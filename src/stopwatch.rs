//! Stopwatch state machine: Idle, Running and Paused, plus lap recording.
//!
//! Elapsed time is always `now - start`, where the start instant is rebased on every resume
//! so paused intervals never count. Ticks only refresh the stored value; they are never
//! counted.

use crate::{
    clock::Clock,
    laps::{LapRow, Laps},
    ticker::Scheduler,
};

use anyhow::{Context, Result};
use log::{debug, warn};

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// What the secondary control does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LapControl {
    Lap,
    Reset,
}

impl LapControl {
    pub fn label(&self) -> &'static str {
        match self {
            LapControl::Lap => "Lap",
            LapControl::Reset => "Reset",
        }
    }
}

pub struct Stopwatch<C: Clock, S: Scheduler> {
    clock: C,
    scheduler: S,
    tick_period: Duration,
    elapsed_ms: Option<u64>,
    start_ms: Option<u64>,
    // Present exactly while running. Dropping it cancels the tick source.
    tick_source: Option<S::Handle>,
    laps: Laps,
    lap_control: LapControl,
}

impl<C: Clock, S: Scheduler> Stopwatch<C, S> {
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(30);

    pub fn new(clock: C, scheduler: S, tick_period: Duration) -> Stopwatch<C, S> {
        Stopwatch {
            clock,
            scheduler,
            tick_period,
            elapsed_ms: None,
            start_ms: None,
            tick_source: None,
            laps: Laps::new(),
            lap_control: LapControl::Lap,
        }
    }

    pub fn is_running(&self) -> bool {
        self.tick_source.is_some()
    }

    pub fn phase(&self) -> Phase {
        match (self.is_running(), self.elapsed_ms) {
            (true, _) => Phase::Running,
            (false, Some(_)) => Phase::Paused,
            (false, None) => Phase::Idle,
        }
    }

    pub fn elapsed_ms(&self) -> Option<u64> {
        self.elapsed_ms
    }

    pub fn laps(&self) -> &Laps {
        &self.laps
    }

    pub fn lap_rows(&self) -> Vec<LapRow> {
        self.laps.rows()
    }

    pub fn lap_control(&self) -> LapControl {
        self.lap_control
    }

    pub fn start_stop_label(&self) -> &'static str {
        if self.is_running() {
            "Stop"
        } else {
            "Start"
        }
    }

    /// The primary control: stops while running, starts otherwise.
    pub fn press_start_stop(&mut self) -> Result<()> {
        if self.is_running() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// The secondary control, dispatched on the current lap control mode.
    pub fn press_lap_control(&mut self) {
        match self.lap_control {
            LapControl::Lap => self.record_lap(),
            LapControl::Reset => self.reset(),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            warn!("Start requested while already running");
            return Ok(());
        }

        let tick_source = self
            .scheduler
            .schedule(self.tick_period)
            .context("Failed to start tick source")?;

        let now = self.clock.now_ms();
        let resumed_from = self.elapsed_ms.unwrap_or(0);
        self.start_ms = Some(now.saturating_sub(resumed_from));
        self.elapsed_ms = Some(resumed_from);
        self.tick_source = Some(tick_source);
        self.lap_control = LapControl::Lap;

        debug!("Stopwatch started at {}ms", resumed_from);
        Ok(())
    }

    pub fn stop(&mut self) {
        let tick_source = match self.tick_source.take() {
            Some(v) => v,
            None => return,
        };
        drop(tick_source);

        self.refresh_elapsed();
        self.lap_control = LapControl::Reset;

        debug!("Stopwatch stopped at {:?}ms", self.elapsed_ms);
    }

    /// Refreshes elapsed time. Ticks that arrive after a stop are ignored.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.refresh_elapsed();
        }
    }

    /// Appends the current cumulative elapsed time while running. While stopped this is a
    /// full reset instead.
    pub fn record_lap(&mut self) {
        if !self.is_running() {
            self.reset();
            return;
        }

        self.refresh_elapsed();
        let lap = self.elapsed_ms.unwrap_or(0);
        if self.laps.push(lap) {
            debug!("Lap {} recorded at {}ms", self.laps.len(), lap);
        } else {
            warn!("Lap limit of {} reached, dropping lap", Laps::MAX_LAPS);
        }
    }

    pub fn reset(&mut self) {
        if self.is_running() {
            warn!("Reset requested while running, ignoring");
            return;
        }

        self.elapsed_ms = None;
        self.start_ms = None;
        self.laps.clear();
        self.lap_control = LapControl::Lap;

        debug!("Stopwatch reset");
    }

    fn refresh_elapsed(&mut self) {
        let start = match self.start_ms {
            Some(v) => v,
            None => return,
        };

        let now = self.clock.now_ms().saturating_sub(start);
        // A clock that steps backwards must not take elapsed time with it
        let elapsed = self.elapsed_ms.map_or(now, |prev| prev.max(now));
        self.elapsed_ms = Some(elapsed);
    }
}
