//! Playback scheduling for the Life engine

use crate::life::LifeEngine;
use std::time::{Duration, Instant};

/// Drives a [`LifeEngine`] on a timer.
///
/// The driver owns the play/pause state and the step cadence; the engine it
/// wraps never learns about either. "Paused" just means ticks stop stepping.
#[derive(Debug)]
pub struct PlaybackDriver {
    engine: LifeEngine,
    interval: Duration,
    playing: bool,
    last_step: Instant,
}

impl PlaybackDriver {
    /// Wrap an engine with the given step interval, initially paused.
    pub fn new(engine: LifeEngine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            playing: false,
            last_step: Instant::now(),
        }
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LifeEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> LifeEngine {
        self.engine
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Start stepping on the timer. The first timed step lands one full
    /// interval after this call.
    pub fn play(&mut self) {
        self.playing = true;
        self.last_step = Instant::now();
    }

    /// Stop timed stepping. In-flight state is untouched.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// The manual step button: one generation, play state untouched.
    pub fn step_once(&mut self) {
        self.engine.step();
    }

    /// Advance the engine if playing and the interval has elapsed since the
    /// last timed step. At most one generation per call; returns whether a
    /// step ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.duration_since(self.last_step) < self.interval {
            return false;
        }
        self.engine.step();
        self.last_step = now;
        true
    }
}
