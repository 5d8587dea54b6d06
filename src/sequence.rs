use crate::config::EmitterConfig;
use crate::{Error, Result};
use std::iter;

/// Bound each cycle runs up to
pub const THRESHOLD: i32 = 255;

/// Which value a cycle compares against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cutoff {
    /// Check the value reached after advancing, so the first value at or
    /// above the threshold is never printed
    #[default]
    Advanced,
    /// Check the value just printed, so the cycle ends on the first value
    /// at or above the threshold
    Emitted,
}

/// One pass over the sequence, starting from 0, 1
#[derive(Debug, Clone)]
pub struct Cycle {
    current: i32,
    next: i32,
    threshold: i32,
    cutoff: Cutoff,
    done: bool,
}

impl Cycle {
    fn start(threshold: i32, cutoff: Cutoff) -> Self {
        Self {
            current: 0,
            next: 1,
            threshold,
            cutoff,
            done: false,
        }
    }

    /// Yields `current` and advances one step, `None` on overflow
    fn step(&mut self) -> Option<i32> {
        let emitted = self.current;
        let temp = self.current.checked_add(self.next)?;
        self.current = self.next;
        self.next = temp;
        let probe = match self.cutoff {
            Cutoff::Advanced => self.current,
            Cutoff::Emitted => emitted,
        };
        self.done = probe >= self.threshold;
        Some(emitted)
    }
}

impl Iterator for Cycle {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.done {
            return None;
        }
        self.step()
    }
}

/// The restarting sequence, validated so that no cycle can overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    threshold: i32,
    cutoff: Cutoff,
}

impl Sequence {
    pub fn new(threshold: i32, cutoff: Cutoff) -> Result<Self> {
        let mut probe = Cycle::start(threshold, cutoff);
        while !probe.done {
            probe.step().ok_or(Error::Overflow { threshold })?;
        }
        Ok(Self { threshold, cutoff })
    }

    pub fn from_config(config: &EmitterConfig) -> Result<Self> {
        Self::new(config.threshold(), config.cutoff())
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// A fresh cycle, reset to 0, 1
    pub fn cycle(&self) -> Cycle {
        Cycle::start(self.threshold, self.cutoff)
    }

    /// Every cycle back to back, without end
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        let seq = *self;
        iter::repeat_with(move || seq.cycle()).flatten()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            cutoff: Cutoff::Advanced,
        }
    }
}
