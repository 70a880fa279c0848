//! Tick counter ownership and per-tick frame derivation.
//!
//! Provides [`MultiplexScheduler`], which holds the only mutable state in the
//! system: the tick counter. Every tick it derives a [`Frame`] and then advances
//! the counter, wrapping at [`MultiplexConfig::wrap_period`].

use crate::config::MultiplexConfig;
use crate::frame::Frame;

/// Owns the tick counter and turns it into frames.
///
/// The counter only moves through [`advance`](Self::advance) or
/// [`step`](Self::step), and always stays below the configured wrap period.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexScheduler {
    config: MultiplexConfig,
    tick: u32,
}

impl MultiplexScheduler {
    /// Creates a scheduler with the tick counter at zero.
    pub fn new(config: MultiplexConfig) -> Self {
        Self { config, tick: 0 }
    }

    /// Creates a scheduler starting at `tick`, reduced modulo the wrap period.
    pub fn with_tick(config: MultiplexConfig, tick: u32) -> Self {
        Self {
            tick: tick % config.wrap_period(),
            config,
        }
    }

    /// Returns the current tick counter.
    #[inline]
    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MultiplexConfig {
        &self.config
    }

    /// Derives the frame for the current tick without advancing.
    #[inline]
    pub fn frame(&self) -> Frame {
        Frame::at(self.tick, &self.config)
    }

    /// Advances the tick counter by one, wrapping to zero.
    #[inline]
    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % self.config.wrap_period();
    }

    /// Derives the current frame, then advances.
    pub fn step(&mut self) -> Frame {
        let frame = self.frame();
        self.advance();
        frame
    }
}

impl Default for MultiplexScheduler {
    fn default() -> Self {
        Self::new(MultiplexConfig::default())
    }
}
